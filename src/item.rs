//! Relief items competing for transport capacity.

use crate::error::{is_positive_finite, AllocError, ItemField};

/// An immutable item with a positive value (urgency) and weight.
///
/// The value-to-weight [`ratio`](Item::ratio) is derived on every read,
/// so it can never disagree with the fields it comes from.
///
/// # Examples
///
/// ```
/// use u_knapsack::item::Item;
///
/// let kits = Item::new("First Aid Kits", 95.0, 10.0).unwrap();
/// assert!((kits.ratio() - 9.5).abs() < 1e-12);
///
/// assert!(Item::new("Broken", 10.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawItem"))]
pub struct Item {
    name: String,
    value: f64,
    weight: f64,
}

impl Item {
    /// Creates an item, checking weight first and then value.
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Result<Self, AllocError> {
        let name = name.into();
        if !is_positive_finite(weight) {
            return Err(AllocError::InvalidItem {
                name,
                field: ItemField::Weight,
                got: weight,
            });
        }
        if !is_positive_finite(value) {
            return Err(AllocError::InvalidItem {
                name,
                field: ItemField::Value,
                got: value,
            });
        }
        Ok(Self {
            name,
            value,
            weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Value per unit of weight. The greedy priority key.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

/// Unvalidated wire form; deserialization goes through [`Item::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawItem {
    name: String,
    value: f64,
    weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawItem> for Item {
    type Error = AllocError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.name, raw.value, raw.weight)
    }
}
