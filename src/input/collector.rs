//! Parsing and collecting raw item input.

use super::config::InputLimits;
use crate::error::InputError;
use crate::item::Item;
use std::fmt;
use tracing::warn;

/// Field labels used in messages.
pub const CAPACITY_FIELD: &str = "Capacity";
pub const COUNT_FIELD: &str = "Number of items";
pub const VALUE_FIELD: &str = "Urgency score";
pub const WEIGHT_FIELD: &str = "Weight";

/// Parses `raw` as a finite number in `(min, max]`.
///
/// `max = None` leaves the upper end open.
pub fn parse_number(
    raw: &str,
    field: &str,
    min: f64,
    max: Option<f64>,
) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            field: field.to_owned(),
            raw: trimmed.to_owned(),
        })?;
    check_range(value, field, min, max)
}

/// Parses a strictly positive item count.
pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let count: usize = trimmed.parse().map_err(|_| InputError::NotANumber {
        field: COUNT_FIELD.to_owned(),
        raw: trimmed.to_owned(),
    })?;
    if count == 0 {
        return Err(InputError::TooSmall {
            field: COUNT_FIELD.to_owned(),
            min: 0.0,
        });
    }
    Ok(count)
}

/// Parses a transport capacity under `limits`.
pub fn parse_capacity(raw: &str, limits: &InputLimits) -> Result<f64, InputError> {
    parse_number(raw, CAPACITY_FIELD, 0.0, limits.max_capacity)
}

fn check_range(value: f64, field: &str, min: f64, max: Option<f64>) -> Result<f64, InputError> {
    if value <= min {
        return Err(InputError::TooSmall {
            field: field.to_owned(),
            min,
        });
    }
    if let Some(max) = max {
        if value > max {
            return Err(InputError::TooLarge {
                field: field.to_owned(),
                max,
            });
        }
    }
    Ok(value)
}

/// A name that matches (case-insensitively) one collected earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    pub name: String,
    /// Position of the earlier item with the same name.
    pub first_index: usize,
    /// Position of the item that repeated it.
    pub index: usize,
}

impl fmt::Display for DuplicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate item name '{}'", self.name)
    }
}

/// Accumulates validated items from raw input.
///
/// Duplicate names are accepted; each one is reported as a
/// [`DuplicateName`] warning rather than an error.
///
/// # Examples
///
/// ```
/// use u_knapsack::input::{InputLimits, ItemCollector};
///
/// let mut collector = ItemCollector::new(InputLimits::default()).unwrap();
/// collector.push_raw("Tents", "70", "40").unwrap();
/// let dup = collector.push_raw(" tents ", "10", "5").unwrap();
/// assert!(dup.is_some());
///
/// let collected = collector.finish();
/// assert_eq!(collected.items.len(), 2);
/// assert_eq!(collected.warnings.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ItemCollector {
    limits: InputLimits,
    items: Vec<Item>,
    warnings: Vec<DuplicateName>,
}

/// Items and warnings gathered by an [`ItemCollector`].
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub items: Vec<Item>,
    pub warnings: Vec<DuplicateName>,
}

impl ItemCollector {
    pub fn new(limits: InputLimits) -> Result<Self, InputError> {
        limits.validate().map_err(InputError::Limits)?;
        Ok(Self {
            limits,
            items: Vec::new(),
            warnings: Vec::new(),
        })
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Trims `name` and rejects it when empty.
    pub fn check_name<'a>(&self, name: &'a str) -> Result<&'a str, InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        Ok(name)
    }

    /// Parses and adds one item from its raw fields.
    pub fn push_raw(
        &mut self,
        name: &str,
        value: &str,
        weight: &str,
    ) -> Result<Option<DuplicateName>, InputError> {
        let name = self.check_name(name)?;
        let value = parse_number(value, VALUE_FIELD, 0.0, Some(self.limits.max_value))?;
        let weight = parse_number(weight, WEIGHT_FIELD, 0.0, self.limits.max_weight)?;
        let item = Item::new(name, value, weight)?;
        Ok(self.accept(item))
    }

    /// Adds an already built item, applying the same name and range checks.
    pub fn push(&mut self, item: Item) -> Result<Option<DuplicateName>, InputError> {
        if item.name().trim().is_empty() {
            return Err(InputError::EmptyName);
        }
        check_range(item.value(), VALUE_FIELD, 0.0, Some(self.limits.max_value))?;
        check_range(item.weight(), WEIGHT_FIELD, 0.0, self.limits.max_weight)?;
        Ok(self.accept(item))
    }

    fn accept(&mut self, item: Item) -> Option<DuplicateName> {
        let index = self.items.len();
        let duplicate = self
            .items
            .iter()
            .position(|existing| existing.name().to_lowercase() == item.name().to_lowercase())
            .map(|first_index| DuplicateName {
                name: item.name().to_owned(),
                first_index,
                index,
            });

        if let Some(dup) = &duplicate {
            warn!(name = %dup.name, first = dup.first_index, index, "duplicate item name");
            self.warnings.push(dup.clone());
        }
        self.items.push(item);
        duplicate
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn warnings(&self) -> &[DuplicateName] {
        &self.warnings
    }

    pub fn finish(self) -> Collected {
        Collected {
            items: self.items,
            warnings: self.warnings,
        }
    }
}
