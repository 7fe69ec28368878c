//! Validation errors.
//!
//! [`AllocError`] kinds are raised before solving starts. Once a
//! [`FractionalKnapsack`](crate::knapsack::FractionalKnapsack) and its
//! [`Item`](crate::item::Item)s exist, solving cannot fail.

use std::fmt;
use thiserror::Error;

/// The numeric field of an item that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Value,
    Weight,
}

impl ItemField {
    /// Lowercase field name as it appears in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Value => "value",
            ItemField::Weight => "weight",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while building items or solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    /// An item's value or weight is not a positive finite number.
    #[error("invalid item '{name}': {field} must be positive, got {got}")]
    InvalidItem {
        name: String,
        field: ItemField,
        got: f64,
    },

    /// The solver capacity is not a positive finite number.
    #[error("capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: f64 },
}

/// Errors produced while turning raw user input into items.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid {field}: '{raw}' is not a valid number")]
    NotANumber { field: String, raw: String },

    #[error("Invalid {field}: {field} must be greater than {min}")]
    TooSmall { field: String, min: f64 },

    #[error("Invalid {field}: {field} must be at most {max}")]
    TooLarge { field: String, max: f64 },

    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("invalid input limits: {0}")]
    Limits(String),

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Returns true when `x` is usable as a value, weight or capacity.
pub(crate) fn is_positive_finite(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_item_message_names_field() {
        let err = AllocError::InvalidItem {
            name: "Tents".into(),
            field: ItemField::Weight,
            got: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Tents"));
        assert!(msg.contains("weight"));
    }

    #[test]
    fn test_invalid_capacity_message() {
        let err = AllocError::InvalidCapacity { capacity: 0.0 };
        assert_eq!(err.to_string(), "capacity must be positive, got 0");
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::TooLarge {
            field: "Urgency score".into(),
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid Urgency score: Urgency score must be at most 100"
        );

        let wrapped: InputError = AllocError::InvalidCapacity { capacity: -1.0 }.into();
        assert_eq!(wrapped.to_string(), "capacity must be positive, got -1");
    }

    #[test]
    fn test_positive_finite() {
        assert!(is_positive_finite(1e-12));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(!is_positive_finite(f64::INFINITY));
    }
}
