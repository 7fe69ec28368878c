//! Result types produced by a solve.

use std::fmt;

/// The portion of one item admitted into the capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Name copied from the source item.
    pub name: String,

    /// Weight consumed, in `(0, item.weight]`.
    pub weight_allocated: f64,

    /// `weight_allocated / item.weight`, in `(0, 1]`.
    pub fraction: f64,

    /// `item.value * fraction`.
    pub value_gained: f64,

    /// Ratio of the source item.
    pub ratio: f64,
}

impl Allocation {
    /// Whether the whole item was taken.
    pub fn is_full(&self) -> bool {
        self.fraction >= 1.0
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:>6.2} kg      {:>5.1}%         {:>6.2}    {:.2}",
            self.name,
            self.weight_allocated,
            self.fraction * 100.0,
            self.value_gained,
            self.ratio
        )
    }
}

/// The portion of one item left outside the capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnallocatedPortion {
    pub name: String,

    /// Leftover weight.
    pub weight: f64,

    /// Leftover value.
    pub value: f64,

    pub ratio: f64,

    /// Share of the item not admitted, in `(0, 1]`.
    pub fraction_unallocated: f64,
}

impl fmt::Display for UnallocatedPortion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} kg ({:.1}% unallocated) | Urgency: {:.2} | Ratio: {:.2}",
            self.name,
            self.weight,
            self.fraction_unallocated * 100.0,
            self.value,
            self.ratio
        )
    }
}

/// Outcome of one solve call.
///
/// Both lists are in processing order (descending ratio, ties in input
/// order), not in the caller's input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Capacity the solve ran against.
    pub capacity: f64,

    /// Sum of `value_gained` across all allocations.
    pub total_value: f64,

    pub allocations: Vec<Allocation>,

    pub unallocated: Vec<UnallocatedPortion>,
}

impl Solution {
    pub(crate) fn empty(capacity: f64) -> Self {
        Self {
            capacity,
            total_value: 0.0,
            allocations: Vec::new(),
            unallocated: Vec::new(),
        }
    }

    /// Sum of allocated weight. Never exceeds the capacity.
    pub fn total_weight(&self) -> f64 {
        self.allocations.iter().map(|a| a.weight_allocated).sum()
    }

    /// Sum of value left outside the capacity.
    pub fn unallocated_value(&self) -> f64 {
        self.unallocated.iter().map(|u| u.value).sum()
    }

    /// Capacity not consumed by any allocation.
    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity - self.total_weight()).max(0.0)
    }

    /// Returns true when nothing was left unallocated.
    pub fn is_complete(&self) -> bool {
        self.unallocated.is_empty()
    }

    /// Splits into `(total_value, allocations, unallocated)`.
    pub fn into_parts(self) -> (f64, Vec<Allocation>, Vec<UnallocatedPortion>) {
        (self.total_value, self.allocations, self.unallocated)
    }
}
