//! Greedy fractional knapsack pass.

use super::order::ratio_order;
use super::types::{Allocation, Solution, UnallocatedPortion};
use crate::error::{is_positive_finite, AllocError};
use crate::item::Item;
use tracing::{debug, instrument, trace};

/// Fractional knapsack solver bound to a single capacity.
///
/// Items are taken whole in descending ratio order until one no longer
/// fits; that item is split and everything after it is left out. For the
/// fractional relaxation this greedy rule is optimal.
///
/// The solver holds nothing but its capacity, so one instance can be
/// reused for any number of solves and shared across threads.
///
/// # Examples
///
/// ```
/// use u_knapsack::item::Item;
/// use u_knapsack::knapsack::FractionalKnapsack;
///
/// let items = vec![
///     Item::new("A", 60.0, 10.0).unwrap(),
///     Item::new("B", 100.0, 20.0).unwrap(),
///     Item::new("C", 120.0, 30.0).unwrap(),
/// ];
/// let solver = FractionalKnapsack::new(50.0).unwrap();
/// let solution = solver.solve(&items);
///
/// assert!((solution.total_value - 240.0).abs() < 1e-9);
/// assert_eq!(solution.allocations.len(), 3);
/// assert_eq!(solution.unallocated.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalKnapsack {
    capacity: f64,
}

impl FractionalKnapsack {
    /// Creates a solver. Capacity must be a positive finite number.
    pub fn new(capacity: f64) -> Result<Self, AllocError> {
        if !is_positive_finite(capacity) {
            return Err(AllocError::InvalidCapacity { capacity });
        }
        Ok(Self { capacity })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Allocates capacity across `items`.
    #[instrument(level = "debug", skip(self, items), fields(items = items.len(), capacity = self.capacity))]
    pub fn solve(&self, items: &[Item]) -> Solution {
        if items.is_empty() {
            return Solution::empty(self.capacity);
        }

        let mut solution = Solution::empty(self.capacity);
        let mut remaining = self.capacity;

        for index in ratio_order(items) {
            let item = &items[index];

            if remaining <= 0.0 {
                solution.unallocated.push(UnallocatedPortion {
                    name: item.name().to_owned(),
                    weight: item.weight(),
                    value: item.value(),
                    ratio: item.ratio(),
                    fraction_unallocated: 1.0,
                });
                continue;
            }

            if item.weight() <= remaining {
                solution.allocations.push(Allocation {
                    name: item.name().to_owned(),
                    weight_allocated: item.weight(),
                    fraction: 1.0,
                    value_gained: item.value(),
                    ratio: item.ratio(),
                });
                remaining -= item.weight();
                solution.total_value += item.value();
            } else {
                // weight > remaining > 0, so fraction is in (0, 1).
                let fraction = remaining / item.weight();
                let value_gained = item.value() * fraction;
                trace!(item = item.name(), fraction, "splitting item");

                solution.allocations.push(Allocation {
                    name: item.name().to_owned(),
                    weight_allocated: remaining,
                    fraction,
                    value_gained,
                    ratio: item.ratio(),
                });
                solution.total_value += value_gained;

                let left = 1.0 - fraction;
                solution.unallocated.push(UnallocatedPortion {
                    name: item.name().to_owned(),
                    weight: item.weight() * left,
                    value: item.value() * left,
                    ratio: item.ratio(),
                    fraction_unallocated: left,
                });
                remaining = 0.0;
            }
        }

        debug!(
            total_value = solution.total_value,
            allocated = solution.allocations.len(),
            unallocated = solution.unallocated.len(),
            "solve finished"
        );
        solution
    }
}

/// Builds a solver for `capacity` and solves `items` in one call.
pub fn solve(items: &[Item], capacity: f64) -> Result<Solution, AllocError> {
    Ok(FractionalKnapsack::new(capacity)?.solve(items))
}
