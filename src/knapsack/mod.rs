//! Greedy fractional knapsack.
//!
//! Ranks items by value-to-weight ratio and fills capacity from the highest
//! ratio down, splitting the first item that does not fit whole. Each solve
//! partitions the input into three disjoint groups:
//!
//! - **fully allocated**: one [`Allocation`] with fraction 1.0
//! - **partially allocated** (at most one item): an [`Allocation`] plus an
//!   [`UnallocatedPortion`] whose fractions sum to 1.0
//! - **fully unallocated**: one [`UnallocatedPortion`] with fraction 1.0
//!
//! # References
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems"

mod order;
mod runner;
mod types;

pub use order::ratio_order;
pub use runner::{solve, FractionalKnapsack};
pub use types::{Allocation, Solution, UnallocatedPortion};
