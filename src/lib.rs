//! Greedy fractional knapsack for capacity-bounded relief allocation.
//!
//! Items carry an urgency value and a weight. Given a transport capacity,
//! the solver admits items in descending value-to-weight ratio and splits
//! the first one that does not fit whole, which maximizes the total
//! urgency captured.
//!
//! - **Item**: immutable, validated value/weight record ([`item`]).
//! - **Knapsack**: the solver and its result types ([`knapsack`]).
//! - **Scenario**: capacity plus items, with batch solving ([`scenario`]).
//! - **Input**: raw text parsing, range limits, duplicate-name warnings
//!   ([`input`]).
//! - **Report**: derived statistics and text rendering ([`report`]).
//! - **Demo**: sample data and reference checks ([`demo`]).
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for items, scenarios and results.
//! - `parallel`: [`scenario::solve_all`] runs on rayon.
//! - `cli`: the `relief` binary.
//!
//! # Example
//!
//! ```
//! use u_knapsack::item::Item;
//! use u_knapsack::knapsack::solve;
//!
//! let items = vec![
//!     Item::new("A", 60.0, 10.0).unwrap(),
//!     Item::new("B", 100.0, 20.0).unwrap(),
//! ];
//! let (total, allocations, unallocated) = solve(&items, 50.0).unwrap().into_parts();
//! assert!((total - 160.0).abs() < 1e-9);
//! assert_eq!(allocations.len(), 2);
//! assert!(unallocated.is_empty());
//! ```

pub mod demo;
pub mod error;
pub mod input;
pub mod item;
pub mod knapsack;
pub mod report;
pub mod scenario;

pub use error::{AllocError, InputError, ItemField};
pub use item::Item;
pub use knapsack::{solve, Allocation, FractionalKnapsack, Solution, UnallocatedPortion};
