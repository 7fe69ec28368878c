//! Input layer: raw text to validated items.
//!
//! Parses numbers with range checks, rejects empty names and flags
//! duplicate names before anything reaches the solver. Urgency scores
//! default to the `(0, 100]` display convention (see [`InputLimits`]).

mod collector;
mod config;

pub use collector::{
    parse_capacity, parse_count, parse_number, Collected, DuplicateName, ItemCollector,
    CAPACITY_FIELD, COUNT_FIELD, VALUE_FIELD, WEIGHT_FIELD,
};
pub use config::InputLimits;
