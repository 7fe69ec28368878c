//! Greedy processing order.

use crate::item::Item;
use std::cmp::Ordering;

/// Returns indices into `items`, highest ratio first.
///
/// The sort is stable: items with equal ratio keep their input order.
/// The caller's slice is left untouched.
pub fn ratio_order(items: &[Item]) -> Vec<usize> {
    let ratios: Vec<f64> = items.iter().map(Item::ratio).collect();
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| descending(ratios[a], ratios[b]));
    indices
}

/// Descending order on ratios. Both are finite and positive because
/// [`Item::new`] enforces it, so `total_cmp` agrees with `partial_cmp`.
fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
