//! Summary statistics and text rendering of a solve.

use crate::item::Item;
use crate::knapsack::Solution;
use std::fmt;

/// Derived statistics for one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub capacity: f64,
    pub total_value: f64,
    /// Sum of every input item's value.
    pub total_possible_value: f64,
    pub total_weight: f64,
    pub unallocated_value: f64,
    /// `total_value / total_possible_value * 100`; 0 when nothing was offered.
    pub efficiency_pct: f64,
    /// `total_weight / capacity * 100`.
    pub utilization_pct: f64,
    /// Items that received any capacity.
    pub selected: usize,
    pub available: usize,
}

impl Summary {
    /// Computes statistics for `solution`, which must come from `items`.
    pub fn new(solution: &Solution, items: &[Item]) -> Self {
        let total_possible_value: f64 = items.iter().map(Item::value).sum();
        let total_weight = solution.total_weight();
        let efficiency_pct = if total_possible_value > 0.0 {
            solution.total_value / total_possible_value * 100.0
        } else {
            0.0
        };
        let utilization_pct = if solution.capacity > 0.0 {
            total_weight / solution.capacity * 100.0
        } else {
            0.0
        };

        Self {
            capacity: solution.capacity,
            total_value: solution.total_value,
            total_possible_value,
            total_weight,
            unallocated_value: solution.unallocated_value(),
            efficiency_pct,
            utilization_pct,
            selected: solution.allocations.len(),
            available: items.len(),
        }
    }
}

const RULE_WIDTH: usize = 50;
const TABLE_WIDTH: usize = 75;

/// Human-readable report of a solve.
///
/// # Examples
///
/// ```
/// use u_knapsack::item::Item;
/// use u_knapsack::knapsack::solve;
/// use u_knapsack::report::Report;
///
/// let items = vec![Item::new("A", 60.0, 10.0).unwrap()];
/// let solution = solve(&items, 50.0).unwrap();
/// let text = Report::new(&solution, &items).to_string();
/// assert!(text.contains("All items fully allocated!"));
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub summary: Summary,
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution, items: &[Item]) -> Self {
        Self {
            summary: Summary::new(solution, items),
            solution,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "─".repeat(TABLE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "ALLOCATION RESULTS")?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Total Urgency Score Achieved: {:.2} / {:.2}",
            s.total_value, s.total_possible_value
        )?;
        writeln!(
            f,
            "Total Weight Allocated: {:.2} kg / {:.2} kg ({:.1}%)",
            s.total_weight, s.capacity, s.utilization_pct
        )?;
        writeln!(
            f,
            "Value Efficiency: {:.1}% of total possible urgency",
            s.efficiency_pct
        )?;
        writeln!(
            f,
            "Items Fully/Partially Selected: {} / {}",
            s.selected, s.available
        )?;

        if !self.solution.allocations.is_empty() {
            writeln!(f)?;
            writeln!(f, "{light}")?;
            writeln!(
                f,
                "{:<20} {:<15} {:<15} {:<10} Ratio",
                "Item", "Weight", "Fraction", "Value"
            )?;
            writeln!(f, "{light}")?;
            for allocation in &self.solution.allocations {
                writeln!(f, "{allocation}")?;
            }
            writeln!(f, "{light}")?;
        }

        writeln!(f)?;
        if self.solution.unallocated.is_empty() {
            writeln!(f, "All items fully allocated!")?;
        } else {
            writeln!(
                f,
                "ITEMS NOT FULLY ALLOCATED (lower priority/no capacity):"
            )?;
            for portion in &self.solution.unallocated {
                writeln!(f, "  - {portion}")?;
            }
            writeln!(f)?;
            writeln!(f, "  Total Unallocated Value: {:.2}", s.unallocated_value)?;
        }
        Ok(())
    }
}
