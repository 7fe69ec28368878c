//! Sample data: the relief demo, reference checks and random instances.

use crate::error::AllocError;
use crate::item::Item;
use crate::scenario::Scenario;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Capacity of the built-in demo.
pub const DEMO_CAPACITY: f64 = 60.0;

/// Tolerance used when comparing reference check results.
pub const CHECK_TOLERANCE: f64 = 0.01;

/// Smallest capacity used to stand in for "no capacity at all".
pub const NEAR_ZERO_CAPACITY: f64 = 1e-9;

const DEMO_ITEMS: [(&str, f64, f64); 6] = [
    ("Medical Supplies", 90.0, 15.0),
    ("Water Bottles", 85.0, 25.0),
    ("Food Packets", 80.0, 30.0),
    ("Blankets", 60.0, 20.0),
    ("Tents", 70.0, 40.0),
    ("First Aid Kits", 95.0, 10.0),
];

fn build(rows: &[(&str, f64, f64)]) -> Result<Vec<Item>, AllocError> {
    rows.iter()
        .map(|&(name, value, weight)| Item::new(name, value, weight))
        .collect()
}

/// Six relief items competing for a 60 kg transport.
pub fn demo_scenario() -> Result<Scenario, AllocError> {
    Ok(Scenario::new(DEMO_CAPACITY, build(&DEMO_ITEMS)?))
}

/// A scenario with a known optimal value.
#[derive(Debug, Clone)]
pub struct ReferenceCheck {
    pub name: &'static str,
    pub scenario: Scenario,
    pub expected_value: f64,
}

/// Result of running one [`ReferenceCheck`].
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub expected_value: f64,
    pub result: Result<f64, AllocError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.result, Ok(got) if (got - self.expected_value).abs() < CHECK_TOLERANCE)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(got) => write!(
                f,
                "{}: Got {:.2}, Expected {:.2}",
                if self.passed() { "PASS" } else { "FAIL" },
                got,
                self.expected_value
            ),
            Err(e) => write!(f, "ERROR: {e}"),
        }
    }
}

impl ReferenceCheck {
    pub fn run(&self) -> CheckOutcome {
        CheckOutcome {
            name: self.name,
            expected_value: self.expected_value,
            result: self.scenario.solve().map(|s| s.total_value),
        }
    }
}

/// The standard edge and textbook cases.
pub fn reference_checks() -> Result<Vec<ReferenceCheck>, AllocError> {
    Ok(vec![
        ReferenceCheck {
            name: "Edge Case: Near-Zero Capacity",
            scenario: Scenario::new(NEAR_ZERO_CAPACITY, build(&[("Item1", 10.0, 5.0)])?),
            expected_value: 0.0,
        },
        ReferenceCheck {
            name: "Edge Case: Empty Items",
            scenario: Scenario::new(100.0, Vec::new()),
            expected_value: 0.0,
        },
        ReferenceCheck {
            name: "Standard Case: All Items Fit",
            scenario: Scenario::new(50.0, build(&[("A", 60.0, 10.0), ("B", 100.0, 20.0)])?),
            expected_value: 160.0,
        },
        ReferenceCheck {
            name: "Fractional Case: Partial Item",
            scenario: Scenario::new(
                50.0,
                build(&[("A", 60.0, 10.0), ("B", 100.0, 20.0), ("C", 120.0, 30.0)])?,
            ),
            expected_value: 240.0,
        },
    ])
}

/// Seeded random instance with `n` items.
///
/// Values are drawn from `[1, 100]`, weights from `[1, 50]`, and the
/// capacity is 40% of the total weight.
pub fn random_scenario(n: usize, seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..n)
        .filter_map(|i| {
            let value = rng.random_range(1.0..=100.0);
            let weight = rng.random_range(1.0..=50.0);
            Item::new(format!("item-{i}"), value, weight).ok()
        })
        .collect();
    let total_weight: f64 = items.iter().map(Item::weight).sum();
    let capacity = (total_weight * 0.4).max(1.0);
    Scenario::new(capacity, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_solution() {
        let scenario = demo_scenario().unwrap();
        let solution = scenario.solve().unwrap();

        // Kits 9.5, Medical 6.0, Water 3.4 whole (50 kg), then 10 of 20 kg
        // of Blankets (3.0).
        let names: Vec<&str> = solution.allocations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["First Aid Kits", "Medical Supplies", "Water Bottles", "Blankets"]
        );
        assert!((solution.total_value - 300.0).abs() < 1e-9);
        assert!((solution.allocations[3].fraction - 0.5).abs() < 1e-9);

        let left: Vec<&str> = solution.unallocated.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(left, vec!["Blankets", "Food Packets", "Tents"]);
    }

    #[test]
    fn test_reference_checks_pass() {
        for check in reference_checks().unwrap() {
            let outcome = check.run();
            assert!(outcome.passed(), "{}: {}", outcome.name, outcome);
        }
    }

    #[test]
    fn test_check_outcome_display() {
        let pass = CheckOutcome {
            name: "x",
            expected_value: 160.0,
            result: Ok(160.0),
        };
        assert_eq!(pass.to_string(), "PASS: Got 160.00, Expected 160.00");

        let fail = CheckOutcome {
            name: "x",
            expected_value: 160.0,
            result: Ok(150.0),
        };
        assert!(!fail.passed());
        assert!(fail.to_string().starts_with("FAIL"));

        let err = CheckOutcome {
            name: "x",
            expected_value: 0.0,
            result: Err(AllocError::InvalidCapacity { capacity: 0.0 }),
        };
        assert!(!err.passed());
        assert!(err.to_string().starts_with("ERROR"));
    }

    #[test]
    fn test_random_scenario_deterministic() {
        let a = random_scenario(25, 7);
        let b = random_scenario(25, 7);
        assert_eq!(a, b);
        assert_eq!(a.items.len(), 25);
        assert!(a.items.iter().all(|it| it.value() >= 1.0 && it.value() <= 100.0));
        assert!((a.capacity - (a.total_weight() * 0.4).max(1.0)).abs() < 1e-10);
        assert!(a.solve().is_ok());
    }

    #[test]
    fn test_random_scenario_empty() {
        let s = random_scenario(0, 1);
        assert!(s.items.is_empty());
        assert!((s.capacity - 1.0).abs() < 1e-12);
    }
}
