//! Self-contained solve inputs and batch solving.

use crate::error::AllocError;
use crate::item::Item;
use crate::knapsack::{FractionalKnapsack, Solution};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A capacity together with the items competing for it.
///
/// With the `serde` feature a scenario reads from JSON such as
/// `{"capacity": 50, "items": [{"name": "A", "value": 60, "weight": 10}]}`.
/// Item values and weights are validated while deserializing; capacity is
/// validated when solving.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub capacity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
}

impl Scenario {
    pub fn new(capacity: f64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Total value of every item, taken or not.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Total weight of every item, taken or not.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn solver(&self) -> Result<FractionalKnapsack, AllocError> {
        FractionalKnapsack::new(self.capacity)
    }

    pub fn solve(&self) -> Result<Solution, AllocError> {
        Ok(self.solver()?.solve(&self.items))
    }
}

/// Solves independent scenarios, returning results in input order.
///
/// Runs on the rayon thread pool when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn solve_all(scenarios: &[Scenario]) -> Vec<Result<Solution, AllocError>> {
    scenarios.par_iter().map(Scenario::solve).collect()
}

/// Solves independent scenarios, returning results in input order.
///
/// Runs on the rayon thread pool when the `parallel` feature is enabled.
#[cfg(not(feature = "parallel"))]
pub fn solve_all(scenarios: &[Scenario]) -> Vec<Result<Solution, AllocError>> {
    scenarios.iter().map(Scenario::solve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, value: f64, weight: f64) -> Item {
        Item::new(name, value, weight).unwrap()
    }

    #[test]
    fn test_scenario_solve() {
        let scenario = Scenario::new(
            50.0,
            vec![item("A", 60.0, 10.0), item("B", 100.0, 20.0)],
        );
        let solution = scenario.solve().unwrap();
        assert!((solution.total_value - 160.0).abs() < 1e-10);
        assert!((scenario.total_value() - 160.0).abs() < 1e-10);
        assert!((scenario.total_weight() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_scenario_bad_capacity() {
        let scenario = Scenario::new(0.0, vec![item("A", 1.0, 1.0)]);
        assert_eq!(
            scenario.solve(),
            Err(AllocError::InvalidCapacity { capacity: 0.0 })
        );
    }

    #[test]
    fn test_solve_all_preserves_order() {
        let scenarios: Vec<Scenario> = (1..=20)
            .map(|cap| {
                Scenario::new(
                    cap as f64,
                    vec![item("a", 10.0, 5.0), item("b", 4.0, 4.0)],
                )
            })
            .collect();

        let results = solve_all(&scenarios);
        assert_eq!(results.len(), scenarios.len());
        for (scenario, result) in scenarios.iter().zip(&results) {
            let solution = result.as_ref().unwrap();
            assert!((solution.capacity - scenario.capacity).abs() < 1e-12);
            assert_eq!(*solution, scenario.solve().unwrap());
        }
    }

    #[test]
    fn test_solve_all_reports_each_failure() {
        let scenarios = vec![
            Scenario::new(10.0, vec![item("a", 1.0, 1.0)]),
            Scenario::new(-1.0, vec![item("a", 1.0, 1.0)]),
        ];
        let results = solve_all(&scenarios);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_scenario_from_json() {
        let json = r#"{
            "capacity": 50,
            "items": [
                {"name": "A", "value": 60, "weight": 10},
                {"name": "B", "value": 100, "weight": 20},
                {"name": "C", "value": 120, "weight": 30}
            ]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.items.len(), 3);
        let solution = scenario.solve().unwrap();
        assert!((solution.total_value - 240.0).abs() < 1e-9);

        let text = serde_json::to_string(&solution).unwrap();
        assert!(text.contains("\"fraction_unallocated\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_scenario_json_rejects_bad_item() {
        let json = r#"{"capacity": 5, "items": [{"name": "X", "value": -1, "weight": 1}]}"#;
        let err = serde_json::from_str::<Scenario>(json).unwrap_err();
        assert!(err.to_string().contains("value"));
    }
}
