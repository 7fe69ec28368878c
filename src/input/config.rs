//! Input range configuration.

/// Bounds applied to user-supplied numbers before items are built.
///
/// # Examples
///
/// ```
/// use u_knapsack::input::InputLimits;
///
/// let limits = InputLimits::default()
///     .with_max_value(10.0)
///     .with_max_weight(500.0)
///     .with_large_batch_threshold(20);
/// assert!(limits.validate().is_ok());
/// assert!(limits.is_large_batch(21));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InputLimits {
    /// Largest accepted urgency score (inclusive).
    pub max_value: f64,

    /// Largest accepted item weight (inclusive). `None` = unbounded.
    pub max_weight: Option<f64>,

    /// Largest accepted capacity (inclusive). `None` = unbounded.
    pub max_capacity: Option<f64>,

    /// Item counts above this ask for confirmation in interactive use.
    pub large_batch_threshold: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_value: 100.0,
            max_weight: None,
            max_capacity: None,
            large_batch_threshold: 100,
        }
    }
}

impl InputLimits {
    pub fn with_max_value(mut self, max: f64) -> Self {
        self.max_value = max;
        self
    }

    pub fn with_max_weight(mut self, max: f64) -> Self {
        self.max_weight = Some(max);
        self
    }

    pub fn with_max_capacity(mut self, max: f64) -> Self {
        self.max_capacity = Some(max);
        self
    }

    pub fn with_large_batch_threshold(mut self, n: usize) -> Self {
        self.large_batch_threshold = n;
        self
    }

    /// Returns true when `count` items warrants a confirmation prompt.
    pub fn is_large_batch(&self, count: usize) -> bool {
        count > self.large_batch_threshold
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_value.is_finite() && self.max_value > 0.0) {
            return Err(format!("max_value must be positive, got {}", self.max_value));
        }
        if let Some(max) = self.max_weight {
            if !(max.is_finite() && max > 0.0) {
                return Err(format!("max_weight must be positive, got {max}"));
            }
        }
        if let Some(max) = self.max_capacity {
            if !(max.is_finite() && max > 0.0) {
                return Err(format!("max_capacity must be positive, got {max}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = InputLimits::default();
        assert!((limits.max_value - 100.0).abs() < 1e-10);
        assert_eq!(limits.max_weight, None);
        assert_eq!(limits.large_batch_threshold, 100);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_large_batch_boundary() {
        let limits = InputLimits::default();
        assert!(!limits.is_large_batch(100));
        assert!(limits.is_large_batch(101));
    }

    #[test]
    fn test_validate_bad_max_value() {
        assert!(InputLimits::default().with_max_value(0.0).validate().is_err());
        assert!(InputLimits::default()
            .with_max_value(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_max_weight() {
        let limits = InputLimits::default().with_max_weight(-3.0);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_validate_bad_max_capacity() {
        let limits = InputLimits::default().with_max_capacity(0.0);
        assert!(limits.validate().is_err());
    }
}
