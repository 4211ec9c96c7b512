//! Aggregate functions over a range

use std::fmt;

/// The functions an aggregate formula may call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    /// Look up a function by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("SUM") {
            Some(AggregateFunction::Sum)
        } else if name.eq_ignore_ascii_case("AVG") {
            Some(AggregateFunction::Avg)
        } else if name.eq_ignore_ascii_case("MIN") {
            Some(AggregateFunction::Min)
        } else if name.eq_ignore_ascii_case("MAX") {
            Some(AggregateFunction::Max)
        } else {
            None
        }
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Avg => "AVG",
            AggregateFunction::Min => "MIN",
            AggregateFunction::Max => "MAX",
        }
    }

    /// Apply the function to the numbers collected from a range
    ///
    /// An empty input yields `0` for every function.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        let sum = || values.iter().fold(0.0, |acc, v| acc + v);
        match self {
            AggregateFunction::Sum => sum(),
            AggregateFunction::Avg => sum() / values.len() as f64,
            AggregateFunction::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateFunction::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(AggregateFunction::from_name("sum"), Some(AggregateFunction::Sum));
        assert_eq!(AggregateFunction::from_name("Avg"), Some(AggregateFunction::Avg));
        assert_eq!(AggregateFunction::from_name("MIN"), Some(AggregateFunction::Min));
        assert_eq!(AggregateFunction::from_name("mAx"), Some(AggregateFunction::Max));
        assert_eq!(AggregateFunction::from_name("AVERAGE"), None);
        assert_eq!(AggregateFunction::from_name(""), None);
    }

    #[test]
    fn test_apply() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(AggregateFunction::Sum.apply(&values), 60.0);
        assert_eq!(AggregateFunction::Avg.apply(&values), 20.0);
        assert_eq!(AggregateFunction::Min.apply(&values), 10.0);
        assert_eq!(AggregateFunction::Max.apply(&values), 30.0);
    }

    #[test]
    fn test_apply_empty_is_zero() {
        for function in [
            AggregateFunction::Sum,
            AggregateFunction::Avg,
            AggregateFunction::Min,
            AggregateFunction::Max,
        ] {
            assert_eq!(function.apply(&[]), 0.0, "{}", function);
        }
    }

    #[test]
    fn test_apply_negative_values() {
        let values = [-5.0, -1.5];
        assert_eq!(AggregateFunction::Min.apply(&values), -5.0);
        assert_eq!(AggregateFunction::Max.apply(&values), -1.5);
        assert_eq!(AggregateFunction::Sum.apply(&values), -6.5);
    }
}
