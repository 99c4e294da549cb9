//! Summary statistics over Monte Carlo samples.
//!
//! All helpers return `0.0` for an empty slice; the aggregator never calls
//! them with one.

/// Minutes available before a run counts as over budget.
pub const BUDGET_MINUTES: f64 = 300.0;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Standard deviation with the sample size as divisor.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// How far under the 300 minute budget a single run finished, in percent.
pub fn efficiency_percent(total_minutes: f64) -> f64 {
    clamp_percent(100.0 - total_minutes / BUDGET_MINUTES * 100.0)
}

/// Aggregate score on a 0..=100 scale, derived from the sample mean.
pub fn performance_score(mean_minutes: f64) -> f64 {
    clamp_percent(100.0 - mean_minutes / 3.0)
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn basic_statistics_over_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(min(&values), 2.0);
        assert_eq!(max(&values), 9.0);
        assert!((population_std_dev(&values) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn population_std_dev_matches_moment_formula() {
        let values = [31.2, 29.8, 33.4, 30.1, 35.9, 28.7, 32.0];
        let mean_of_squares = mean(&values.map(|v| v * v));
        let expected = (mean_of_squares - mean(&values).powi(2)).sqrt();
        assert!((population_std_dev(&values) - expected).abs() < 1e-6);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let values = [42.0];
        assert_eq!(population_std_dev(&values), 0.0);
        assert_eq!(min(&values), max(&values));
    }

    #[test]
    fn empty_sample_yields_zeroes() {
        let values: [f64; 0] = [];
        assert_eq!(mean(&values), 0.0);
        assert_eq!(min(&values), 0.0);
        assert_eq!(max(&values), 0.0);
        assert_eq!(population_std_dev(&values), 0.0);
    }

    #[test]
    fn efficiency_percent_is_relative_to_budget() {
        assert!((efficiency_percent(150.0) - 50.0).abs() < EPSILON);
        assert_eq!(efficiency_percent(0.0), 100.0);
        assert_eq!(efficiency_percent(300.0), 0.0);
        assert_eq!(efficiency_percent(1000.0), 0.0);
    }

    #[test]
    fn performance_score_is_clamped() {
        assert!((performance_score(150.0) - 50.0).abs() < EPSILON);
        assert_eq!(performance_score(1000.0), 0.0);
        assert_eq!(performance_score(-30.0), 100.0);
    }

    #[test]
    fn efficiency_and_performance_coincide_for_equal_inputs() {
        // Both reduce to 100 - minutes / 3; they differ only in what is fed in.
        for minutes in [0.0, 60.0, 120.0, 240.0, 299.0] {
            assert!((efficiency_percent(minutes) - performance_score(minutes)).abs() < EPSILON);
        }
    }
}
