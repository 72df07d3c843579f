use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::model::{config::ScoringConfig, error::ScoringError, structures::metric::Metric};

/// `Σ weight × value / n`, where `n` is the number of factors.
///
/// This is a mean of weighted terms, not a weighted average: the divisor
/// is the factor count rather than the sum of the weights.
pub fn composite_score(
    symbol: &str,
    normalized: &IndexMap<Metric, f64>,
    config: &ScoringConfig
) -> Result<f64, ScoringError> {
    let mut total = 0.0;
    let mut n = 0;

    for metric in Metric::iter() {
        let value = normalized.get(&metric).ok_or_else(|| ScoringError::MissingMetric {
            symbol: symbol.to_string(),
            metric
        })?;
        let weight = config.weight(metric).ok_or(ScoringError::MissingWeight { metric })?;

        total += weight * value;
        n += 1;
    }

    Ok(total / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn uniform(value: f64) -> IndexMap<Metric, f64> {
        Metric::iter().map(|m| (m, value)).collect()
    }

    #[test]
    fn test_all_hundred() {
        let composite = composite_score("a", &uniform(100.0), &ScoringConfig::default()).unwrap();

        assert_abs_diff_eq!(composite, 100.0 * 15.74 / 13.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_zero() {
        let composite = composite_score("a", &uniform(0.0), &ScoringConfig::default()).unwrap();

        assert_eq!(composite, 0.0);
    }

    #[test]
    fn test_single_factor() {
        let mut values = uniform(0.0);
        values.insert(Metric::Voyage, 13.0);

        let composite = composite_score("a", &values, &ScoringConfig::default()).unwrap();

        assert_abs_diff_eq!(composite, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear() {
        let config = ScoringConfig::default();
        let mut a = uniform(10.0);
        a.insert(Metric::Ship, 40.0);
        let b = uniform(20.0);
        let sum: IndexMap<Metric, f64> = Metric::iter().map(|m| (m, a[&m] + b[&m])).collect();

        let lhs = composite_score("a", &sum, &config).unwrap();
        let rhs = composite_score("a", &a, &config).unwrap() + composite_score("b", &b, &config).unwrap();

        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let config = ScoringConfig::default();
        let forward: IndexMap<Metric, f64> = Metric::iter().enumerate().map(|(i, m)| (m, i as f64)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_abs_diff_eq!(
            composite_score("a", &forward, &config).unwrap(),
            composite_score("a", &reversed, &config).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_weight() {
        let mut config = ScoringConfig::default();
        config.weights.shift_remove(&Metric::Ship);

        let err = composite_score("kirk", &uniform(50.0), &config).unwrap_err();

        assert_eq!(err, ScoringError::MissingWeight { metric: Metric::Ship });
    }

    #[test]
    fn test_missing_factor() {
        let mut values = uniform(50.0);
        values.shift_remove(&Metric::Quipment);

        let err = composite_score("kirk", &values, &ScoringConfig::default()).unwrap_err();

        assert_eq!(
            err,
            ScoringError::MissingMetric {
                symbol: "kirk".to_string(),
                metric: Metric::Quipment
            }
        );
    }
}
