//! Uncertainty criteria evaluation.

use super::config::UncertaintyConfig;
use crate::payoff::{normalize_weights, uniform_weights, PayoffMatrix};
use crate::selection::{CriterionScores, Direction};

/// Result of an uncertainty criteria evaluation.
///
/// Each field holds one score per alternative plus the winning index
/// for that criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncertaintyResult {
    /// Optimistic criterion: the row's best-case value.
    pub maximax: CriterionScores,

    /// Pessimistic criterion: the row's worst-case value.
    pub wald: CriterionScores,

    /// Pessimism-weighted blend: q·worst + (1 − q)·best.
    pub hurwicz: CriterionScores,

    /// Weighted average payoff: classical Laplace under uniform
    /// weights, Bayes-Laplace under known probabilities.
    pub laplace: CriterionScores,
}

/// Evaluates the uncertainty criteria.
pub struct UncertaintyRunner;

impl UncertaintyRunner {
    /// Computes all four criteria for `payoffs` under `config`.
    ///
    /// Pure and infallible: weights are normalized silently (uniform
    /// fallback on a non-positive sum), the pessimism coefficient is
    /// used as given, and an empty matrix yields empty score vectors
    /// with best indices 0.
    ///
    /// The weight vector is normalized exactly as supplied, without
    /// truncation to the state count; states beyond its length
    /// contribute weight 0 to the Laplace average.
    pub fn run(payoffs: &PayoffMatrix, config: &UncertaintyConfig) -> UncertaintyResult {
        let m = payoffs.alternatives();
        let n = payoffs.states();
        let weights = match &config.weights {
            Some(w) => normalize_weights(w),
            None => uniform_weights(n),
        };
        let is_gain = config.orientation.is_gain();
        let q = config.pessimism;

        let mut maximax = Vec::with_capacity(m);
        let mut wald = Vec::with_capacity(m);
        let mut hurwicz = Vec::with_capacity(m);
        let mut laplace = Vec::with_capacity(m);

        for i in 0..m {
            let max = payoffs.row_max(i);
            let min = payoffs.row_min(i);
            let (best, worst) = if is_gain { (max, min) } else { (min, max) };

            maximax.push(best);
            wald.push(worst);
            hurwicz.push(q * worst + (1.0 - q) * best);
            laplace.push(
                payoffs
                    .row(i)
                    .iter()
                    .enumerate()
                    .map(|(j, v)| v * weights.get(j).copied().unwrap_or(0.0))
                    .sum(),
            );
        }

        let direction = Direction::from(config.orientation);
        UncertaintyResult {
            maximax: CriterionScores::ranked(maximax, direction),
            wald: CriterionScores::ranked(wald, direction),
            // Hurwicz scores are already orientation-adjusted, so higher
            // is always better.
            hurwicz: CriterionScores::ranked(hurwicz, Direction::Maximize),
            laplace: CriterionScores::ranked(laplace, direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::Orientation;

    fn example_matrix() -> PayoffMatrix {
        PayoffMatrix::from_rows(vec![vec![4.0, 2.0, 5.0], vec![3.0, 6.0, 1.0]])
    }

    fn assert_scores(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {e}, got {a}");
        }
    }

    #[test]
    fn test_gain_example() {
        let config = UncertaintyConfig::default().with_pessimism(0.5);
        let result = UncertaintyRunner::run(&example_matrix(), &config);

        assert_scores(&result.maximax.scores, &[5.0, 6.0]);
        assert_eq!(result.maximax.best_index, 1);

        assert_scores(&result.wald.scores, &[2.0, 1.0]);
        assert_eq!(result.wald.best_index, 0);

        // Both rows blend to 3.5; the first tie wins.
        assert_scores(&result.hurwicz.scores, &[3.5, 3.5]);
        assert_eq!(result.hurwicz.best_index, 0);

        assert_scores(&result.laplace.scores, &[11.0 / 3.0, 10.0 / 3.0]);
        assert_eq!(result.laplace.best_index, 0);
    }

    #[test]
    fn test_cost_orientation_flips_extremes() {
        let config = UncertaintyConfig::default().with_orientation(Orientation::Cost);
        let result = UncertaintyRunner::run(&example_matrix(), &config);

        // Best case for costs is the row minimum.
        assert_scores(&result.maximax.scores, &[2.0, 1.0]);
        assert_eq!(result.maximax.best_index, 1);

        // Worst case is the row maximum; Wald picks the smallest of them
        // (minimax).
        assert_scores(&result.wald.scores, &[5.0, 6.0]);
        assert_eq!(result.wald.best_index, 0);

        assert_scores(&result.laplace.scores, &[11.0 / 3.0, 10.0 / 3.0]);
        assert_eq!(result.laplace.best_index, 1);
    }

    #[test]
    fn test_single_state_collapses_criteria() {
        let payoffs = PayoffMatrix::from_rows(vec![vec![7.0], vec![-2.0]]);
        let result = UncertaintyRunner::run(&payoffs, &UncertaintyConfig::default());

        for criterion in [&result.maximax, &result.wald, &result.hurwicz, &result.laplace] {
            assert_scores(&criterion.scores, &[7.0, -2.0]);
            assert_eq!(criterion.best_index, 0);
        }
    }

    #[test]
    fn test_bayes_laplace_weights() {
        // Weights normalize to [0.5, 0.25, 0.25].
        let config = UncertaintyConfig::default().with_weights(vec![2.0, 1.0, 1.0]);
        let result = UncertaintyRunner::run(&example_matrix(), &config);

        assert_scores(&result.laplace.scores, &[3.75, 3.25]);
        assert_eq!(result.laplace.best_index, 0);
    }

    #[test]
    fn test_zero_sum_weights_fall_back_to_uniform() {
        let uniform = UncertaintyRunner::run(&example_matrix(), &UncertaintyConfig::default());
        let fallback = UncertaintyRunner::run(
            &example_matrix(),
            &UncertaintyConfig::default().with_weights(vec![0.0, 0.0, 0.0]),
        );
        assert_scores(&fallback.laplace.scores, &uniform.laplace.scores);
    }

    #[test]
    fn test_pessimism_extremes() {
        let payoffs = example_matrix();
        let pessimist = UncertaintyConfig::default().with_pessimism(1.0);
        let optimist = UncertaintyConfig::default().with_pessimism(0.0);

        let result = UncertaintyRunner::run(&payoffs, &pessimist);
        assert_scores(&result.hurwicz.scores, &result.wald.scores);

        let result = UncertaintyRunner::run(&payoffs, &optimist);
        assert_scores(&result.hurwicz.scores, &result.maximax.scores);
    }

    #[test]
    fn test_pessimism_used_as_given() {
        // Out-of-range q is not clamped: q = 2 extrapolates past the
        // worst case.
        let payoffs = PayoffMatrix::from_rows(vec![vec![0.0, 10.0]]);
        let config = UncertaintyConfig::default().with_pessimism(2.0);
        let result = UncertaintyRunner::run(&payoffs, &config);
        assert_scores(&result.hurwicz.scores, &[-10.0]);
    }

    #[test]
    fn test_empty_matrix_degenerates() {
        let result = UncertaintyRunner::run(&PayoffMatrix::zeros(0, 0), &UncertaintyConfig::default());
        for criterion in [&result.maximax, &result.wald, &result.hurwicz, &result.laplace] {
            assert!(criterion.scores.is_empty());
            assert_eq!(criterion.best_index, 0);
        }
    }

    #[test]
    fn test_zero_states_degenerates_to_zero_scores() {
        let result = UncertaintyRunner::run(&PayoffMatrix::zeros(2, 0), &UncertaintyConfig::default());
        assert_scores(&result.maximax.scores, &[0.0, 0.0]);
        assert_scores(&result.laplace.scores, &[0.0, 0.0]);
        assert_eq!(result.wald.best_index, 0);
    }
}
