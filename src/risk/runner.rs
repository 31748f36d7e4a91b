//! Risk criteria evaluation.

use super::config::RiskConfig;
use crate::payoff::{normalize_weights, PayoffMatrix};
use crate::selection::{select_best, CriterionScores, Direction};

/// Result of a risk criteria evaluation.
///
/// Each field holds one score per alternative plus the winning index
/// for that criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskResult {
    /// Probability-weighted average payoff.
    pub expected_value: CriterionScores,

    /// Maximum regret per alternative; lower is better regardless of
    /// orientation.
    pub savage: CriterionScores,

    /// Mean-variance utility: mean − k·variance for gains,
    /// −(mean + k·variance) for costs. Higher is always better.
    pub mean_variance: CriterionScores,

    /// Probability of meeting the success threshold. Higher is always
    /// better.
    pub threshold: CriterionScores,

    /// Payoff in the most probable state.
    pub most_likely: CriterionScores,
}

/// Evaluates the risk criteria.
pub struct RiskRunner;

impl RiskRunner {
    /// Computes all five criteria for `payoffs` under `config`.
    ///
    /// Pure and infallible: probabilities are truncated to the state
    /// count and normalized silently (uniform fallback on a
    /// non-positive sum), and an empty matrix yields empty score
    /// vectors with best indices 0.
    pub fn run(payoffs: &PayoffMatrix, config: &RiskConfig) -> RiskResult {
        let m = payoffs.alternatives();
        let n = payoffs.states();
        let truncated = &config.probabilities[..config.probabilities.len().min(n)];
        let p = normalize_weights(truncated);
        let prob = |j: usize| p.get(j).copied().unwrap_or(0.0);

        let is_gain = config.orientation.is_gain();
        let k = config.risk_aversion;

        // Benchmark per state: the best payoff any alternative attains
        // there.
        let column_best: Vec<f64> = (0..n)
            .map(|j| {
                if is_gain {
                    payoffs.column_max(j)
                } else {
                    payoffs.column_min(j)
                }
            })
            .collect();

        // Ephemeral regret grid. An alternative at the column optimum
        // has zero regret, never negative.
        let regret: Vec<Vec<f64>> = (0..m)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let v = payoffs.get(i, j);
                        let r = if is_gain {
                            column_best[j] - v
                        } else {
                            v - column_best[j]
                        };
                        r.max(0.0)
                    })
                    .collect()
            })
            .collect();

        // Single most probable state, first tie wins.
        let most_likely_state = select_best(&p, Direction::Maximize);

        let mut expected_value = Vec::with_capacity(m);
        let mut savage = Vec::with_capacity(m);
        let mut mean_variance = Vec::with_capacity(m);
        let mut threshold = Vec::with_capacity(m);
        let mut most_likely = Vec::with_capacity(m);

        for i in 0..m {
            let row = payoffs.row(i);
            let mean: f64 = row.iter().enumerate().map(|(j, v)| v * prob(j)).sum();
            let variance: f64 = row
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    let d = v - mean;
                    prob(j) * d * d
                })
                .sum();

            expected_value.push(mean);

            savage.push(
                regret[i]
                    .iter()
                    .copied()
                    .reduce(|a, b| if b > a { b } else { a })
                    .unwrap_or(0.0),
            );

            mean_variance.push(if is_gain {
                mean - k * variance
            } else {
                -(mean + k * variance)
            });

            threshold.push(
                row.iter()
                    .enumerate()
                    .filter(|&(_, &v)| {
                        if is_gain {
                            v >= config.threshold
                        } else {
                            v <= config.threshold
                        }
                    })
                    .map(|(j, _)| prob(j))
                    .sum(),
            );

            most_likely.push(row.get(most_likely_state).copied().unwrap_or(0.0));
        }

        let direction = Direction::from(config.orientation);
        RiskResult {
            expected_value: CriterionScores::ranked(expected_value, direction),
            // Regret is already cost-like, so smaller always wins.
            savage: CriterionScores::ranked(savage, Direction::Minimize),
            mean_variance: CriterionScores::ranked(mean_variance, Direction::Maximize),
            threshold: CriterionScores::ranked(threshold, Direction::Maximize),
            most_likely: CriterionScores::ranked(most_likely, direction),
        }
    }
}
