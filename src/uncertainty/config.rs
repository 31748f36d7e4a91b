//! Uncertainty engine configuration.

use crate::payoff::{finite_sum, Orientation};

/// Configuration for the uncertainty criteria engine.
///
/// # Examples
///
/// ```
/// use u_decision::payoff::Orientation;
/// use u_decision::uncertainty::UncertaintyConfig;
///
/// let config = UncertaintyConfig::default()
///     .with_orientation(Orientation::Cost)
///     .with_pessimism(0.7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UncertaintyConfig {
    /// Whether payoffs are gains or costs.
    pub orientation: Orientation,

    /// Hurwicz pessimism coefficient q in [0, 1]: the weight given to
    /// the worst-case outcome (1 − q goes to the best case).
    ///
    /// The runner uses this value exactly as given; clamping is the
    /// caller's job. [`validate`](UncertaintyConfig::validate) reports
    /// values outside [0, 1].
    pub pessimism: f64,

    /// Known state probabilities for the Bayes-Laplace criterion.
    ///
    /// `None` treats all states as equiprobable (classical Laplace).
    /// `Some` weights are normalized by the runner before use.
    pub weights: Option<Vec<f64>>,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Gain,
            pessimism: 0.5,
            weights: None,
        }
    }
}

impl UncertaintyConfig {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_pessimism(mut self, q: f64) -> Self {
        self.pessimism = q;
        self
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Validates the configuration.
    ///
    /// This is the pre-flight gate for callers that surface input
    /// errors (a form disabling its compute button). The runner never
    /// calls it and normalizes silently instead.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.pessimism) {
            return Err(format!(
                "pessimism must be in [0, 1], got {}",
                self.pessimism
            ));
        }
        if let Some(weights) = &self.weights {
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err("state weights must be finite and non-negative".into());
            }
            let sum = finite_sum(weights);
            if (sum - 1.0).abs() >= 1e-6 {
                return Err(format!("state weights must sum to 1, got {sum}"));
            }
        }
        Ok(())
    }
}
