//! Risk engine configuration.

use crate::payoff::{finite_sum, Orientation};

/// Configuration for the risk criteria engine.
///
/// # Examples
///
/// ```
/// use u_decision::risk::RiskConfig;
///
/// let config = RiskConfig::default()
///     .with_probabilities(vec![0.5, 0.3, 0.2])
///     .with_risk_aversion(1.0)
///     .with_threshold(5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiskConfig {
    /// Whether payoffs are gains or costs.
    pub orientation: Orientation,

    /// State probabilities, one per state of nature.
    ///
    /// The runner truncates this vector to the matrix's state count and
    /// normalizes it before use; the sum-to-1 policy lives in
    /// [`validate`](RiskConfig::validate) for callers that gate on it.
    pub probabilities: Vec<f64>,

    /// Risk-aversion constant k: the variance penalty in the
    /// mean-variance utility. Larger k punishes volatile alternatives
    /// harder.
    pub risk_aversion: f64,

    /// Success threshold T for the threshold-probability criterion:
    /// a state counts when its payoff is ≥ T for gains, ≤ T for costs.
    pub threshold: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Gain,
            probabilities: Vec::new(),
            risk_aversion: 0.5,
            threshold: 0.0,
        }
    }
}

impl RiskConfig {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = probabilities;
        self
    }

    pub fn with_risk_aversion(mut self, k: f64) -> Self {
        self.risk_aversion = k;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validates the configuration.
    ///
    /// The pre-flight gate for callers that block computation on bad
    /// probability input (|sum − 1| < 1e-6, entries finite and
    /// non-negative). The runner never calls it and normalizes
    /// silently instead.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .probabilities
            .iter()
            .any(|p| !p.is_finite() || *p < 0.0)
        {
            return Err("probabilities must be finite and non-negative".into());
        }
        let sum = finite_sum(&self.probabilities);
        if (sum - 1.0).abs() >= 1e-6 {
            return Err(format!("probabilities must sum to 1, got {sum}"));
        }
        Ok(())
    }
}
