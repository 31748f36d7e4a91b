//! Weight vector normalization.

/// Sum of the finite entries of `weights`; non-finite entries count as 0.
///
/// This is also the sum a caller should test against 1 when gating
/// engine invocation on user-entered probabilities.
pub fn finite_sum(weights: &[f64]) -> f64 {
    weights.iter().copied().filter(|w| w.is_finite()).sum()
}

/// The uniform distribution over `n` slots (empty for `n` = 0).
pub fn uniform_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

/// Normalizes `weights` into a probability distribution.
///
/// Each entry is divided by the finite-filtered sum, so a vector with a
/// positive sum keeps its relative proportions (non-finite entries pass
/// through positionally). A non-positive sum (all-zero, negative, or
/// only non-finite entries) falls back to the uniform distribution over
/// the same number of slots.
///
/// # Examples
///
/// ```
/// use u_decision::payoff::normalize_weights;
///
/// assert_eq!(normalize_weights(&[2.0, 1.0, 1.0]), vec![0.5, 0.25, 0.25]);
/// assert_eq!(normalize_weights(&[0.0, 0.0]), vec![0.5, 0.5]);
/// ```
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let sum = finite_sum(weights);
    if sum <= 0.0 {
        return uniform_weights(weights.len());
    }
    weights.iter().map(|w| w / sum).collect()
}
