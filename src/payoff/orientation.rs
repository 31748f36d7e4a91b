//! Gain / cost orientation.

/// Whether payoff values are gains to maximize or costs to minimize.
///
/// The orientation governs every best/worst decision in both engines:
/// which end of a row counts as the best case, which end of a column is
/// the regret benchmark, and the direction in which most criteria pick
/// their winner.
///
/// With the `serde` feature it serializes as `"gain"` / `"cost"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Higher payoff is better.
    Gain,

    /// Lower payoff is better.
    Cost,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Gain
    }
}

impl Orientation {
    /// True for [`Orientation::Gain`].
    pub fn is_gain(self) -> bool {
        matches!(self, Orientation::Gain)
    }
}
