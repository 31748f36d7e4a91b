//! Best-alternative selection and tie-breaking.
//!
//! Every criterion reduces to a score vector plus one winning index.
//! The winner is found by a linear scan with strict comparison, so the
//! first alternative attaining the extreme value wins; no stable sort,
//! no last-wins override.

use crate::payoff::Orientation;

/// Direction in which a criterion's scores are compared.
///
/// Most criteria derive their direction from the matrix orientation.
/// A few are fixed regardless of orientation: Hurwicz, mean-variance,
/// and threshold scores are always maximized, Savage regret is always
/// minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Larger scores win.
    Maximize,

    /// Smaller scores win.
    Minimize,
}

impl From<Orientation> for Direction {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Gain => Direction::Maximize,
            Orientation::Cost => Direction::Minimize,
        }
    }
}

/// Index of the best score under `direction`.
///
/// Strict `>`/`<` comparison: ties keep the earlier index. An empty
/// slice returns 0.
pub fn select_best(scores: &[f64], direction: Direction) -> usize {
    let mut current = match scores.first() {
        Some(&score) => score,
        None => return 0,
    };
    let mut best = 0;
    for (i, &candidate) in scores.iter().enumerate().skip(1) {
        let better = match direction {
            Direction::Maximize => candidate > current,
            Direction::Minimize => candidate < current,
        };
        if better {
            current = candidate;
            best = i;
        }
    }
    best
}

/// Score vector for one criterion plus the selected alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionScores {
    /// One score per alternative, in matrix row order.
    pub scores: Vec<f64>,

    /// Index of the winning alternative (0 when `scores` is empty).
    pub best_index: usize,
}

impl CriterionScores {
    /// Bundles `scores` with the winner chosen under `direction`.
    pub fn ranked(scores: Vec<f64>, direction: Direction) -> Self {
        let best_index = select_best(&scores, direction);
        Self { scores, best_index }
    }

    /// The winning score, if any alternatives exist.
    pub fn best_score(&self) -> Option<f64> {
        self.scores.get(self.best_index).copied()
    }

    /// Number of alternatives scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no alternatives were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
