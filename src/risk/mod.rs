//! Decision criteria under risk.
//!
//! Applies when the probabilities of the states of nature are known.
//! Five criteria are computed in one pass:
//!
//! - **Expected Value**: probability-weighted average payoff.
//! - **Savage minimax-regret**: the gap to the best achievable outcome
//!   per state, worst case over states; smaller is always better.
//! - **Mean-Variance utility**: expected value penalized by a
//!   risk-aversion multiple of the variance.
//! - **Threshold-probability**: the probability mass of states where
//!   the payoff meets a success threshold.
//! - **Most-Likely-State**: the payoff in the single most probable
//!   state.
//!
//! # References
//!
//! - Savage (1951), *The Theory of Statistical Decision*
//! - Markowitz (1952), *Portfolio Selection*
//! - Luce & Raiffa (1957), *Games and Decisions*

mod config;
mod runner;

pub use config::RiskConfig;
pub use runner::{RiskResult, RiskRunner};
