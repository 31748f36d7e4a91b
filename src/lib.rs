//! Classical decision-theory criteria over payoff matrices.
//!
//! Evaluates a rectangular payoff matrix (alternatives × states of nature)
//! under a gain or cost orientation and selects the best alternative per
//! criterion:
//!
//! - **Uncertainty** (state probabilities unknown): Maximax, Wald,
//!   Hurwicz, and Laplace / Bayes-Laplace.
//! - **Risk** (state probabilities known): Expected Value, Savage
//!   minimax-regret, Mean-Variance utility, Threshold-probability, and
//!   Most-Likely-State.
//!
//! Both engines are pure, synchronous functions: no state survives a
//! compute call, and every numeric edge case (empty matrices, zero-sum
//! weight vectors, non-finite entries) resolves to a documented fallback
//! rather than an error.
//!
//! # Architecture
//!
//! The crate contains no presentation concepts. Form state, input
//! validation policy, and result rendering are defined by consumers;
//! they feed a [`payoff::PayoffMatrix`] plus a config into a runner and
//! display the returned score vectors. The `payoff` module is the shared
//! leaf layer (matrix shaping, weight normalization), `selection` holds
//! the tie-break rule, and each engine family lives in its own module.

pub mod payoff;
pub mod risk;
pub mod selection;
pub mod uncertainty;

#[cfg(feature = "wasm")]
pub mod wasm;
