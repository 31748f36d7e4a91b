//! Decision criteria under uncertainty.
//!
//! Applies when the probabilities of the states of nature are unknown.
//! Four classical criteria are computed in one pass:
//!
//! - **Maximax** (optimistic): the row's best-case value.
//! - **Wald** (pessimistic): the row's worst-case value; maximin for
//!   gains, minimax for costs.
//! - **Hurwicz**: a pessimism-weighted blend of worst and best case.
//! - **Laplace / Bayes-Laplace**: the (weighted) average payoff;
//!   uniform weights give the classical Laplace criterion, known
//!   probabilities give Bayes-Laplace.
//!
//! # References
//!
//! - Wald (1950), *Statistical Decision Functions*
//! - Hurwicz (1951), *Optimality Criteria for Decision Making under
//!   Ignorance*
//! - Luce & Raiffa (1957), *Games and Decisions*

mod config;
mod runner;

pub use config::UncertaintyConfig;
pub use runner::{UncertaintyResult, UncertaintyRunner};
