//! Payoff data model: matrix shaping, orientation, weight normalization.
//!
//! The shared leaf layer both criteria engines build on. A
//! [`PayoffMatrix`] is a rectangular grid with one row per alternative
//! and one column per state of nature; [`Orientation`] says whether the
//! values are gains or costs; the weight helpers turn arbitrary
//! non-negative vectors into probability distributions with a uniform
//! fallback.
//!
//! Everything here is pure: resizing returns a new matrix, and
//! normalization returns a new vector.

mod matrix;
mod orientation;
mod weights;

pub use matrix::PayoffMatrix;
pub use orientation::Orientation;
pub use weights::{finite_sum, normalize_weights, uniform_weights};
