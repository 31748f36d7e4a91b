//! Browser boundary.
//!
//! Thin `wasm-bindgen` exports so a web page can drive the engines
//! directly: payoffs travel as a plain `number[][]` (ragged rows are
//! zero-padded), configs and results as JSON-shaped objects via
//! `serde-wasm-bindgen`. Missing config fields take their defaults.
//!
//! The numeric core never fails; the only errors surfaced here are
//! malformed argument shapes.

use wasm_bindgen::prelude::*;

use crate::payoff::PayoffMatrix;
use crate::risk::{RiskConfig, RiskRunner};
use crate::uncertainty::{UncertaintyConfig, UncertaintyRunner};

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Computes the uncertainty criteria.
///
/// `payoffs` is a `number[][]`; `config` is an object with
/// `orientation` (`"gain"` | `"cost"`), `pessimism`, and optional
/// `weights`.
#[wasm_bindgen]
pub fn compute_uncertainty(payoffs: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let payoffs: PayoffMatrix = from_js(payoffs)?;
    let config: UncertaintyConfig = from_js(config)?;
    to_js(&UncertaintyRunner::run(&payoffs, &config))
}

/// Computes the risk criteria.
///
/// `payoffs` is a `number[][]`; `config` is an object with
/// `orientation` (`"gain"` | `"cost"`), `probabilities`,
/// `risk_aversion`, and `threshold`.
#[wasm_bindgen]
pub fn compute_risk(payoffs: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let payoffs: PayoffMatrix = from_js(payoffs)?;
    let config: RiskConfig = from_js(config)?;
    to_js(&RiskRunner::run(&payoffs, &config))
}
