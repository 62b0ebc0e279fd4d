//! Signal generation over indicator values.
//!
//! This crate turns indicator outputs into discrete BUY/SELL/HOLD signals
//! and assembles the per-date feature table handed back to callers. Signal
//! evaluation is strictly causal: the value for a date is computed from
//! price data up to and including that date, never beyond it.

mod feature;
mod generator;

pub use feature::{FeatureRow, FeatureTable};
pub use generator::{SignalConfig, SignalGenerator};
