//! Core types and traits for the technical analysis toolkit.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (DailyBar, PriceSeries)
//! - Date-aligned indicator results (IndicatorSeries)
//! - Discrete trading signals
//! - Core traits for indicators and price sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{TaError, TaResult};
pub use traits::*;
pub use types::*;
