//! Core data types for the technical analysis toolkit.

mod bar;
mod indicator_series;
mod signal;

pub use bar::{DailyBar, PriceSeries};
pub use indicator_series::IndicatorSeries;
pub use signal::Signal;
