//! Core traits for the technical analysis toolkit.

mod indicator;
mod price_source;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use price_source::PriceSource;
