//! Historical price sources.
//!
//! The data boundary of the toolkit: implementations of
//! [`PriceSource`](stockta_core::PriceSource) that hand back an immutable
//! [`PriceSeries`](stockta_core::PriceSeries) for a ticker symbol.

mod csv_source;

pub use csv_source::CsvPriceSource;
