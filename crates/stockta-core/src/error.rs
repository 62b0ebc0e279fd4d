//! Error types for the technical analysis toolkit.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error for the toolkit.
///
/// Callers combining data, indicator and signal operations can funnel the
/// per-layer errors into this one with `?`.
#[derive(Error, Debug)]
pub enum TaError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Price source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0:?}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Data path not found: {0}")]
    PathNotFound(String),

    #[error("Duplicate trading date {date} in series for {symbol}")]
    DuplicateDate { symbol: String, date: NaiveDate },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Signal generation errors.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),
}

/// Result type alias for toolkit operations.
pub type TaResult<T> = Result<T, TaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_and_display() {
        let err: TaError = IndicatorError::InsufficientData {
            required: 15,
            available: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Indicator error: Insufficient data: need 15 points, have 3"
        );

        let err: TaError = DataError::SymbolNotFound("RUN".to_string()).into();
        assert!(err.to_string().contains("RUN"));

        let err: TaError = SignalError::InvalidConfig("bad thresholds".to_string()).into();
        assert!(matches!(err, TaError::Signal(_)));
    }
}
