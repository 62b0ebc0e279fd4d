//! Price source trait definition.

use chrono::NaiveDate;

use crate::error::DataError;
use crate::types::PriceSeries;

/// Trait for historical price providers.
///
/// A price source hands back an immutable daily series for a ticker symbol.
/// The toolkit is fully synchronous; sources block for the duration of the
/// fetch. Implementations must fail with a clear error for unknown or blank
/// symbols rather than return an empty series.
pub trait PriceSource: Send + Sync {
    /// Fetch the full available history for a symbol, oldest bar first.
    fn history(&self, symbol: &str) -> Result<PriceSeries, DataError>;

    /// Fetch history restricted to the inclusive `[start, end]` range.
    ///
    /// Fails with [`DataError::NoDataAvailable`] when no trading day falls
    /// inside the range.
    fn history_range(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        let series = self.history(symbol)?;
        let clipped = series.between(start, end);
        if clipped.is_empty() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(clipped)
    }

    /// Fetch history for a trailing window of `days` trading days.
    fn recent(&self, symbol: &str, days: usize) -> Result<PriceSeries, DataError> {
        let series = self.history(symbol)?;
        Ok(series.tail(days))
    }

    /// Get the source name.
    fn name(&self) -> &str;
}
