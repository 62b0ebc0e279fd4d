//! Daily OHLCV price data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A single day of price data for one symbol.
///
/// Prices use f64 for fast indicator calculations. The adjusted close is a
/// distinct column from the raw close; every indicator in this toolkit
/// consumes the adjusted close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Split/dividend adjusted closing price
    pub adj_close: f64,
    /// Trading volume
    pub volume: f64,
}

impl DailyBar {
    /// Create a new bar.
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        adj_close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        }
    }

    /// The bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Absolute return over the session (close - open).
    #[inline]
    pub fn daily_return(&self) -> f64 {
        self.close - self.open
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// An immutable, date-ordered series of daily bars for one symbol.
///
/// Construction sorts the input by date and rejects duplicate trading dates,
/// so a series always holds at most one bar per day in strictly increasing
/// order. Indicators never mutate a series; derived values are always new
/// allocations.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// Build a series from unordered bars.
    ///
    /// Bars are sorted by date; a duplicate date is a data error.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<DailyBar>) -> Result<Self, DataError> {
        let symbol = symbol.into();
        bars.sort_by_key(|b| b.date);

        for pair in bars.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(DataError::DuplicateDate {
                    symbol,
                    date: pair[1].date,
                });
            }
        }

        Ok(Self { symbol, bars })
    }

    /// Internal constructor for slices already known to be ordered.
    fn from_sorted(symbol: String, bars: Vec<DailyBar>) -> Self {
        Self { symbol, bars }
    }

    /// The symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of trading days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&DailyBar> {
        self.bars.get(index)
    }

    /// The most recent bar.
    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    /// The oldest bar.
    pub fn first(&self) -> Option<&DailyBar> {
        self.bars.first()
    }

    /// The bar for an exact trading date, if present.
    pub fn on(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.bars
            .binary_search_by_key(&date, |b| b.date)
            .ok()
            .and_then(|i| self.bars.get(i))
    }

    /// A new series containing only bars dated on or before `date`.
    ///
    /// This is the causal view used for no-look-ahead evaluation: nothing
    /// after `date` is visible in the result.
    pub fn up_to(&self, date: NaiveDate) -> PriceSeries {
        let cut = self.bars.partition_point(|b| b.date <= date);
        Self::from_sorted(self.symbol.clone(), self.bars[..cut].to_vec())
    }

    /// A new series restricted to the inclusive `[start, end]` date range.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        let lo = self.bars.partition_point(|b| b.date < start);
        let hi = self.bars.partition_point(|b| b.date <= end);
        Self::from_sorted(self.symbol.clone(), self.bars[lo..hi].to_vec())
    }

    /// A new series holding only the most recent `n` trading days.
    pub fn tail(&self, n: usize) -> PriceSeries {
        let start = self.bars.len().saturating_sub(n);
        Self::from_sorted(self.symbol.clone(), self.bars[start..].to_vec())
    }

    /// Extract trading dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Extract adjusted close prices as a vector.
    pub fn adj_closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.adj_close).collect()
    }

    /// Extract raw close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract open prices as a vector.
    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Iterate over the bars, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DailyBar> {
        self.bars.iter()
    }
}
