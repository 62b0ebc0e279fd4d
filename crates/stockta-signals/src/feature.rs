//! The per-date feature table returned to callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use stockta_core::types::Signal;

/// One row of the feature table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Trading date
    pub date: NaiveDate,
    /// Derived signal for the date
    pub signal: Signal,
    /// RSI value, rounded to 2 decimals
    pub rsi: f64,
    /// Adjusted close, rounded to 2 decimals
    pub adj_close: f64,
}

/// Date-indexed table joining price, indicator value and derived signal.
///
/// Built fresh per call and never persisted; rows cover the requested range
/// minus any dates without enough trailing history for the indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureTable {
    /// Symbol the table was generated for
    pub symbol: String,
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Assemble a table from rows already in date order.
    pub fn new(symbol: impl Into<String>, rows: Vec<FeatureRow>) -> Self {
        Self {
            symbol: symbol.into(),
            rows,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// The row for an exact date, if present.
    pub fn get(&self, date: NaiveDate) -> Option<&FeatureRow> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Iterate over the rows, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRow> {
        self.rows.iter()
    }

    /// Count rows carrying the given signal.
    pub fn count(&self, signal: Signal) -> usize {
        self.rows.iter().filter(|r| r.signal == signal).count()
    }
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>6} {:>8} {:>10}",
            "DATE", "SIGNAL", "RSI", "ADJ CLOSE"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:>6} {:>8.2} {:>10.2}",
                row.date.to_string(),
                row.signal.to_string(),
                row.rsi,
                row.adj_close
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 5, d).unwrap()
    }

    fn table() -> FeatureTable {
        FeatureTable::new(
            "TEST",
            vec![
                FeatureRow {
                    date: date(1),
                    signal: Signal::Sell,
                    rsi: 82.5,
                    adj_close: 104.2,
                },
                FeatureRow {
                    date: date(4),
                    signal: Signal::Hold,
                    rsi: 55.0,
                    adj_close: 101.0,
                },
                FeatureRow {
                    date: date(5),
                    signal: Signal::Buy,
                    rsi: 22.1,
                    adj_close: 96.4,
                },
            ],
        )
    }

    #[test]
    fn test_lookup_by_date() {
        let t = table();
        assert_eq!(t.get(date(4)).unwrap().signal, Signal::Hold);
        assert!(t.get(date(2)).is_none());
    }

    #[test]
    fn test_signal_counts() {
        let t = table();
        assert_eq!(t.count(Signal::Buy), 1);
        assert_eq!(t.count(Signal::Sell), 1);
        assert_eq!(t.count(Signal::Hold), 1);
    }

    #[test]
    fn test_display_renders_rows() {
        let rendered = table().to_string();
        assert!(rendered.contains("DATE"));
        assert!(rendered.contains("2020-05-01"));
        assert!(rendered.contains("SELL"));
        assert!(rendered.contains("96.40"));
    }

    #[test]
    fn test_json_round_trip() {
        let t = table();
        let json = serde_json::to_string(&t).unwrap();
        let back: FeatureTable = serde_json::from_str(&json).unwrap();

        assert_eq!(back.symbol, "TEST");
        assert_eq!(back.len(), 3);
        assert_eq!(back.rows()[2].signal, Signal::Buy);
    }
}
