//! CSV price source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use stockta_core::error::DataError;
use stockta_core::traits::PriceSource;
use stockta_core::types::{DailyBar, PriceSeries};

/// CSV record format.
///
/// Header aliases cover the common export spellings; `Adj Close` falls
/// back to the raw close when the column is absent.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(
        alias = "Adj Close",
        alias = "adj close",
        alias = "adj_close",
        alias = "AdjClose",
        default
    )]
    adj_close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Price source reading daily OHLCV history from CSV files.
///
/// Points at either a single CSV file or a directory holding one file per
/// symbol (`{symbol}.csv` or `{symbol}_daily.csv`, case-insensitive on the
/// symbol).
#[derive(Debug)]
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DataError> {
        let path = path.into();
        if !path.exists() {
            return Err(DataError::PathNotFound(path.display().to_string()));
        }
        Ok(Self { path })
    }

    /// Resolve the CSV file backing a symbol.
    fn file_for(&self, symbol: &str) -> Result<PathBuf, DataError> {
        if self.path.is_file() {
            return Ok(self.path.clone());
        }

        let lower = symbol.to_lowercase();
        let candidates = [
            self.path.join(format!("{}.csv", symbol)),
            self.path.join(format!("{}.csv", lower)),
            self.path.join(format!("{}_daily.csv", symbol)),
            self.path.join(format!("{}_daily.csv", lower)),
        ];

        candidates
            .into_iter()
            .find(|p| p.exists())
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
    }

    /// Load and validate all bars from a CSV file.
    fn load_from_path(&self, path: &Path, symbol: &str) -> Result<PriceSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let date = parse_date(&record.date)?;

            bars.push(DailyBar::new(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.adj_close.unwrap_or(record.close),
                record.volume,
            ));
        }

        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        debug!(%symbol, bars = bars.len(), path = %path.display(), "loaded CSV history");

        // Sorting and duplicate-date rejection happen at construction
        PriceSeries::new(symbol, bars)
    }
}

impl PriceSource for CsvPriceSource {
    fn history(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(DataError::SymbolNotFound(String::new()));
        }

        let file = self.file_for(symbol)?;
        self.load_from_path(&file, symbol)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the date formats seen in daily-history exports.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    // Timestamped exports carry a midnight time component
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::Parse(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("stockta-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(parse_date("2024/01/15").is_ok());
        assert!(parse_date("01/15/2024").is_ok());
        assert!(parse_date("2024-01-15 00:00:00").is_ok());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_load_with_adj_close_column() {
        let path = write_temp_csv(
            "adj.csv",
            "Date,Open,High,Low,Close,Adj Close,Volume\n\
             2020-05-04,10.0,11.0,9.5,10.5,10.4,1000\n\
             2020-05-01,9.0,10.0,8.5,9.5,9.4,900\n",
        );

        let source = CsvPriceSource::new(&path).unwrap();
        let series = source.history("TEST").unwrap();
        fs::remove_file(&path).ok();

        // Rows come back sorted by date
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().adj_close, 9.4);
        assert_eq!(series.last().unwrap().adj_close, 10.4);
    }

    #[test]
    fn test_adj_close_falls_back_to_close() {
        let path = write_temp_csv(
            "noadj.csv",
            "Date,Open,High,Low,Close,Volume\n2020-05-01,9.0,10.0,8.5,9.5,900\n",
        );

        let source = CsvPriceSource::new(&path).unwrap();
        let series = source.history("TEST").unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(series.first().unwrap().adj_close, 9.5);
    }

    #[test]
    fn test_empty_file_is_no_data() {
        let path = write_temp_csv("empty.csv", "Date,Open,High,Low,Close,Adj Close,Volume\n");

        let source = CsvPriceSource::new(&path).unwrap();
        let err = source.history("TEST").unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, DataError::NoDataAvailable));
    }

    #[test]
    fn test_blank_symbol_is_rejected() {
        let path = write_temp_csv(
            "blank.csv",
            "Date,Open,High,Low,Close,Volume\n2020-05-01,9.0,10.0,8.5,9.5,900\n",
        );

        let source = CsvPriceSource::new(&path).unwrap();
        let err = source.history("  ").unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, DataError::SymbolNotFound(s) if s.is_empty()));
    }

    #[test]
    fn test_missing_path_errors() {
        assert!(matches!(
            CsvPriceSource::new("/definitely/not/here").unwrap_err(),
            DataError::PathNotFound(_)
        ));
    }

    #[test]
    fn test_unknown_symbol_in_directory() {
        let dir = std::env::temp_dir().join(format!("stockta-dir-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let source = CsvPriceSource::new(&dir).unwrap();
        let err = source.history("NOPE").unwrap_err();
        fs::remove_dir_all(&dir).ok();

        assert!(matches!(err, DataError::SymbolNotFound(s) if s == "NOPE"));
    }
}
