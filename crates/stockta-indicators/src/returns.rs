//! Percentage-change metrics.

use chrono::Datelike;
use stockta_core::error::IndicatorError;
use stockta_core::traits::Indicator;
use stockta_core::types::{IndicatorSeries, PriceSeries};

use crate::util::round3;

/// Day-over-day fractional change in adjusted close.
///
/// The first date has no prior close and is dropped from the output.
#[derive(Debug, Clone, Default)]
pub struct DailyChange;

impl DailyChange {
    pub fn new() -> Self {
        Self
    }

    /// Date-aligned daily changes over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<f64> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }
}

impl Indicator for DailyChange {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        data.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
    }

    fn period(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "Daily % Change"
    }
}

/// Fractional change between the close six trading days ago and the latest
/// close (roughly one trading week elapsed), rounded to 3 decimal places.
pub fn weekly_change(series: &PriceSeries) -> Result<f64, IndicatorError> {
    const LOOKBACK: usize = 6;

    let closes = series.adj_closes();
    if closes.len() < LOOKBACK {
        return Err(IndicatorError::InsufficientData {
            required: LOOKBACK,
            available: closes.len(),
        });
    }

    let start = closes[closes.len() - LOOKBACK];
    let end = closes[closes.len() - 1];
    Ok(round3((end - start) / start))
}

/// Fractional change between the last two month-end closes, rounded to 3
/// decimal places.
///
/// Closes are resampled to the final trading day of each calendar month;
/// at least two months of data are required.
pub fn monthly_change(series: &PriceSeries) -> Result<f64, IndicatorError> {
    let month_ends = month_end_closes(series);
    if month_ends.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            available: month_ends.len(),
        });
    }

    let start = month_ends[month_ends.len() - 2];
    let end = month_ends[month_ends.len() - 1];
    Ok(round3((end - start) / start))
}

/// The adjusted close of the last trading day in each calendar month.
fn month_end_closes(series: &PriceSeries) -> Vec<f64> {
    let mut closes = Vec::new();
    let mut current: Option<((i32, u32), f64)> = None;

    for bar in series.iter() {
        let key = (bar.date.year(), bar.date.month());
        match current {
            Some((month, _)) if month == key => current = Some((key, bar.adj_close)),
            Some((_, close)) => {
                closes.push(close);
                current = Some((key, bar.adj_close));
            }
            None => current = Some((key, bar.adj_close)),
        }
    }

    if let Some((_, close)) = current {
        closes.push(close);
    }

    closes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockta_core::types::DailyBar;

    fn bar(date: NaiveDate, price: f64) -> DailyBar {
        DailyBar::new(date, price, price + 1.0, price - 1.0, price, price, 1000.0)
    }

    fn series_from(prices: &[(NaiveDate, f64)]) -> PriceSeries {
        let bars = prices.iter().map(|&(d, p)| bar(d, p)).collect();
        PriceSeries::new("TEST", bars).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_change_drops_first_date() {
        let change = DailyChange::new();
        let result = change.calculate(&[100.0, 110.0, 99.0]);

        assert_eq!(result.len(), 2);
        assert!((result[0] - 0.10).abs() < 1e-10);
        assert!((result[1] - (-0.10)).abs() < 1e-10);
    }

    #[test]
    fn test_daily_change_series_alignment() {
        let prices: Vec<(NaiveDate, f64)> = (1..=4)
            .map(|d| (date(2020, 5, d), 100.0 + d as f64))
            .collect();
        let series = series_from(&prices);

        let changes = DailyChange::new().calculate_series(&series);
        assert_eq!(changes.len(), 3);
        assert!(changes.get(date(2020, 5, 1)).is_none());
        assert!(changes.get(date(2020, 5, 2)).is_some());
    }

    #[test]
    fn test_weekly_change() {
        let prices: Vec<(NaiveDate, f64)> = vec![
            (date(2020, 5, 1), 100.0),
            (date(2020, 5, 4), 101.0),
            (date(2020, 5, 5), 102.0),
            (date(2020, 5, 6), 103.0),
            (date(2020, 5, 7), 104.0),
            (date(2020, 5, 8), 110.0),
        ];
        let series = series_from(&prices);

        // (110 - 100) / 100 = 0.1
        assert!((weekly_change(&series).unwrap() - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_weekly_change_requires_six_days() {
        let prices: Vec<(NaiveDate, f64)> =
            (1..=5).map(|d| (date(2020, 5, d), 100.0)).collect();
        let series = series_from(&prices);

        assert!(matches!(
            weekly_change(&series).unwrap_err(),
            IndicatorError::InsufficientData { required: 6, .. }
        ));
    }

    #[test]
    fn test_monthly_change_uses_month_end_closes() {
        let prices = vec![
            (date(2020, 3, 30), 90.0),
            (date(2020, 3, 31), 95.0),
            (date(2020, 4, 1), 97.0),
            (date(2020, 4, 30), 100.0),
            (date(2020, 5, 1), 101.0),
            (date(2020, 5, 29), 110.0),
        ];
        let series = series_from(&prices);

        // Month-end closes: 95 (Mar), 100 (Apr), 110 (May)
        // Change between the last two: (110 - 100) / 100 = 0.1
        assert!((monthly_change(&series).unwrap() - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_monthly_change_requires_two_months() {
        let prices = vec![(date(2020, 5, 1), 100.0), (date(2020, 5, 29), 110.0)];
        let series = series_from(&prices);

        assert!(matches!(
            monthly_change(&series).unwrap_err(),
            IndicatorError::InsufficientData { required: 2, .. }
        ));
    }

    #[test]
    fn test_monthly_change_rounds() {
        let prices = vec![
            (date(2020, 4, 30), 3.0),
            (date(2020, 5, 29), 4.0),
        ];
        let series = series_from(&prices);

        // 1/3 rounded to 3 decimals
        assert_eq!(monthly_change(&series).unwrap(), 0.333);
    }
}
