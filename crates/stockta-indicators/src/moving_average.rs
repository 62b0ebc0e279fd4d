//! Moving average indicators.

use stockta_core::traits::Indicator;
use stockta_core::types::{IndicatorSeries, PriceSeries};

use crate::util::round2;

/// Simple Moving Average (SMA).
///
/// The arithmetic mean of the trailing N adjusted closes, rounded to 2
/// decimal places. Dates with fewer than N observations are omitted from
/// the output rather than filled with a sentinel, so callers decide how to
/// treat the warm-up region.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Date-aligned SMA over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<f64> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(round2(sum / period_f64));

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(round2(sum / period_f64));
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive smoothing with factor α = 2/(span+1), seeded with the first
/// observation and applying no warm-up bias correction, so a value exists
/// for every date with at least one observation. Rounded to 2 decimal
/// places.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        Self { span }
    }

    /// Date-aligned EMA over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<f64> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }

    /// Unrounded smoothing over arbitrary dates (e.g. a derived line).
    pub(crate) fn smooth(data: &[f64], span: usize) -> Vec<f64> {
        let Some((&first, rest)) = data.split_first() else {
            return vec![];
        };

        let alpha = 2.0 / (span as f64 + 1.0);
        let mut result = Vec::with_capacity(data.len());
        let mut ema = first;
        result.push(ema);

        for &value in rest {
            ema = value * alpha + ema * (1.0 - alpha);
            result.push(ema);
        }

        result
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        Self::smooth(data, self.span)
            .into_iter()
            .map(round2)
            .collect()
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data_omitted() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];

        // Warm-up dates are absent, not zero-filled.
        assert!(sma.calculate(&data).is_empty());
    }

    #[test]
    fn test_sma_constant_series() {
        let sma = Sma::new(4);
        let data = vec![50.0; 10];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|&v| v == 50.0));
    }

    #[test]
    fn test_sma_rounds_to_cents() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 2.0];
        let result = sma.calculate(&data);

        // 5/3 = 1.666... -> 1.67
        assert_eq!(result[0], 1.67);
    }

    #[test]
    fn test_ema_seeded_with_first_observation() {
        let ema = Ema::new(3);
        let data = vec![2.0, 4.0, 8.0];
        let result = ema.calculate(&data);

        // alpha = 0.5; defined from the very first date
        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10);
        assert!((result[1] - 3.0).abs() < 1e-10); // 4*0.5 + 2*0.5
        assert!((result[2] - 5.5).abs() < 1e-10); // 8*0.5 + 3*0.5
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = Ema::new(5);
        let data = vec![75.0; 8];
        let result = ema.calculate(&data);

        assert_eq!(result.len(), 8);
        assert!(result.iter().all(|&v| v == 75.0));
    }

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::new(5);
        assert!(ema.calculate(&[]).is_empty());
    }

    #[test]
    fn test_series_alignment() {
        use chrono::NaiveDate;
        use stockta_core::types::DailyBar;

        let bars = (1..=5)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2020, 5, d).unwrap();
                let p = d as f64;
                DailyBar::new(date, p, p, p, p, p, 0.0)
            })
            .collect();
        let series = PriceSeries::new("TEST", bars).unwrap();

        let sma = Sma::new(3).calculate_series(&series);
        assert_eq!(sma.len(), 3);
        assert!(sma
            .get(NaiveDate::from_ymd_opt(2020, 5, 2).unwrap())
            .is_none());
        assert_eq!(
            sma.get(NaiveDate::from_ymd_opt(2020, 5, 3).unwrap()),
            Some(&2.0)
        );

        let ema = Ema::new(3).calculate_series(&series);
        assert_eq!(ema.len(), 5);
    }
}
