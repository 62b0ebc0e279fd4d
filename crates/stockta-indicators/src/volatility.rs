//! Volatility indicators.

use serde::{Deserialize, Serialize};
use stockta_core::traits::MultiOutputIndicator;
use stockta_core::types::{IndicatorSeries, PriceSeries};

/// Bollinger Bands output for one date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band (mean + k * std)
    pub upper: f64,
    /// Middle band (rolling mean)
    pub middle: f64,
    /// Lower band (mean - k * std)
    pub lower: f64,
    /// %B: where the close sits between the bands (0 = lower, 1 = upper)
    pub percent_b: f64,
}

impl BollingerOutput {
    /// Check if a price is above the upper band.
    pub fn is_overbought(&self, price: f64) -> bool {
        price > self.upper
    }

    /// Check if a price is below the lower band.
    pub fn is_oversold(&self, price: f64) -> bool {
        price < self.lower
    }
}

/// Bollinger Bands.
///
/// A rolling mean with bands at ± k sample standard deviations over the
/// same window. Dates whose window has not filled are excluded from the
/// output, never filled in.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    k: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands with the conventional parameters (20, 2.0).
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    /// Create Bollinger Bands with a custom window and band width.
    pub fn with_params(period: usize, k: f64) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        assert!(k > 0.0, "Band width multiplier must be positive");
        Self { period, k }
    }

    /// Date-aligned bands over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<BollingerOutput> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<BollingerOutput> {
        if data.len() < self.period {
            return vec![];
        }

        let period_f64 = self.period as f64;
        let mut result = Vec::with_capacity(data.len() - self.period + 1);

        for (i, window) in data.windows(self.period).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / period_f64;
            // Sample variance (n - 1)
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (period_f64 - 1.0);
            let std_dev = variance.sqrt();

            let upper = mean + self.k * std_dev;
            let lower = mean - self.k * std_dev;

            let price = data[self.period - 1 + i];
            let percent_b = if upper != lower {
                (price - lower) / (upper - lower)
            } else {
                0.5
            };

            result.push(BollingerOutput {
                upper,
                middle: mean,
                lower,
                percent_b,
            });
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}
