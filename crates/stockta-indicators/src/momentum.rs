//! Momentum indicators.

use serde::{Deserialize, Serialize};
use stockta_core::error::IndicatorError;
use stockta_core::traits::{Indicator, MultiOutputIndicator};
use stockta_core::types::{IndicatorSeries, PriceSeries};

use crate::moving_average::Ema;
use crate::util::round3;

/// Relative Strength Index (RSI).
///
/// Measures the magnitude of recent gains against recent losses over the
/// trailing `periods + 1` observations ending at the evaluation date:
/// day-over-day differences are split into gains and losses, each averaged
/// over `periods`, and RSI = 100 - 100/(1 + avgGain/avgLoss), rounded to 3
/// decimal places.
///
/// When the window contains no losses the average loss is zero; the value
/// is then the documented sentinel 100.0 rather than a division fault.
#[derive(Debug, Clone)]
pub struct Rsi {
    periods: usize,
}

impl Rsi {
    /// Create a new RSI indicator. The common period is 14.
    pub fn new(periods: usize) -> Self {
        assert!(periods > 0, "Periods must be greater than 0");
        Self { periods }
    }

    /// RSI over one full window of `periods + 1` observations.
    fn window_rsi(window: &[f64], periods: usize) -> f64 {
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;

        for pair in window.windows(2) {
            let diff = pair[1] - pair[0];
            if diff > 0.0 {
                gain_sum += diff;
            } else {
                loss_sum -= diff;
            }
        }

        let avg_gain = gain_sum / periods as f64;
        let avg_loss = loss_sum / periods as f64;

        // Zero-loss sentinel
        if avg_loss == 0.0 {
            return 100.0;
        }

        round3(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
    }

    /// RSI for the final date only, using the trailing window of `data`.
    ///
    /// This is the building block for causal, per-date evaluation: hand it
    /// a slice truncated at the evaluation date and nothing later can leak
    /// into the value.
    pub fn latest(&self, data: &[f64]) -> Result<f64, IndicatorError> {
        let required = self.periods + 1;
        if data.len() < required {
            return Err(IndicatorError::InsufficientData {
                required,
                available: data.len(),
            });
        }
        Ok(Self::window_rsi(&data[data.len() - required..], self.periods))
    }

    /// Date-aligned RSI over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<f64> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.periods {
            return vec![];
        }

        data.windows(self.periods + 1)
            .map(|w| Self::window_rsi(w, self.periods))
            .collect()
    }

    fn period(&self) -> usize {
        self.periods + 1
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output for one date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of the MACD line)
    pub signal: f64,
    /// True when the MACD line sits above the signal line
    pub bullish: bool,
}

/// MACD indicator.
///
/// MACD line = EMA(fast) - EMA(slow) over adjusted closes; signal line =
/// EMA(signal) of the MACD line. Both EMAs are seeded with the first
/// observation, so the output is defined for every date in the input. The
/// `bullish` flag is the directional signal.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a new MACD with the conventional periods (12, 26, 9).
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal_span: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal_span > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast,
            slow,
            signal_span,
        }
    }

    /// Date-aligned MACD over a series' adjusted closes.
    pub fn calculate_series(&self, series: &PriceSeries) -> IndicatorSeries<MacdOutput> {
        IndicatorSeries::from_tail(&series.dates(), self.calculate(&series.adj_closes()))
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        if data.is_empty() {
            return vec![];
        }

        // The fast and slow EMAs carry the library's 2-decimal rounding;
        // the derived signal line stays unrounded.
        let fast_ema = Ema::new(self.fast).calculate(data);
        let slow_ema = Ema::new(self.slow).calculate(data);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::smooth(&macd_line, self.signal_span);

        macd_line
            .iter()
            .zip(signal_line)
            .map(|(&macd, signal)| MacdOutput {
                macd,
                signal,
                bullish: macd > signal,
            })
            .collect()
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}
