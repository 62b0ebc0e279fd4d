//! Moving-average crossover state.

use stockta_core::error::IndicatorError;
use stockta_core::types::{PriceSeries, Signal};

use crate::util::round2;

/// Golden cross: the latest fast SMA compared against the latest slow SMA.
///
/// A scalar over the whole series rather than a per-date output: `Sell`
/// when SMA(fast) ≤ SMA(slow) at the most recent date, `Buy` when the fast
/// average has crossed above. Fewer than `slow` observations is an
/// `InsufficientData` error; there is no zero-filled comparison.
#[derive(Debug, Clone)]
pub struct GoldenCross {
    fast: usize,
    slow: usize,
}

impl GoldenCross {
    /// Create the conventional 50/200-day crossover.
    pub fn new() -> Self {
        Self::with_windows(50, 200)
    }

    /// Create a crossover with custom windows.
    pub fn with_windows(fast: usize, slow: usize) -> Self {
        assert!(fast > 0, "Fast window must be greater than 0");
        assert!(fast < slow, "Fast window must be less than slow window");
        Self { fast, slow }
    }

    /// Evaluate the crossover state at the end of `data`.
    pub fn evaluate(&self, data: &[f64]) -> Result<Signal, IndicatorError> {
        if data.len() < self.slow {
            return Err(IndicatorError::InsufficientData {
                required: self.slow,
                available: data.len(),
            });
        }

        // Most recent SMA value of each window, at the library's 2-decimal
        // price rounding.
        let fast_ma = round2(mean(&data[data.len() - self.fast..]));
        let slow_ma = round2(mean(&data[data.len() - self.slow..]));

        if fast_ma <= slow_ma {
            Ok(Signal::Sell)
        } else {
            Ok(Signal::Buy)
        }
    }

    /// Evaluate over a series' adjusted closes.
    pub fn evaluate_series(&self, series: &PriceSeries) -> Result<Signal, IndicatorError> {
        self.evaluate(&series.adj_closes())
    }
}

impl Default for GoldenCross {
    fn default() -> Self {
        Self::new()
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
