//! RSI-threshold signal generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use stockta_core::error::{IndicatorError, SignalError};
use stockta_core::types::{PriceSeries, Signal};
use stockta_indicators::Rsi;

use crate::feature::{FeatureRow, FeatureTable};

/// Configuration for the RSI signal generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// RSI calculation period
    pub rsi_period: usize,
    /// Overbought threshold (SELL at or above this)
    pub overbought: f64,
    /// Oversold threshold (BUY at or below this)
    pub oversold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl SignalConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.rsi_period < 2 {
            return Err(SignalError::InvalidConfig(
                "RSI period must be at least 2".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(SignalError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        if self.overbought > 100.0 || self.oversold < 0.0 {
            return Err(SignalError::InvalidConfig(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

/// Thresholds RSI into per-date BUY/SELL/HOLD signals.
///
/// For every date in the requested range the RSI is recomputed from the
/// series truncated at that date, so no value can depend on data after its
/// own date.
pub struct SignalGenerator {
    config: SignalConfig,
    rsi: Rsi,
}

impl SignalGenerator {
    /// Create a generator after validating the configuration.
    pub fn new(config: SignalConfig) -> Result<Self, SignalError> {
        config.validate()?;
        let rsi = Rsi::new(config.rsi_period);
        Ok(Self { config, rsi })
    }

    /// The active configuration.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Classify a single RSI value against the thresholds.
    pub fn classify(&self, rsi: f64) -> Signal {
        if rsi >= self.config.overbought {
            Signal::Sell
        } else if rsi <= self.config.oversold {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }

    /// Build the feature table for the inclusive `[start, end]` range.
    ///
    /// Dates inside the range without enough trailing history for the RSI
    /// window are omitted from the table, not given a fabricated value.
    pub fn generate(
        &self,
        series: &PriceSeries,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FeatureTable, SignalError> {
        if start > end {
            return Err(SignalError::InvalidRange { start, end });
        }

        let mut rows = Vec::new();
        let requested = series.between(start, end);

        for bar in requested.iter() {
            // Truncate at the evaluation date; nothing later is visible.
            let visible = series.up_to(bar.date);

            match self.rsi.latest(&visible.adj_closes()) {
                Ok(rsi) => rows.push(FeatureRow {
                    date: bar.date,
                    signal: self.classify(rsi),
                    rsi: round2(rsi),
                    adj_close: round2(bar.adj_close),
                }),
                Err(IndicatorError::InsufficientData {
                    required,
                    available,
                }) => {
                    debug!(
                        date = %bar.date,
                        required,
                        available,
                        "omitting date without enough history for RSI"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(FeatureTable::new(series.symbol(), rows))
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        let config = SignalConfig::default();
        let rsi = Rsi::new(config.rsi_period);
        Self { config, rsi }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
