//! Technical indicators over daily stock price series.
//!
//! This crate provides implementations of common technical indicators:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (Bollinger Bands)
//! - Moving-average crossover state (golden cross)
//! - Percentage-change metrics (daily, weekly, monthly)
//!
//! Every indicator is a pure transform: it reads a price slice or a
//! [`PriceSeries`](stockta_core::PriceSeries) and returns newly allocated
//! values, leaving the input untouched. Windowed indicators omit dates
//! whose trailing window has not filled.

pub mod crossover;
pub mod momentum;
pub mod moving_average;
pub mod returns;
pub mod volatility;

mod util;

pub use crossover::GoldenCross;
pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use returns::{monthly_change, weekly_change, DailyChange};
pub use volatility::{BollingerBands, BollingerOutput};
