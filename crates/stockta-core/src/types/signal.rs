//! Discrete trading signals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete trading signal for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// Bullish signal (+1)
    Buy,
    /// Bearish signal (-1)
    Sell,
    /// No action (0)
    Hold,
}

impl Signal {
    /// Integer encoding: BUY = +1, SELL = -1, HOLD = 0.
    #[inline]
    pub fn value(&self) -> i8 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Hold => 0,
        }
    }

    /// Whether the signal calls for a trade.
    #[inline]
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::Hold)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Signal::Buy.value(), 1);
        assert_eq!(Signal::Sell.value(), -1);
        assert_eq!(Signal::Hold.value(), 0);
    }

    #[test]
    fn test_actionable() {
        assert!(Signal::Buy.is_actionable());
        assert!(Signal::Sell.is_actionable());
        assert!(!Signal::Hold.is_actionable());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"SELL\"");
        assert_eq!(
            serde_json::from_str::<Signal>("\"HOLD\"").unwrap(),
            Signal::Hold
        );
    }
}
