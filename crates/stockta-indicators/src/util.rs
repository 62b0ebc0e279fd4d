//! Rounding helpers shared by the indicator implementations.

/// Round to 2 decimal places (price-style outputs).
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (oscillator and ratio outputs).
#[inline]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
