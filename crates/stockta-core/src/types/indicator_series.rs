//! Date-aligned indicator results.

use chrono::NaiveDate;
use serde::Serialize;

/// An indicator result: a date-keyed sequence of values.
///
/// Holds only the dates where the indicator is defined. Windowed indicators
/// are undefined until their window fills, so their values align with the
/// tail of the source series; dates without a value are simply absent,
/// never zero-filled.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSeries<T> {
    points: Vec<(NaiveDate, T)>,
}

impl<T> IndicatorSeries<T> {
    /// Pair indicator outputs with the trailing dates of the source series.
    ///
    /// `values` must not be longer than `dates`; the first
    /// `dates.len() - values.len()` dates are the undefined warm-up region.
    pub fn from_tail(dates: &[NaiveDate], values: Vec<T>) -> Self {
        assert!(
            values.len() <= dates.len(),
            "more indicator values than source dates"
        );
        let skip = dates.len() - values.len();
        Self {
            points: dates[skip..].iter().copied().zip(values).collect(),
        }
    }

    /// Number of defined dates.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the indicator is defined anywhere.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The value at an exact date, if defined.
    pub fn get(&self, date: NaiveDate) -> Option<&T> {
        self.points
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|i| &self.points[i].1)
    }

    /// The earliest defined point.
    pub fn first(&self) -> Option<&(NaiveDate, T)> {
        self.points.first()
    }

    /// The most recent defined point.
    pub fn last(&self) -> Option<&(NaiveDate, T)> {
        self.points.last()
    }

    /// Iterate over (date, value) pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &(NaiveDate, T)> {
        self.points.iter()
    }

    /// The defined dates, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|(d, _)| *d)
    }

    /// The values, oldest first.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.points.iter().map(|(_, v)| v)
    }
}
