//! Labeled series container.

use synth_core::axis::TimeAxis;
use synth_core::types::time::Date;

/// A time axis paired one-to-one with a numeric value sequence.
///
/// Immutable once produced: the generation engine assembles it and hands
/// exclusive ownership to the caller; there are no public mutators.
///
/// # Examples
///
/// ```
/// use synth_core::axis::{Frequency, TimeAxis};
/// use synth_core::types::time::Date;
/// use synth_models::series::GeneratedSeries;
///
/// let axis = TimeAxis::build(
///     Date::parse("2020-01-01").unwrap(),
///     Date::parse("2020-01-03").unwrap(),
///     Frequency::Daily,
/// )
/// .unwrap();
/// let series = GeneratedSeries::new(axis, vec![1.0, 2.0, 3.0]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.values()[2], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSeries {
    axis: TimeAxis,
    values: Vec<f64>,
}

impl GeneratedSeries {
    /// Creates a series from an axis and an aligned value sequence.
    ///
    /// # Panics
    ///
    /// Panics if `values` and `axis` differ in length.
    pub fn new(axis: TimeAxis, values: Vec<f64>) -> Self {
        assert_eq!(
            axis.len(),
            values.len(),
            "axis and values must have equal length"
        );
        Self { axis, values }
    }

    /// Returns the time axis.
    #[inline]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Returns the value sequence.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the series is empty (never true for generated series).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the point at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(Date, f64)> {
        Some((self.axis.get(index)?, *self.values.get(index)?))
    }

    /// Returns an iterator over `(date, value)` points in axis order.
    pub fn points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.axis.iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::axis::Frequency;

    fn axis(n_days: u32) -> TimeAxis {
        let start = Date::from_ymd(2020, 1, 1).unwrap();
        let end = Date::from_ymd(2020, 1, n_days).unwrap();
        TimeAxis::build(start, end, Frequency::Daily).unwrap()
    }

    #[test]
    fn test_new_and_accessors() {
        let series = GeneratedSeries::new(axis(3), vec![1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.axis().len(), 3);
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_new_rejects_mismatched_lengths() {
        GeneratedSeries::new(axis(3), vec![1.0]);
    }

    #[test]
    fn test_get_and_points() {
        let series = GeneratedSeries::new(axis(2), vec![10.0, 20.0]);
        let (date, value) = series.get(1).unwrap();
        assert_eq!(date, Date::from_ymd(2020, 1, 2).unwrap());
        assert_eq!(value, 20.0);
        assert_eq!(series.get(2), None);

        let points: Vec<(Date, f64)> = series.points().collect();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].1, 10.0);
    }
}
