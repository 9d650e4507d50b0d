//! Labeled market panel.

use synth_core::axis::TimeAxis;

use crate::matrix::ScenarioMatrix;

/// A scenario price matrix bound to a time axis and asset labels.
///
/// One column per asset, one axis tick per row. Produced by
/// [`label_market`](crate::annotate::label_market); immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPanel {
    axis: TimeAxis,
    assets: Vec<String>,
    prices: ScenarioMatrix,
}

impl MarketPanel {
    /// Binds a matrix to its axis and asset labels.
    ///
    /// # Panics
    ///
    /// Panics if the axis length differs from the row count or the label
    /// count differs from the column count.
    pub(crate) fn new(axis: TimeAxis, assets: Vec<String>, prices: ScenarioMatrix) -> Self {
        assert_eq!(
            axis.len(),
            prices.n_steps(),
            "axis and matrix rows must have equal length"
        );
        assert_eq!(
            assets.len(),
            prices.n_scenarios(),
            "one asset label per matrix column"
        );
        Self {
            axis,
            assets,
            prices,
        }
    }

    /// Returns the time axis (one tick per row).
    #[inline]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Returns the asset labels (one per column).
    #[inline]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Returns the number of assets.
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.assets.len()
    }

    /// Returns the underlying price matrix.
    #[inline]
    pub fn prices(&self) -> &ScenarioMatrix {
        &self.prices
    }

    /// Returns one asset's price path by label, if present.
    pub fn path(&self, asset: &str) -> Option<&[f64]> {
        let index = self.assets.iter().position(|a| a == asset)?;
        Some(self.prices.column(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::axis::{AnchorMode, Frequency};
    use synth_core::types::time::Date;

    fn two_by_two() -> MarketPanel {
        let axis = TimeAxis::from_anchor(
            2,
            Date::from_ymd(2021, 1, 1).unwrap(),
            AnchorMode::Start,
            Frequency::Daily,
        )
        .unwrap();
        let prices = ScenarioMatrix::from_columns(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        MarketPanel::new(axis, vec!["Asset 0".into(), "Asset 1".into()], prices)
    }

    #[test]
    fn test_accessors() {
        let panel = two_by_two();
        assert_eq!(panel.n_assets(), 2);
        assert_eq!(panel.axis().len(), 2);
        assert_eq!(panel.prices().get(1, 1), 4.0);
    }

    #[test]
    fn test_path_lookup_by_label() {
        let panel = two_by_two();
        assert_eq!(panel.path("Asset 1"), Some(&[3.0, 4.0][..]));
        assert_eq!(panel.path("Asset 9"), None);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_new_rejects_axis_row_mismatch() {
        let axis = TimeAxis::from_anchor(
            3,
            Date::from_ymd(2021, 1, 1).unwrap(),
            AnchorMode::Start,
            Frequency::Daily,
        )
        .unwrap();
        let prices = ScenarioMatrix::from_columns(2, 1, vec![1.0, 2.0]);
        MarketPanel::new(axis, vec!["Asset 0".into()], prices);
    }
}
