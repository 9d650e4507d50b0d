//! Market annotation: asset names, date axes, share counts.
//!
//! A freshly simulated [`ScenarioMatrix`] carries no labels. Annotation
//! binds it to synthetic asset names ("Asset 0", "Asset 1", …) and an
//! anchored [`TimeAxis`], and synthesises a per-asset outstanding-share
//! count.

use synth_core::axis::{AnchorMode, Frequency, TimeAxis};
use synth_core::rng::SeriesRng;
use synth_core::types::time::Date;

use crate::error::MarketError;
use crate::matrix::ScenarioMatrix;
use crate::panel::MarketPanel;

/// Reference mean for synthetic outstanding-share counts.
pub const DEFAULT_SHARE_MEAN: f64 = 100_000.0;

/// Reference standard deviation for synthetic outstanding-share counts.
pub const DEFAULT_SHARE_STD_DEV: f64 = 10_000.0;

/// Binds a simulated price matrix to asset names and an anchored time axis.
///
/// Column `i` becomes `"Asset i"`. The axis has one tick per matrix row; in
/// [`AnchorMode::End`] its last tick lands within one granularity unit of
/// `anchor` (see [`TimeAxis::from_anchor`]).
///
/// # Errors
///
/// Axis construction failures surface as [`MarketError::Axis`].
///
/// # Examples
///
/// ```
/// use synth_core::axis::{AnchorMode, Frequency};
/// use synth_core::rng::SeriesRng;
/// use synth_core::types::time::Date;
/// use synth_market::annotate::label_market;
/// use synth_market::gbm::{simulate_market, MarketSpec};
///
/// let spec = MarketSpec {
///     n_years: 1.0,
///     steps_per_year: 12,
///     n_scenarios: 2,
///     ..MarketSpec::default()
/// };
/// let mut rng = SeriesRng::from_seed(42);
/// let prices = simulate_market(&spec, &mut rng);
///
/// let anchor = Date::parse("2021-12-31").unwrap();
/// let panel = label_market(prices, anchor, AnchorMode::End, Frequency::Monthly).unwrap();
/// assert_eq!(panel.assets(), &["Asset 0".to_string(), "Asset 1".to_string()]);
/// assert!(panel.axis().last() <= anchor);
/// ```
pub fn label_market(
    prices: ScenarioMatrix,
    anchor: Date,
    mode: AnchorMode,
    granularity: Frequency,
) -> Result<MarketPanel, MarketError> {
    let axis = TimeAxis::from_anchor(prices.n_steps(), anchor, mode, granularity)?;
    let assets = (0..prices.n_scenarios())
        .map(|i| format!("Asset {i}"))
        .collect();
    Ok(MarketPanel::new(axis, assets, prices))
}

/// Per-asset outstanding-share counts, keyed by asset label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCounts {
    assets: Vec<String>,
    counts: Vec<u64>,
}

impl ShareCounts {
    /// Returns the number of assets.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the share count for `asset`, if present.
    pub fn get(&self, asset: &str) -> Option<u64> {
        let index = self.assets.iter().position(|a| a == asset)?;
        Some(self.counts[index])
    }

    /// Returns the counts in asset order.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns an iterator over `(asset, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.assets
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

/// Synthesises one outstanding-share count per panel asset.
///
/// Each count is a single Normal(`mean`, `std_dev`) draw truncated to an
/// integer. A negative draw fails the whole call with
/// [`MarketError::NegativeShareCount`]: no clamping and no internal retry;
/// the caller re-invokes with fresh randomness. A draw that truncates to
/// zero passes (only negative counts are rejected).
///
/// # Examples
///
/// ```
/// use synth_core::axis::{AnchorMode, Frequency};
/// use synth_core::rng::SeriesRng;
/// use synth_core::types::time::Date;
/// use synth_market::annotate::{
///     generate_shares, label_market, DEFAULT_SHARE_MEAN, DEFAULT_SHARE_STD_DEV,
/// };
/// use synth_market::gbm::{simulate_market, MarketSpec};
///
/// let spec = MarketSpec { n_scenarios: 3, ..MarketSpec::default() };
/// let mut rng = SeriesRng::from_seed(42);
/// let prices = simulate_market(&spec, &mut rng);
/// let anchor = Date::parse("2021-01-01").unwrap();
/// let panel = label_market(prices, anchor, AnchorMode::Start, Frequency::Monthly).unwrap();
///
/// let shares =
///     generate_shares(&panel, DEFAULT_SHARE_MEAN, DEFAULT_SHARE_STD_DEV, &mut rng).unwrap();
/// assert_eq!(shares.len(), 3);
/// assert!(shares.counts().iter().all(|&c| c > 0));
/// ```
pub fn generate_shares(
    panel: &MarketPanel,
    mean: f64,
    std_dev: f64,
    rng: &mut SeriesRng,
) -> Result<ShareCounts, MarketError> {
    let draws = rng.normal(mean, std_dev, panel.n_assets());
    tracing::debug!(
        n_assets = panel.n_assets(),
        mean,
        std_dev,
        "synthesising share counts"
    );

    let mut counts = Vec::with_capacity(draws.len());
    for (asset, draw) in panel.assets().iter().zip(&draws) {
        let truncated = *draw as i64;
        if truncated < 0 {
            return Err(MarketError::NegativeShareCount {
                asset: asset.clone(),
                count: truncated,
            });
        }
        counts.push(truncated as u64);
    }

    Ok(ShareCounts {
        assets: panel.assets().to_vec(),
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbm::{simulate_market, MarketSpec};

    fn small_panel(n_scenarios: usize) -> MarketPanel {
        let spec = MarketSpec {
            n_years: 1.0,
            steps_per_year: 12,
            n_scenarios,
            ..MarketSpec::default()
        };
        let mut rng = SeriesRng::from_seed(11);
        let prices = simulate_market(&spec, &mut rng);
        label_market(
            prices,
            Date::from_ymd(2021, 1, 1).unwrap(),
            AnchorMode::Start,
            Frequency::Monthly,
        )
        .unwrap()
    }

    #[test]
    fn test_labels_are_sequential_asset_names() {
        let panel = small_panel(3);
        assert_eq!(
            panel.assets(),
            &[
                "Asset 0".to_string(),
                "Asset 1".to_string(),
                "Asset 2".to_string(),
            ]
        );
        assert_eq!(panel.axis().len(), 13);
        assert_eq!(panel.axis().first(), Date::from_ymd(2021, 1, 1).unwrap());
    }

    #[test]
    fn test_end_anchored_axis_stays_at_or_before_anchor() {
        let spec = MarketSpec {
            n_years: 1.0,
            steps_per_year: 12,
            n_scenarios: 1,
            ..MarketSpec::default()
        };
        let mut rng = SeriesRng::from_seed(11);
        let prices = simulate_market(&spec, &mut rng);
        let anchor = Date::from_ymd(2021, 12, 31).unwrap();
        let panel = label_market(prices, anchor, AnchorMode::End, Frequency::Monthly).unwrap();
        assert!(panel.axis().last() <= anchor);
        // Within one 30-day granularity unit of the anchor.
        assert!(anchor - panel.axis().last() <= 30);
    }

    #[test]
    fn test_shares_positive_for_all_assets() {
        let panel = small_panel(5);
        let mut rng = SeriesRng::from_seed(42);
        let shares =
            generate_shares(&panel, DEFAULT_SHARE_MEAN, DEFAULT_SHARE_STD_DEV, &mut rng)
                .unwrap();
        assert_eq!(shares.len(), 5);
        assert!(shares.counts().iter().all(|&c| c > 0));
        assert!(shares.get("Asset 4").is_some());
        assert_eq!(shares.get("Asset 5"), None);
    }

    #[test]
    fn test_zero_std_dev_yields_exact_mean() {
        let panel = small_panel(4);
        let mut rng = SeriesRng::from_seed(0);
        let shares = generate_shares(&panel, 250_000.0, 0.0, &mut rng).unwrap();
        assert!(shares.iter().all(|(_, c)| c == 250_000));
    }

    #[test]
    fn test_negative_draw_is_a_hard_failure() {
        // Zero spread below zero makes every draw exactly -5: the call must
        // fail rather than clamp.
        let panel = small_panel(2);
        let mut rng = SeriesRng::from_seed(0);
        let err = generate_shares(&panel, -5.0, 0.0, &mut rng).unwrap_err();
        assert_eq!(
            err,
            MarketError::NegativeShareCount {
                asset: "Asset 0".to_string(),
                count: -5,
            }
        );
    }

    #[test]
    fn test_share_counts_reproducible_by_seed() {
        let panel = small_panel(6);
        let mut rng1 = SeriesRng::from_seed(31);
        let mut rng2 = SeriesRng::from_seed(31);
        let a = generate_shares(&panel, 1e5, 1e4, &mut rng1).unwrap();
        let b = generate_shares(&panel, 1e5, 1e4, &mut rng2).unwrap();
        assert_eq!(a, b);
    }
}
