//! Geometric Brownian Motion market simulation.
//!
//! Each scenario path follows a multiplicative random process: per-step
//! gross returns are drawn from
//!
//! ```text
//! Normal(mean = (1 + drift)^dt, std = sigma · √dt)
//! ```
//!
//! the anchor-tick return is forced to exactly 1 (eliminating randomness on
//! the first row), and the path is the running product scaled by the
//! initial price. All scenarios share one time axis and start at a known,
//! non-random price, which reproducible backtests require.

use rayon::prelude::*;
use synth_core::rng::SeriesRng;

use crate::matrix::ScenarioMatrix;

/// GBM market parameters.
///
/// # Examples
///
/// ```
/// use synth_market::gbm::MarketSpec;
///
/// let spec = MarketSpec::default();
/// assert_eq!(spec.n_steps(), 121); // 10 years of monthly steps, plus the anchor
/// assert!((spec.dt() - 1.0 / 12.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MarketSpec {
    /// Initial price shared by every scenario.
    pub r_ini: f64,
    /// Annualised drift.
    pub drift: f64,
    /// Annualised volatility.
    pub sigma: f64,
    /// Simulation horizon in years.
    pub n_years: f64,
    /// Sampling steps per year.
    pub steps_per_year: u32,
    /// Number of independent scenario paths.
    pub n_scenarios: usize,
}

impl Default for MarketSpec {
    fn default() -> Self {
        Self {
            r_ini: 100.0,
            drift: 0.07,
            sigma: 0.15,
            n_years: 10.0,
            steps_per_year: 12,
            n_scenarios: 1000,
        }
    }
}

impl MarketSpec {
    /// Returns the time increment per step, in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_year as f64
    }

    /// Returns the number of rows of the simulated panel:
    /// `⌊n_years · steps_per_year⌋ + 1` (the extra row is the anchor tick).
    #[inline]
    pub fn n_steps(&self) -> usize {
        (self.n_years * self.steps_per_year as f64) as usize + 1
    }

    /// Validates the parameters.
    ///
    /// Returns `true` if all parameters are finite and within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.r_ini > 0.0
            && self.r_ini.is_finite()
            && self.drift.is_finite()
            && self.sigma >= 0.0
            && self.sigma.is_finite()
            && self.n_years >= 0.0
            && self.n_years.is_finite()
            && self.steps_per_year >= 1
            && self.n_scenarios >= 1
    }
}

/// Simulates `n_scenarios` independent GBM price paths.
///
/// Noise for the whole `n_steps × n_scenarios` return matrix is drawn
/// sequentially from `rng` (column by column), then each column's running
/// product is evaluated in parallel. Row 0 of every column equals
/// `spec.r_ini` exactly.
///
/// # Panics
///
/// Debug builds assert `spec.is_valid()`.
///
/// # Examples
///
/// ```
/// use synth_core::rng::SeriesRng;
/// use synth_market::gbm::{simulate_market, MarketSpec};
///
/// let spec = MarketSpec {
///     n_years: 2.0,
///     steps_per_year: 4,
///     n_scenarios: 3,
///     ..MarketSpec::default()
/// };
/// let mut rng = SeriesRng::from_seed(42);
/// let prices = simulate_market(&spec, &mut rng);
///
/// assert_eq!(prices.n_steps(), 9);
/// assert_eq!(prices.n_scenarios(), 3);
/// assert_eq!(prices.get(0, 1), 100.0);
/// ```
pub fn simulate_market(spec: &MarketSpec, rng: &mut SeriesRng) -> ScenarioMatrix {
    debug_assert!(spec.is_valid(), "invalid market spec: {spec:?}");

    let n_steps = spec.n_steps();
    let n_scenarios = spec.n_scenarios;
    let dt = spec.dt();

    let gross_mean = (1.0 + spec.drift).powf(dt);
    let gross_std = spec.sigma * dt.sqrt();

    tracing::debug!(
        n_steps,
        n_scenarios,
        gross_mean,
        gross_std,
        seed = rng.seed(),
        "simulating GBM market"
    );

    // Column-major gross returns; drawn sequentially so the panel depends
    // only on the seed, not on the thread count.
    let mut values = rng.normal(gross_mean, gross_std, n_steps * n_scenarios);

    values.par_chunks_mut(n_steps).for_each(|column| {
        column[0] = 1.0;
        let mut level = spec.r_ini;
        for price in column.iter_mut() {
            level *= *price;
            *price = level;
        }
    });

    ScenarioMatrix::from_columns(n_steps, n_scenarios, values)
}
