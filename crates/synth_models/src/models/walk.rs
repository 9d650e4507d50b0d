//! Random walk generation, with and without drift.
//!
//! Both walks are AR(1) special cases with a unit lag coefficient:
//!
//! ```text
//! x[t] = x[t-1] + a[t]            (random walk)
//! x[t] = drift + x[t-1] + a[t]    (random walk with drift)
//! ```
//!
//! Neither carries coefficient vectors, so there are no length invariants
//! to validate and generation cannot fail.

use synth_core::axis::TimeAxis;
use synth_core::rng::SeriesRng;

use crate::series::GeneratedSeries;

/// Generates a random walk over the given axis.
///
/// `x[0] = start_value`; each later value adds one Normal(0, sigma) shock.
///
/// # Examples
///
/// ```
/// use synth_core::axis::{Frequency, TimeAxis};
/// use synth_core::rng::SeriesRng;
/// use synth_core::types::time::Date;
/// use synth_models::models::random_walk;
///
/// let axis = TimeAxis::build(
///     Date::parse("2020-01-01").unwrap(),
///     Date::parse("2020-01-10").unwrap(),
///     Frequency::Daily,
/// )
/// .unwrap();
/// let mut rng = SeriesRng::from_seed(42);
/// let series = random_walk(&axis, 100.0, 0.0, &mut rng);
///
/// // Zero noise: the walk stays put.
/// assert!(series.values().iter().all(|&x| x == 100.0));
/// ```
pub fn random_walk(
    axis: &TimeAxis,
    start_value: f64,
    sigma: f64,
    rng: &mut SeriesRng,
) -> GeneratedSeries {
    drift_random_walk(axis, start_value, 0.0, sigma, rng)
}

/// Generates a random walk with drift over the given axis.
///
/// `x[0] = start_value`; each later value adds `drift` plus one
/// Normal(0, sigma) shock.
pub fn drift_random_walk(
    axis: &TimeAxis,
    start_value: f64,
    drift: f64,
    sigma: f64,
    rng: &mut SeriesRng,
) -> GeneratedSeries {
    let t_len = axis.len();
    // The first noise value is drawn but unused, keeping the stream
    // aligned with the axis.
    let noise = rng.normal(0.0, sigma, t_len);

    let mut x = vec![0.0; t_len];
    x[0] = start_value;
    for t in 1..t_len {
        x[t] = drift + x[t - 1] + noise[t];
    }

    GeneratedSeries::new(axis.clone(), x)
}
