//! Moving-Average (MA) series generation.
//!
//! The MA(Q) model expresses each value as the constant term plus the
//! current shock minus a weighted sum of the Q previous shocks:
//!
//! ```text
//! x[t] = cst + a[t] - coeffs[0]·a[t-1] - ... - coeffs[Q-1]·a[t-Q]
//! ```
//!
//! No initial values are imposed: for t < Q only the lagged shocks that
//! exist are used (no look-ahead), so `x[0] = cst + a[0]`,
//! `x[1] = cst + a[1] - coeffs[0]·a[0]`, and so on.
//!
//! The theoretical variance is `sigma² · (1 + Σ coeffs[q]²)` and the
//! theoretical mean is `cst`.

use synth_core::axis::TimeAxis;
use synth_core::rng::SeriesRng;

use crate::error::ModelError;
use crate::series::GeneratedSeries;

/// MA(Q) model parameters.
///
/// # Invariants
///
/// `coeffs.len() == order` must hold; [`moving_average`] rejects violations
/// before drawing any noise.
#[derive(Clone, Debug, PartialEq)]
pub struct MaSpec {
    /// Constant term (also the theoretical mean).
    pub cst: f64,
    /// Model order Q.
    pub order: usize,
    /// Lag coefficients, `coeffs[q]` applying to `a[t-q-1]`.
    pub coeffs: Vec<f64>,
    /// Standard deviation of the white noise.
    pub sigma: f64,
}

impl MaSpec {
    /// Checks the length invariant.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coeffs.len() != self.order {
            return Err(ModelError::ParameterMismatch {
                field: "coeffs",
                expected: self.order,
                got: self.coeffs.len(),
            });
        }
        Ok(())
    }

    /// Theoretical stationary variance `sigma² · (1 + Σ coeffs[q]²)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use synth_models::models::MaSpec;
    ///
    /// let spec = MaSpec {
    ///     cst: 0.0,
    ///     order: 2,
    ///     coeffs: vec![0.5, 0.5],
    ///     sigma: 2.0,
    /// };
    /// assert_eq!(spec.stationary_variance(), 6.0);
    /// ```
    pub fn stationary_variance(&self) -> f64 {
        let sum_sq: f64 = self.coeffs.iter().map(|c| c * c).sum();
        self.sigma * self.sigma * (1.0 + sum_sq)
    }
}

/// Result of an MA generation: the series plus its theoretical variance.
#[derive(Clone, Debug, PartialEq)]
pub struct MaOutput {
    /// The generated series.
    pub series: GeneratedSeries,
    /// Theoretical stationary variance of the process.
    pub stationary_variance: f64,
}

/// Generates an MA(Q) series over the given axis.
///
/// # Errors
///
/// [`ModelError::ParameterMismatch`] when `coeffs.len() != order` (checked
/// before any noise draw or allocation).
pub fn moving_average(
    axis: &TimeAxis,
    spec: &MaSpec,
    rng: &mut SeriesRng,
) -> Result<MaOutput, ModelError> {
    spec.validate()?;

    let t_len = axis.len();
    let noise = rng.normal(0.0, spec.sigma, t_len);

    let mut x = vec![0.0; t_len];
    for t in 0..t_len {
        let mut acc = spec.cst + noise[t];
        for (lag, coeff) in spec.coeffs.iter().enumerate() {
            if t > lag {
                acc -= coeff * noise[t - lag - 1];
            }
        }
        x[t] = acc;
    }

    let stationary_variance = spec.stationary_variance();
    tracing::debug!(
        order = spec.order,
        mean = spec.cst,
        variance = stationary_variance,
        std_dev = stationary_variance.sqrt(),
        "MA stationary moments"
    );

    Ok(MaOutput {
        series: GeneratedSeries::new(axis.clone(), x),
        stationary_variance,
    })
}
