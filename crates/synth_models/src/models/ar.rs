//! Auto-Regressive (AR) series generation.
//!
//! The AR(P) model expresses each value as a linear function of the P
//! previous values plus Gaussian white noise:
//!
//! ```text
//! x[t] = cst + a[t] + coeffs[0]·x[t-1] + ... + coeffs[P-1]·x[t-P]
//! ```
//!
//! The first P output values are imposed from `start_values`. Under the
//! stationarity assumption the process mean is `cst / (1 - Σ coeffs)`,
//! which has no finite value when the coefficients sum to one.

use synth_core::axis::TimeAxis;
use synth_core::rng::SeriesRng;

use crate::error::ModelError;
use crate::series::GeneratedSeries;

/// AR(P) model parameters.
///
/// # Invariants
///
/// `coeffs.len() == order` and `start_values.len() == order` must hold;
/// [`auto_regressive`] rejects violations before drawing any noise.
#[derive(Clone, Debug, PartialEq)]
pub struct ArSpec {
    /// Constant term.
    pub cst: f64,
    /// Model order P.
    pub order: usize,
    /// Lag coefficients, `coeffs[p]` applying to `x[t-p-1]`.
    pub coeffs: Vec<f64>,
    /// Imposed values for `x[0] .. x[P-1]`.
    pub start_values: Vec<f64>,
    /// Standard deviation of the white noise.
    pub sigma: f64,
}

impl ArSpec {
    /// Checks the length invariants.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coeffs.len() != self.order {
            return Err(ModelError::ParameterMismatch {
                field: "coeffs",
                expected: self.order,
                got: self.coeffs.len(),
            });
        }
        if self.start_values.len() != self.order {
            return Err(ModelError::ParameterMismatch {
                field: "start_values",
                expected: self.order,
                got: self.start_values.len(),
            });
        }
        Ok(())
    }

    /// Theoretical stationary mean `cst / (1 - Σ coeffs)`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UndefinedMoment`] when the coefficients sum to one,
    /// rather than a silent ±inf.
    ///
    /// # Examples
    ///
    /// ```
    /// use synth_models::models::ArSpec;
    ///
    /// let spec = ArSpec {
    ///     cst: 1.0,
    ///     order: 1,
    ///     coeffs: vec![0.5],
    ///     start_values: vec![0.0],
    ///     sigma: 1.0,
    /// };
    /// assert_eq!(spec.stationary_mean().unwrap(), 2.0);
    /// ```
    pub fn stationary_mean(&self) -> Result<f64, ModelError> {
        let coeff_sum: f64 = self.coeffs.iter().sum();
        if coeff_sum == 1.0 {
            Err(ModelError::UndefinedMoment)
        } else {
            Ok(self.cst / (1.0 - coeff_sum))
        }
    }
}

/// Result of an AR generation: the series plus its theoretical mean.
#[derive(Clone, Debug, PartialEq)]
pub struct ArOutput {
    /// The generated series.
    pub series: GeneratedSeries,
    /// Stationary mean, `None` when the coefficients sum to one.
    pub stationary_mean: Option<f64>,
}

/// Generates an AR(P) series over the given axis.
///
/// The first P values are seeded from `spec.start_values`; each later value
/// follows the recursion in the module docs, driven by a fresh
/// Normal(0, sigma) noise vector drawn from `rng`.
///
/// # Errors
///
/// [`ModelError::ParameterMismatch`] when a length invariant is violated
/// (checked before any noise draw or allocation).
pub fn auto_regressive(
    axis: &TimeAxis,
    spec: &ArSpec,
    rng: &mut SeriesRng,
) -> Result<ArOutput, ModelError> {
    spec.validate()?;

    let t_len = axis.len();
    let p = spec.order;
    // The first P noise values are drawn but unused, keeping the stream
    // aligned with the axis.
    let noise = rng.normal(0.0, spec.sigma, t_len);

    let mut x = vec![0.0; t_len];
    for t in 0..p.min(t_len) {
        x[t] = spec.start_values[t];
    }
    for t in p..t_len {
        let mut acc = spec.cst + noise[t];
        for (lag, coeff) in spec.coeffs.iter().enumerate() {
            acc += coeff * x[t - lag - 1];
        }
        x[t] = acc;
    }

    let stationary_mean = match spec.stationary_mean() {
        Ok(mean) => {
            tracing::debug!(order = p, mean, "AR stationary mean");
            Some(mean)
        }
        Err(_) => {
            tracing::warn!(order = p, "AR coefficients sum to one; stationary mean undefined");
            None
        }
    };

    Ok(ArOutput {
        series: GeneratedSeries::new(axis.clone(), x),
        stationary_mean,
    })
}
