//! Combined Auto-Regressive Moving-Average (ARMA) series generation.
//!
//! For t ≥ P the value is accumulated in this exact order:
//!
//! ```text
//! x[t]  = cst + a[t]
//! x[t] += ar_coeffs[p] · x[t-p]      for p = 0 .. P-1, in order
//! x[t] -= ma_coeffs[q] · x[t-q-1]    for q = 0 .. Q-1 with t-q-1 ≥ 0
//! ```
//!
//! Two details of this recursion differ from the textbook ARMA definition
//! (AR sum over `x[t-p-1]`, MA sum over `a[t-q-1]`) and are part of its
//! contract: the p = 0 autoregressive term reads the partially accumulated
//! value of `x[t]` itself, and the moving-average correction subtracts
//! lagged *series* values, not lagged shocks. Callers wanting the textbook
//! behaviour should use [`auto_regressive`](super::auto_regressive) and
//! [`moving_average`](super::moving_average) instead.
//!
//! The first P values are imposed from `start_values`.

use synth_core::axis::TimeAxis;
use synth_core::rng::SeriesRng;

use crate::error::ModelError;
use crate::series::GeneratedSeries;

/// ARMA(P, Q) model parameters.
///
/// # Invariants
///
/// `ar_coeffs.len() == ar_order`, `ma_coeffs.len() == ma_order` and
/// `start_values.len() == ar_order` must hold; [`arma`] rejects violations
/// before drawing any noise.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmaSpec {
    /// Constant term.
    pub cst: f64,
    /// Auto-regressive order P.
    pub ar_order: usize,
    /// Auto-regressive coefficients.
    pub ar_coeffs: Vec<f64>,
    /// Moving-average order Q.
    pub ma_order: usize,
    /// Moving-average coefficients.
    pub ma_coeffs: Vec<f64>,
    /// Imposed values for `x[0] .. x[P-1]`.
    pub start_values: Vec<f64>,
    /// Standard deviation of the white noise.
    pub sigma: f64,
}

impl ArmaSpec {
    /// Checks the length invariants.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.ar_coeffs.len() != self.ar_order {
            return Err(ModelError::ParameterMismatch {
                field: "ar_coeffs",
                expected: self.ar_order,
                got: self.ar_coeffs.len(),
            });
        }
        if self.ma_coeffs.len() != self.ma_order {
            return Err(ModelError::ParameterMismatch {
                field: "ma_coeffs",
                expected: self.ma_order,
                got: self.ma_coeffs.len(),
            });
        }
        if self.start_values.len() != self.ar_order {
            return Err(ModelError::ParameterMismatch {
                field: "start_values",
                expected: self.ar_order,
                got: self.start_values.len(),
            });
        }
        Ok(())
    }
}

/// Generates an ARMA(P, Q) series over the given axis.
///
/// See the module docs for the exact accumulation order of the recursion.
///
/// # Errors
///
/// [`ModelError::ParameterMismatch`] when a length invariant is violated
/// (checked before any noise draw or allocation).
pub fn arma(
    axis: &TimeAxis,
    spec: &ArmaSpec,
    rng: &mut SeriesRng,
) -> Result<GeneratedSeries, ModelError> {
    spec.validate()?;

    let t_len = axis.len();
    let p = spec.ar_order;
    let noise = rng.normal(0.0, spec.sigma, t_len);

    let mut x = vec![0.0; t_len];
    for t in 0..p.min(t_len) {
        x[t] = spec.start_values[t];
    }
    for t in p..t_len {
        x[t] = spec.cst + noise[t];
        for (lag, coeff) in spec.ar_coeffs.iter().enumerate() {
            // lag 0 reads the partially accumulated x[t].
            x[t] += coeff * x[t - lag];
        }
        for (lag, coeff) in spec.ma_coeffs.iter().enumerate() {
            if t > lag {
                x[t] -= coeff * x[t - lag - 1];
            }
        }
    }

    Ok(GeneratedSeries::new(axis.clone(), x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use synth_core::axis::Frequency;
    use synth_core::types::time::Date;

    fn daily_axis(n_days: u32) -> TimeAxis {
        let start = Date::from_ymd(2020, 1, 1).unwrap();
        let end = Date::from_ymd(2020, 1, n_days).unwrap();
        TimeAxis::build(start, end, Frequency::Daily).unwrap()
    }

    #[test]
    fn test_first_p_values_are_seeded() {
        let axis = daily_axis(10);
        let spec = ArmaSpec {
            cst: 0.5,
            ar_order: 2,
            ar_coeffs: vec![0.2, 0.1],
            ma_order: 1,
            ma_coeffs: vec![0.3],
            start_values: vec![5.0, -5.0],
            sigma: 1.0,
        };
        let mut rng = SeriesRng::from_seed(13);
        let series = arma(&axis, &spec, &mut rng).unwrap();
        assert_eq!(&series.values()[..2], &[5.0, -5.0]);
    }

    #[test]
    fn test_zero_coefficients_zero_noise_is_constant() {
        let axis = daily_axis(8);
        let spec = ArmaSpec {
            cst: 3.0,
            ar_order: 1,
            ar_coeffs: vec![0.0],
            ma_order: 1,
            ma_coeffs: vec![0.0],
            start_values: vec![9.0],
            sigma: 0.0,
        };
        let mut rng = SeriesRng::from_seed(2);
        let series = arma(&axis, &spec, &mut rng).unwrap();
        assert_eq!(series.values()[0], 9.0);
        assert!(series.values()[1..].iter().all(|&x| x == 3.0));
    }

    #[test]
    fn test_current_index_term_feeds_back() {
        // P = 1, Q = 0, sigma = 0: the lag-0 term multiplies the partial
        // accumulator, so x[t] = cst · (1 + c) for every t ≥ 1.
        let axis = daily_axis(5);
        let spec = ArmaSpec {
            cst: 2.0,
            ar_order: 1,
            ar_coeffs: vec![0.5],
            ma_order: 0,
            ma_coeffs: vec![],
            start_values: vec![100.0],
            sigma: 0.0,
        };
        let mut rng = SeriesRng::from_seed(2);
        let series = arma(&axis, &spec, &mut rng).unwrap();
        assert_eq!(series.values()[0], 100.0);
        for &value in &series.values()[1..] {
            assert_relative_eq!(value, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ma_part_subtracts_lagged_series_values() {
        // P = 0, Q = 1, sigma = 0: x[0] = cst, x[t] = cst - c·x[t-1].
        let axis = daily_axis(4);
        let spec = ArmaSpec {
            cst: 1.0,
            ar_order: 0,
            ar_coeffs: vec![],
            ma_order: 1,
            ma_coeffs: vec![0.5],
            start_values: vec![],
            sigma: 0.0,
        };
        let mut rng = SeriesRng::from_seed(2);
        let series = arma(&axis, &spec, &mut rng).unwrap();
        // 1, 1 - 0.5, 1 - 0.25, 1 - 0.375
        let expected = [1.0, 0.5, 0.75, 0.625];
        for (got, want) in series.values().iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rejects_mismatched_ar_coeffs() {
        let axis = daily_axis(5);
        let spec = ArmaSpec {
            cst: 0.0,
            ar_order: 2,
            ar_coeffs: vec![0.1],
            ma_order: 0,
            ma_coeffs: vec![],
            start_values: vec![0.0, 0.0],
            sigma: 1.0,
        };
        let mut rng = SeriesRng::from_seed(1);
        let err = arma(&axis, &spec, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ModelError::ParameterMismatch {
                field: "ar_coeffs",
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn test_rejects_mismatched_ma_coeffs() {
        let axis = daily_axis(5);
        let spec = ArmaSpec {
            cst: 0.0,
            ar_order: 0,
            ar_coeffs: vec![],
            ma_order: 2,
            ma_coeffs: vec![0.1, 0.2, 0.3],
            start_values: vec![],
            sigma: 1.0,
        };
        let mut rng = SeriesRng::from_seed(1);
        let err = arma(&axis, &spec, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ModelError::ParameterMismatch {
                field: "ma_coeffs",
                expected: 2,
                got: 3,
            }
        );
    }

    #[test]
    fn test_rejects_mismatched_start_values() {
        let axis = daily_axis(5);
        let spec = ArmaSpec {
            cst: 0.0,
            ar_order: 1,
            ar_coeffs: vec![0.5],
            ma_order: 0,
            ma_coeffs: vec![],
            start_values: vec![],
            sigma: 1.0,
        };
        let mut rng = SeriesRng::from_seed(1);
        let err = arma(&axis, &spec, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ModelError::ParameterMismatch {
                field: "start_values",
                expected: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let axis = daily_axis(20);
        let spec = ArmaSpec {
            cst: 0.1,
            ar_order: 1,
            ar_coeffs: vec![0.4],
            ma_order: 2,
            ma_coeffs: vec![0.2, 0.1],
            start_values: vec![1.0],
            sigma: 1.5,
        };
        let mut rng1 = SeriesRng::from_seed(6);
        let mut rng2 = SeriesRng::from_seed(6);
        assert_eq!(
            arma(&axis, &spec, &mut rng1).unwrap().values(),
            arma(&axis, &spec, &mut rng2).unwrap().values()
        );
    }
}
