//! Auto-Regressive Conditional Heteroscedastic (ARCH) extension point.
//!
//! ARCH models describe the volatility of a series rather than its level.
//! The contract for an ARCH(M) implementation is the conditional-variance
//! recursion
//!
//! ```text
//! var[t] = cst + coeffs[0]·a[t-1]² + ... + coeffs[M-1]·a[t-M]²
//! ```
//!
//! where `a` is the shock series. Only the parameter contract and its
//! validation exist here; generation reports
//! [`ModelError::NotImplemented`]. GARCH, EGARCH, CHARMA, RCA and
//! stochastic-volatility variants would slot in alongside this model.

use synth_core::axis::TimeAxis;
use synth_core::rng::SeriesRng;

use crate::error::ModelError;
use crate::series::GeneratedSeries;

/// ARCH(M) model parameters.
///
/// # Invariants
///
/// `coeffs.len() == order` must hold; [`arch`] rejects violations before
/// reporting that generation is unimplemented.
#[derive(Clone, Debug, PartialEq)]
pub struct ArchSpec {
    /// Constant term of the variance recursion.
    pub cst: f64,
    /// Model order M.
    pub order: usize,
    /// Lag coefficients, `coeffs[m]` applying to `a[t-m-1]²`.
    pub coeffs: Vec<f64>,
}

impl ArchSpec {
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
}

/// Declares ARCH(M) volatility generation.
///
/// # Errors
///
/// - [`ModelError::ParameterMismatch`] when `coeffs.len() != order`
/// - [`ModelError::NotImplemented`] otherwise: the variance recursion has
///   no implementation yet
pub fn arch(
    _axis: &TimeAxis,
    spec: &ArchSpec,
    _rng: &mut SeriesRng,
) -> Result<GeneratedSeries, ModelError> {
    spec.validate()?;
    Err(ModelError::NotImplemented { model: "ARCH" })
}
