//! Error types for process generation.
//!
//! All model errors are detected before the output series is allocated and
//! are fatal to the call; the caller decides whether to retry with fresh
//! randomness or different parameters.

use thiserror::Error;

/// Errors raised by the process generators.
///
/// # Variants
/// - `ParameterMismatch`: a coefficient/order/initial-value length invariant
///   is violated
/// - `UndefinedMoment`: a stationarity condition for a theoretical moment
///   does not hold
/// - `NotImplemented`: the model declares its contract but no computation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A vector's length does not match the declared model order.
    #[error("length mismatch for {field}: expected {expected}, got {got}")]
    ParameterMismatch {
        /// The parameter whose length is wrong.
        field: &'static str,
        /// The declared order.
        expected: usize,
        /// The actual vector length.
        got: usize,
    },

    /// The stationarity condition does not hold, so the requested
    /// theoretical moment has no finite value.
    #[error("stationary mean is undefined: coefficients sum to one")]
    UndefinedMoment,

    /// The model's computation is an extension point with no implementation.
    #[error("{model} generation is not implemented")]
    NotImplemented {
        /// The model family name.
        model: &'static str,
    },
}
