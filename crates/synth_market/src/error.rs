//! Error types for market simulation and annotation.

use synth_core::types::error::AxisError;
use thiserror::Error;

/// Errors raised while annotating a market.
///
/// # Variants
/// - `NegativeShareCount`: share synthesis drew a negative count; the call
///   fails outright (no clamping, no internal retry) and the caller decides
///   whether to re-invoke with fresh randomness
/// - `Axis`: time-axis construction for the panel labels failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A randomly generated share count came out negative.
    #[error("generated a negative share count for {asset} ({count}); re-run with fresh randomness")]
    NegativeShareCount {
        /// The asset whose draw was negative.
        asset: String,
        /// The offending truncated draw.
        count: i64,
    },

    /// Axis construction for the panel failed.
    #[error(transparent)]
    Axis(#[from] AxisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_share_count_display() {
        let err = MarketError::NegativeShareCount {
            asset: "Asset 3".to_string(),
            count: -42,
        };
        assert_eq!(
            err.to_string(),
            "generated a negative share count for Asset 3 (-42); re-run with fresh randomness"
        );
    }

    #[test]
    fn test_axis_error_passes_through() {
        let err: MarketError = AxisError::ZeroTicks.into();
        assert_eq!(err.to_string(), "time axis needs at least one tick");
    }
}
