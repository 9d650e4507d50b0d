//! # synth_models: Univariate Stochastic Process Generators
//!
//! Labeled synthetic time series from closed-form recursive models.
//!
//! This crate provides:
//! - Auto-Regressive generation of arbitrary order (`models::ar`)
//! - Random walks, with and without drift (`models::walk`)
//! - Moving-Average generation of arbitrary order (`models::ma`)
//! - Combined ARMA generation (`models::arma`)
//! - The ARCH conditional-volatility extension point (`models::arch`)
//! - The `GeneratedSeries` labeled container (`series`)
//!
//! ## Design Principles
//!
//! - **Independent pure functions** per model, not a trait hierarchy: the
//!   models share no polymorphic surface beyond "produce a sequence from
//!   parameters and noise", so each is a plain function over arrays.
//! - **Explicit randomness**: every generator takes a
//!   [`synth_core::rng::SeriesRng`] and draws one fresh noise vector per
//!   call; noise is never shared between invocations.
//! - **Eager validation**: coefficient/order/initial-value length
//!   invariants are checked before any allocation; violations return
//!   [`error::ModelError::ParameterMismatch`].
//!
//! ## Example
//!
//! ```
//! use synth_core::axis::{Frequency, TimeAxis};
//! use synth_core::rng::SeriesRng;
//! use synth_core::types::time::Date;
//! use synth_models::models::{auto_regressive, ArSpec};
//!
//! let axis = TimeAxis::build(
//!     Date::parse("2020-01-01").unwrap(),
//!     Date::parse("2020-12-31").unwrap(),
//!     Frequency::Daily,
//! )
//! .unwrap();
//!
//! let spec = ArSpec {
//!     cst: 0.1,
//!     order: 1,
//!     coeffs: vec![0.5],
//!     start_values: vec![0.0],
//!     sigma: 1.0,
//! };
//! let mut rng = SeriesRng::from_seed(42);
//! let output = auto_regressive(&axis, &spec, &mut rng).unwrap();
//!
//! assert_eq!(output.series.len(), axis.len());
//! assert_eq!(output.stationary_mean, Some(0.2));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod models;
pub mod series;
