//! # synth_core: Foundation for Synthetic Series Generation
//!
//! ## Foundation Layer Role
//!
//! synth_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` (`types::time`)
//! - Error types: `DateError`, `AxisError` (`types::error`)
//! - Sampled time axes: `TimeAxis`, `Frequency`, `AnchorMode` (`axis`)
//! - Seeded randomness: `SeriesRng` (`rng`)
//!
//! It has no dependency on the other synth_* crates, with minimal external
//! dependencies:
//! - chrono: Date arithmetic
//! - rand / rand_distr: Seeded Gaussian draws
//! - serde: Serialisation support (optional)
//!
//! ## Reproducibility Principle
//!
//! There is no global random state anywhere in this workspace. Every
//! generator takes an explicit [`rng::SeriesRng`] handle, so two runs with
//! the same seed produce identical output and independent handles can be
//! used from parallel contexts without synchronisation.
//!
//! ## Usage Example
//!
//! ```rust
//! use synth_core::axis::{Frequency, TimeAxis};
//! use synth_core::rng::SeriesRng;
//! use synth_core::types::time::Date;
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 1, 10).unwrap();
//! let axis = TimeAxis::build(start, end, Frequency::Daily).unwrap();
//! assert_eq!(axis.len(), 10);
//!
//! let mut rng = SeriesRng::from_seed(42);
//! let noise = rng.normal(0.0, 1.0, axis.len());
//! assert_eq!(noise.len(), 10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `Frequency`, `AnchorMode`
//!   and `TimeAxis`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod axis;
pub mod rng;
pub mod types;
