//! # synth_market: Synthetic Market Simulation
//!
//! Many correlated-axis price paths from a Geometric Brownian Motion model,
//! annotated with dates, asset names and synthetic share counts.
//!
//! This crate provides:
//! - GBM scenario simulation (`gbm`)
//! - The scenario price matrix (`matrix`)
//! - The labeled market panel (`panel`)
//! - Annotation: asset names, anchored time axes, share counts (`annotate`)
//!
//! ## Pipeline
//!
//! ```text
//! MarketSpec ──simulate_market──▶ ScenarioMatrix ──label_market──▶ MarketPanel
//!                                                                      │
//!                                                  generate_shares ◀───┘
//! ```
//!
//! Scenario columns are mutually independent: noise is drawn once,
//! sequentially, from the caller's seeded handle, then the per-column
//! cumulative products run in parallel. A fixed seed therefore reproduces
//! the exact panel regardless of thread count.
//!
//! ## Example
//!
//! ```
//! use synth_core::axis::{AnchorMode, Frequency};
//! use synth_core::rng::SeriesRng;
//! use synth_core::types::time::Date;
//! use synth_market::annotate::label_market;
//! use synth_market::gbm::{simulate_market, MarketSpec};
//!
//! let spec = MarketSpec {
//!     n_years: 1.0,
//!     steps_per_year: 12,
//!     n_scenarios: 4,
//!     ..MarketSpec::default()
//! };
//! let mut rng = SeriesRng::from_seed(42);
//! let prices = simulate_market(&spec, &mut rng);
//! assert_eq!(prices.n_steps(), 13);
//!
//! let anchor = Date::parse("2021-01-01").unwrap();
//! let panel = label_market(prices, anchor, AnchorMode::Start, Frequency::Monthly).unwrap();
//! assert_eq!(panel.assets()[0], "Asset 0");
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod annotate;
pub mod error;
pub mod gbm;
pub mod matrix;
pub mod panel;
