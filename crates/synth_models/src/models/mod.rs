//! Stochastic process generators.
//!
//! Each generator is deterministic given its noise vector; randomness
//! enters only through the [`SeriesRng`](synth_core::rng::SeriesRng) handle
//! passed by the caller. All generators:
//!
//! 1. validate length invariants before any allocation,
//! 2. draw one fresh Normal(0, sigma) vector of the axis length,
//! 3. run the model's recursion as an explicit indexed loop,
//! 4. assemble the result into a [`GeneratedSeries`](crate::series::GeneratedSeries).
//!
//! ## Models
//!
//! | Generator | Recursion |
//! |-----------|-----------|
//! | [`auto_regressive`] | `x[t] = cst + a[t] + Σ coeffs[p]·x[t-p-1]` |
//! | [`random_walk`] | `x[t] = x[t-1] + a[t]` |
//! | [`drift_random_walk`] | `x[t] = drift + x[t-1] + a[t]` |
//! | [`moving_average`] | `x[t] = cst + a[t] - Σ coeffs[q]·a[t-q-1]` |
//! | [`arma`] | see module docs for the exact accumulation order |
//! | [`arch`] | extension point, reports not-implemented |

pub mod ar;
pub mod arch;
pub mod arma;
pub mod ma;
pub mod walk;

pub use ar::{auto_regressive, ArOutput, ArSpec};
pub use arch::{arch, ArchSpec};
pub use arma::{arma, ArmaSpec};
pub use ma::{moving_average, MaOutput, MaSpec};
pub use walk::{drift_random_walk, random_walk};
