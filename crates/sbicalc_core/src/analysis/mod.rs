//! One-dimensional sensitivity sweep module.
//!
//! A sweep varies a single input field across a range, re-running the
//! scenario calculator at every step, and records one output metric per
//! sample. The resulting series is ordered by the swept value, so an
//! interactive cursor can be resolved to the nearest sample with [`locate`]
//! instead of recomputing.
//!
//! ```ignore
//! use sbicalc_core::{Catalog, MetricId, SweepRequest, sweep, locate};
//!
//! let request = SweepRequest::new("salvoSize", MetricId::ConstellationSize, "1", "50");
//! let result = sweep(&Catalog::standard(), Some(&baseline), &request)?;
//!
//! if let Some(warning) = &result.warning {
//!     eprintln!("{warning}");
//! }
//! let index = locate(&result.points, 12.4);
//! ```
//!
//! Samples are evaluated in parallel when the `parallel` feature is enabled;
//! output is identical either way.

mod config;
mod evaluator;
mod locate;
mod metrics;

pub use config::*;
pub use evaluator::*;
pub use locate::*;
pub use metrics::*;
