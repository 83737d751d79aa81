//! Command-line front end for the SBI constellation calculator
//!
//! Assembles raw inputs from catalog defaults, scenario files, shared-link
//! query strings and `--set` overrides, then runs the scenario calculator or
//! a sensitivity sweep from `sbicalc_core` and renders the results.

// ============================================================================
// Front-end modules
// ============================================================================

pub mod cli;
pub mod commands;
pub mod export;
pub mod inputs;
pub mod logging;
pub mod report;
pub mod scenario_file;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use cli::{Args, Command, SweepArgs};
pub use commands::execute;
pub use logging::init_logging;
