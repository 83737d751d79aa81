mod assumptions;
mod report;

pub use assumptions::{Assumptions, RawInputs};
pub use report::{MetricsReport, is_available};
