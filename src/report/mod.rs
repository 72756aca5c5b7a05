//! Reporting of cover results.
//!
//! Turns a [`CoverSolution`](crate::cover::CoverSolution) into step traces,
//! a final summary, a per-dimension comparison and a flat export record.
//! Code → name lookup tables are injected through [`DisplayNames`]; the
//! solver never sees them.

mod config;
mod render;
mod types;

pub use config::DisplayNames;
pub use render::{ComparisonSummary, CoverSummary, StepTrace};
pub use types::{efficiency_percent, CoverRecord};
