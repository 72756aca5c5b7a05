//! Dimension partition analysis.
//!
//! Re-runs the greedy cover once per dimension tag, each time restricted to
//! that dimension's candidates but against the full universe. Comparing the
//! results shows whether one grouping axis alone (e.g. hospitals) suffices
//! and which axis needs the fewest sets.
//!
//! Each run is independent; with the `parallel` feature and
//! [`CoverConfig::parallel`](crate::cover::CoverConfig::parallel) set, the
//! runs execute on the rayon pool. Output order is the same either way.

mod runner;

pub use runner::{DimensionAnalyzer, DimensionComparison, DimensionCover};
