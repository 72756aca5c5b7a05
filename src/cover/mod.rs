//! Greedy set cover.
//!
//! Given a universe of elements and a collection of candidate sets, selects
//! an ordered, approximately minimal subcollection whose union covers the
//! universe. When no candidate can extend coverage the run stops with a
//! partial result instead of failing.
//!
//! # Key Types
//!
//! - [`Universe`], [`CandidateSet`], [`CandidateCollection`]: problem input
//! - [`CoverConfig`]: runner options
//! - [`GreedyCoverRunner`]: executes the greedy loop
//! - [`CoverSolution`], [`SolutionStep`]: ordered result with per-step deltas
//!
//! # Determinism
//!
//! Ties between equally good candidates are broken by the lexicographically
//! smallest candidate id, so identical inputs always yield identical steps.
//!
//! # References
//!
//! - Johnson, D. S. (1974). "Approximation algorithms for combinatorial problems"
//! - Chvátal, V. (1979). "A Greedy Heuristic for the Set-Covering Problem"

mod config;
mod runner;
mod types;

pub use config::CoverConfig;
pub(crate) use runner::coverage_percent;
pub use runner::{CoverSolution, GreedyCoverRunner, SolutionStep, Termination};
pub use types::{CandidateCollection, CandidateSet, CoverageWindow, Dimension, Element, Universe};
