//! Candidate set construction from raw coverage tuples.
//!
//! Two tuple shapes feed the same builder through the [`CoverageTuple`]
//! trait:
//!
//! - [`CoverageRecord`]: study type with hospital, modality and specialty
//!   (spanning-set mode; modality, specialty, hospital and cross sets)
//! - [`PositionAssignment`]: study type read by a named shift position
//!   (shift-position mode; one set per position)
//!
//! Blank dimension values are bucketed under an explicit unknown label so
//! the universe is never silently short. [`StudyClassifier`] derives the
//! dimension keys of a bare study label.

mod classify;
mod config;
mod runner;
mod types;

pub use classify::{Classification, StudyClassifier};
pub use config::BuilderConfig;
pub use runner::CandidateSetBuilder;
pub use types::{CoverInstance, CoverageRecord, CoverageTuple, DimensionValue, PositionAssignment};
