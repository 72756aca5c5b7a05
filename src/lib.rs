//! Greedy set cover engine for coverage analysis.
//!
//! Answers "which few groupings account for every study type?" over
//! tabular coverage data:
//!
//! - **Builder**: Groups raw coverage tuples by dimension (modality,
//!   specialty, hospital, modality × specialty, shift position) into
//!   tagged candidate sets and derives the universe of elements.
//! - **Cover**: Classical greedy set cover with a deterministic tie-break;
//!   within `H(n)` of the optimal cover size.
//! - **Analysis**: Re-solves per dimension to compare grouping strategies.
//! - **Report**: Step traces, summaries and a flat export record.
//!
//! # Example
//!
//! ```
//! use u_setcover::builder::{CandidateSetBuilder, StudyClassifier};
//! use u_setcover::cover::{CoverConfig, GreedyCoverRunner};
//!
//! let classifier = StudyClassifier::default();
//! let records: Vec<_> = ["CT Head Neuro CPMC", "MR Brain Neuro Allen", "CT Abd Body CPMC"]
//!     .iter()
//!     .map(|s| classifier.record(s, false))
//!     .collect();
//!
//! let instance = CandidateSetBuilder::default().build(&records);
//! let solution = GreedyCoverRunner::run(
//!     &instance.universe,
//!     &instance.candidates,
//!     &CoverConfig::default(),
//! );
//! assert!(solution.is_complete());
//! ```
//!
//! # Features
//!
//! - `parallel`: score candidates and analyze dimensions on the rayon pool
//! - `serde`: `Serialize`/`Deserialize` for all data types

pub mod analysis;
pub mod builder;
pub mod cover;
pub mod error;
pub mod report;

pub use error::ConfigError;
