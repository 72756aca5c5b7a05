//! Configuration errors.
//!
//! The cover engine itself never fails: partial coverage is a reportable
//! outcome, not an error. Only invalid configuration is rejected.

use crate::cover::Dimension;

/// Error returned when a builder or classifier configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No dimensions were requested from the candidate set builder.
    #[error("at least one dimension must be requested")]
    NoDimensions,

    /// The same dimension was requested more than once.
    #[error("dimension `{0}` requested more than once")]
    DuplicateDimension(Dimension),

    /// A fallback label (e.g. the "Unknown" bucket) is blank.
    #[error("fallback label for {field} must not be blank")]
    BlankLabel {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A keyword table contains a blank entry.
    #[error("keyword table `{table}` contains a blank entry")]
    BlankKeyword {
        /// Name of the offending table.
        table: &'static str,
    },
}
