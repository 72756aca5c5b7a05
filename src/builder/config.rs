//! Candidate set builder configuration.

use std::collections::BTreeSet;

use crate::cover::Dimension;
use crate::error::ConfigError;

/// Configuration for [`CandidateSetBuilder`](super::CandidateSetBuilder).
///
/// # Examples
///
/// ```
/// use u_setcover::builder::BuilderConfig;
/// use u_setcover::cover::Dimension;
///
/// let config = BuilderConfig::default()
///     .with_dimensions(vec![Dimension::Modality, Dimension::Cross])
///     .with_cross_exclusions(vec!["General".into()]);
/// assert!(config.validate().is_ok());
/// assert!(config.is_cross_excluded("General"));
/// assert!(!config.is_cross_excluded("Neuro"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Dimensions to derive candidate sets for, in output order.
    pub dimensions: Vec<Dimension>,

    /// Key used for blank or missing dimension values.
    pub unknown_label: String,

    /// Specialty values skipped when building cross-dimension sets.
    ///
    /// Tuples with these specialties still join single-dimension sets.
    pub cross_exclusions: Vec<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dimensions: vec![
                Dimension::Modality,
                Dimension::Specialty,
                Dimension::Hospital,
                Dimension::Cross,
            ],
            unknown_label: "Unknown".into(),
            cross_exclusions: vec!["General".into(), "Unknown".into()],
        }
    }
}

impl BuilderConfig {
    /// Preset for shift-position mode: one set per position.
    pub fn positions() -> Self {
        Self {
            dimensions: vec![Dimension::Position],
            ..Self::default()
        }
    }

    /// Sets the requested dimensions.
    pub fn with_dimensions(mut self, dimensions: Vec<Dimension>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets the label for blank dimension values.
    pub fn with_unknown_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_label = label.into();
        self
    }

    /// Sets the specialties excluded from cross-dimension sets.
    pub fn with_cross_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.cross_exclusions = exclusions;
        self
    }

    /// Returns `true` if `specialty` is skipped for cross-dimension sets.
    pub fn is_cross_excluded(&self, specialty: &str) -> bool {
        self.cross_exclusions.iter().any(|e| e == specialty)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions.is_empty() {
            return Err(ConfigError::NoDimensions);
        }
        let mut seen = BTreeSet::new();
        for &d in &self.dimensions {
            if !seen.insert(d) {
                return Err(ConfigError::DuplicateDimension(d));
            }
        }
        if self.unknown_label.trim().is_empty() {
            return Err(ConfigError::BlankLabel {
                field: "unknown_label",
            });
        }
        if self.cross_exclusions.iter().any(|e| e.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword {
                table: "cross_exclusions",
            });
        }
        Ok(())
    }
}
