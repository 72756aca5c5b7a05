//! Keyword-based classification of study type labels.
//!
//! Derives the hospital, modality and specialty of a bare study label so it
//! can be turned into a [`CoverageRecord`]. Matching is plain substring
//! search in table order; the first hit wins.

use crate::error::ConfigError;

use super::types::CoverageRecord;

/// Dimension keys derived from a study label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub hospital: String,
    pub modality: String,
    pub specialty: String,
}

/// Keyword tables for classifying study labels.
///
/// # Examples
///
/// ```
/// use u_setcover::builder::StudyClassifier;
///
/// let classifier = StudyClassifier::default();
/// let c = classifier.classify("MR Brain Neuro CPMC");
/// assert_eq!(c.hospital, "CPMC");
/// assert_eq!(c.modality, "MRI");
/// assert_eq!(c.specialty, "Neuro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyClassifier {
    /// Hospital codes, matched case-sensitively.
    pub hospitals: Vec<String>,
    /// `(keyword, canonical label)` pairs, matched against the upper-cased label.
    pub modalities: Vec<(String, String)>,
    /// Specialty names, matched case-sensitively.
    pub specialties: Vec<String>,
    /// Hospital used when no code matches.
    pub unknown_hospital: String,
    /// Modality used when no keyword matches.
    pub unknown_modality: String,
    /// Specialty used when no name matches.
    pub default_specialty: String,
}

impl Default for StudyClassifier {
    fn default() -> Self {
        let modalities = [
            ("CT", "CT"),
            ("MR", "MRI"),
            ("MRI", "MRI"),
            ("DX", "X-Ray"),
            ("US", "US"),
            ("NM", "NM"),
            ("PET", "PET"),
        ];
        Self {
            hospitals: ["CPMC", "Allen", "NYPLH", "CHONY"].map(String::from).to_vec(),
            modalities: modalities
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            specialties: ["Neuro", "Body", "Chest", "Bone"].map(String::from).to_vec(),
            unknown_hospital: "Unknown".into(),
            unknown_modality: "Unknown".into(),
            default_specialty: "General".into(),
        }
    }
}

impl StudyClassifier {
    /// Classifies a study label.
    pub fn classify(&self, study_type: &str) -> Classification {
        let upper = study_type.to_uppercase();

        let hospital = self
            .hospitals
            .iter()
            .find(|h| study_type.contains(h.as_str()))
            .unwrap_or(&self.unknown_hospital);
        let modality = self
            .modalities
            .iter()
            .find(|(keyword, _)| upper.contains(&keyword.to_uppercase()))
            .map(|(_, label)| label)
            .unwrap_or(&self.unknown_modality);
        let specialty = self
            .specialties
            .iter()
            .find(|s| study_type.contains(s.as_str()))
            .unwrap_or(&self.default_specialty);

        Classification {
            hospital: hospital.clone(),
            modality: modality.clone(),
            specialty: specialty.clone(),
        }
    }

    /// Builds a spanning-set record for `study_type`.
    pub fn record(&self, study_type: &str, is_weekend: bool) -> CoverageRecord {
        let c = self.classify(study_type);
        CoverageRecord::new(study_type, c.hospital, c.modality, c.specialty, is_weekend)
    }

    /// Validates the keyword tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hospitals.iter().any(|h| h.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword { table: "hospitals" });
        }
        if self
            .modalities
            .iter()
            .any(|(k, v)| k.trim().is_empty() || v.trim().is_empty())
        {
            return Err(ConfigError::BlankKeyword { table: "modalities" });
        }
        if self.specialties.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword {
                table: "specialties",
            });
        }
        for (field, label) in [
            ("unknown_hospital", &self.unknown_hospital),
            ("unknown_modality", &self.unknown_modality),
            ("default_specialty", &self.default_specialty),
        ] {
            if label.trim().is_empty() {
                return Err(ConfigError::BlankLabel { field });
            }
        }
        Ok(())
    }
}
