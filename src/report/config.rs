//! Display lookup tables.

use std::collections::BTreeMap;

use crate::cover::{CandidateSet, Dimension, Element};

/// Code → display name tables used only when rendering.
///
/// # Examples
///
/// ```
/// use u_setcover::report::DisplayNames;
///
/// let names = DisplayNames::default().with_hospital("MAIN", "Main Campus");
/// assert_eq!(names.hospital_name("MAIN"), "Main Campus");
/// assert_eq!(names.hospital_name("CPMC"), "California Pacific Medical Center");
/// assert_eq!(names.hospital_name("ELSEWHERE"), "ELSEWHERE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNames {
    /// Hospital code → full name.
    pub hospitals: BTreeMap<String, String>,
    /// Modality code → canonical label.
    pub modalities: BTreeMap<String, String>,
}

impl Default for DisplayNames {
    fn default() -> Self {
        let hospitals = [
            ("CPMC", "California Pacific Medical Center"),
            ("Allen", "Allen Hospital"),
            ("NYPLH", "NewYork-Presbyterian Lower Manhattan"),
            ("CHONY", "Children's Hospital of New York"),
        ];
        let modalities = [("MR", "MRI"), ("MRI", "MRI"), ("DX", "X-Ray")];
        Self {
            hospitals: hospitals
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            modalities: modalities
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl DisplayNames {
    /// Tables with no entries; every code displays as itself.
    pub fn empty() -> Self {
        Self {
            hospitals: BTreeMap::new(),
            modalities: BTreeMap::new(),
        }
    }

    /// Adds or replaces a hospital name.
    pub fn with_hospital(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.hospitals.insert(code.into(), name.into());
        self
    }

    /// Adds or replaces a modality label.
    pub fn with_modality(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.modalities.insert(code.into(), label.into());
        self
    }

    pub fn hospital_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.hospitals.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn modality_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.modalities.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Description of `set`, resolving hospital and modality codes.
    pub fn describe<E: Element>(&self, set: &CandidateSet<E>) -> String {
        let prefix = format!("{}_", set.dimension().as_str());
        let Some(code) = set.id().strip_prefix(prefix.as_str()) else {
            return set.description().to_string();
        };
        match set.dimension() {
            Dimension::Hospital => {
                format!("All imaging services at {}", self.hospital_name(code))
            }
            Dimension::Modality => format!(
                "All {} scans across all hospitals and body parts",
                self.modality_label(code)
            ),
            _ => set.description().to_string(),
        }
    }
}
