//! Candidate set construction.
//!
//! # Algorithm
//!
//! 1. For each tuple, trim the element identifier; skip blank ones
//! 2. Add the element to the universe
//! 3. For each requested dimension the tuple carries, normalize its key
//!    (blank → unknown label) and add the element to that key's group,
//!    recording the weekday/weekend window and source sheet
//! 4. Emit one candidate set per group, ordered by dimension then key, with
//!    id `"<dimension>_<key>"` (pair keys escaped, see `GroupKey::id_part`)

use std::collections::{BTreeMap, BTreeSet};

use crate::cover::{CandidateCollection, CandidateSet, CoverageWindow, Dimension, Universe};
use crate::error::ConfigError;

use super::config::BuilderConfig;
use super::types::{CoverInstance, CoverageTuple, DimensionValue};

/// Group key: the dimension plus the normalized key parts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Single(String),
    Pair(String, String),
}

impl GroupKey {
    /// Key text as shown to people: pair parts joined by a space.
    fn joined(&self) -> String {
        match self {
            GroupKey::Single(k) => k.clone(),
            GroupKey::Pair(a, b) => format!("{a} {b}"),
        }
    }

    /// Key text for ids. Backslashes and spaces inside pair parts are
    /// escaped, so distinct pairs never share an id.
    fn id_part(&self) -> String {
        match self {
            GroupKey::Single(k) => k.clone(),
            GroupKey::Pair(a, b) => format!("{} {}", escape_id_part(a), escape_id_part(b)),
        }
    }
}

fn escape_id_part(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    for c in part.chars() {
        if c == '\\' || c == ' ' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Default)]
struct Group {
    members: BTreeSet<String>,
    window: CoverageWindow,
    sheets: BTreeSet<String>,
}

/// Builds a [`CoverInstance`] from raw coverage tuples.
///
/// Names and descriptions use the raw keys (`"All imaging services at
/// CPMC"`); full hospital and modality names are resolved at report time by
/// [`DisplayNames`](crate::report::DisplayNames).
///
/// # Examples
///
/// ```
/// use u_setcover::builder::{CandidateSetBuilder, CoverageRecord};
///
/// let records = vec![
///     CoverageRecord::new("CT Head", "CPMC", "CT", "Neuro", false),
///     CoverageRecord::new("MR Spine", "CPMC", "MRI", "Neuro", true),
/// ];
/// let instance = CandidateSetBuilder::default().build(&records);
///
/// assert_eq!(instance.universe.len(), 2);
/// let neuro = instance.candidates.get("specialty_Neuro").unwrap();
/// assert_eq!(neuro.len(), 2);
/// assert_eq!(neuro.window().label(), "24/7");
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSetBuilder {
    config: BuilderConfig,
}

impl Default for CandidateSetBuilder {
    fn default() -> Self {
        Self {
            config: BuilderConfig::default(),
        }
    }
}

impl CandidateSetBuilder {
    /// Creates a builder after validating `config`.
    pub fn new(config: BuilderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Builder for shift-position mode.
    pub fn positions() -> Self {
        Self {
            config: BuilderConfig::positions(),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Groups `tuples` into candidate sets and derives the universe.
    pub fn build<T: CoverageTuple>(&self, tuples: &[T]) -> CoverInstance<String> {
        let mut universe: BTreeSet<String> = BTreeSet::new();
        let mut groups: BTreeMap<(Dimension, GroupKey), Group> = BTreeMap::new();
        let mut skipped = 0usize;

        for (index, tuple) in tuples.iter().enumerate() {
            let element = tuple.element().trim();
            if element.is_empty() {
                tracing::warn!(index, "skipping coverage tuple with blank element");
                skipped += 1;
                continue;
            }
            universe.insert(element.to_string());

            for &dimension in &self.config.dimensions {
                let Some(key) = self.group_key(tuple.value(dimension)) else {
                    continue;
                };

                let group = groups.entry((dimension, key)).or_default();
                group.members.insert(element.to_string());
                group.window.observe(tuple.is_weekend());
                if let Some(sheet) = tuple.sheet() {
                    let sheet = sheet.trim();
                    if !sheet.is_empty() {
                        group.sheets.insert(sheet.to_string());
                    }
                }
            }
        }

        let sets: Vec<CandidateSet<String>> = groups
            .into_iter()
            .filter(|(_, group)| !group.members.is_empty())
            .map(|((dimension, key), group)| {
                let (name, description) = describe(dimension, &key);
                CandidateSet::new(
                    format!("{}_{}", dimension.as_str(), key.id_part()),
                    name,
                    dimension,
                    group.members,
                )
                .with_description(description)
                .with_window(group.window)
                .with_sheets(group.sheets)
            })
            .collect();

        tracing::debug!(
            tuples = tuples.len(),
            skipped,
            elements = universe.len(),
            candidate_sets = sets.len(),
            "built candidate sets"
        );

        CoverInstance {
            universe: Universe::new(universe),
            candidates: CandidateCollection::new(sets),
            skipped_tuples: skipped,
        }
    }

    /// Normalizes a tuple's value into a group key, applying the cross
    /// exclusion list. `None` means the tuple does not join any group.
    fn group_key(&self, value: Option<DimensionValue<'_>>) -> Option<GroupKey> {
        match value? {
            DimensionValue::Single(v) => Some(GroupKey::Single(self.normalize(v))),
            DimensionValue::Pair(a, b) => {
                let specialty = self.normalize(b);
                if self.config.is_cross_excluded(&specialty) {
                    return None;
                }
                Some(GroupKey::Pair(self.normalize(a), specialty))
            }
        }
    }

    fn normalize(&self, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.config.unknown_label.clone()
        } else {
            value.to_string()
        }
    }
}

/// Display name and description for a group, in terms of the raw key.
fn describe(dimension: Dimension, key: &GroupKey) -> (String, String) {
    let joined = key.joined();
    match (dimension, key) {
        (Dimension::Cross, GroupKey::Pair(modality, specialty)) => (
            format!("{joined} - All Hospitals"),
            format!("All {specialty} {modality} scans across all hospital locations"),
        ),
        (Dimension::Modality, _) => (
            format!("All {joined}"),
            format!("All {joined} scans across all hospitals and body parts"),
        ),
        (Dimension::Specialty, _) => {
            let description = match joined.as_str() {
                "Neuro" => "Brain and spine imaging - all modalities, all hospitals".to_string(),
                "Body" => {
                    "Body imaging (chest, abdomen, pelvis) - all modalities, all hospitals"
                        .to_string()
                }
                _ => format!("All {joined} imaging across all hospitals and modalities"),
            };
            (format!("{joined} - All Modalities"), description)
        }
        (Dimension::Hospital, _) => (
            format!("{joined} - All Services"),
            format!("All imaging services at {joined}"),
        ),
        (Dimension::Position, _) | (Dimension::Cross, _) => {
            (joined.clone(), format!("Studies read by {joined}"))
        }
    }
}
