//! Persisted result record.

use std::fmt;

use crate::cover::{CoverSolution, Element, Universe};

/// Flat summary of a cover run, shaped for export.
///
/// Serializable with the `serde` feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverRecord {
    /// Number of sets in the cover.
    pub sets_needed: usize,
    /// Share of the universe covered, 0–100.
    pub coverage_percent: f64,
    /// Display names of the chosen sets, in selection order.
    pub sets: Vec<String>,
    /// Every element of the universe, ascending.
    pub all_study_types: Vec<String>,
    /// Size of the candidate collection the cover was drawn from.
    pub total_sets_available: usize,
    /// `100 · sets_needed / total_sets_available`, or 0 with no candidates.
    pub efficiency_percent: f64,
}

impl CoverRecord {
    /// Builds the record for `solution`.
    pub fn new<E: Element + fmt::Display>(
        solution: &CoverSolution<E>,
        universe: &Universe<E>,
        total_sets_available: usize,
    ) -> Self {
        Self {
            sets_needed: solution.set_count(),
            coverage_percent: solution.coverage_percent,
            sets: solution
                .chosen_sets()
                .iter()
                .map(|s| s.display_name().to_string())
                .collect(),
            all_study_types: universe.iter().map(ToString::to_string).collect(),
            total_sets_available,
            efficiency_percent: efficiency_percent(solution.set_count(), total_sets_available),
        }
    }
}

/// Share of available candidates used by a cover, 0–100.
pub fn efficiency_percent(chosen: usize, available: usize) -> f64 {
    if available == 0 {
        0.0
    } else {
        chosen as f64 / available as f64 * 100.0
    }
}
