//! Raw coverage tuples and the strategy trait the builder consumes.

use crate::cover::{CandidateCollection, Dimension, Element, Universe};

/// A dimension key carried by a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionValue<'a> {
    /// A single key (modality, specialty, hospital, position).
    Single(&'a str),
    /// An ordered `(modality, specialty)` pair for cross-dimension sets.
    Pair(&'a str, &'a str),
}

/// A raw record that can be grouped into candidate sets.
///
/// Each tuple shape implements this once; the builder never inspects the
/// concrete type. Returning `None` from [`value`](Self::value) means the
/// tuple does not carry that dimension and is ignored for it.
pub trait CoverageTuple {
    /// The element identifier this tuple covers.
    fn element(&self) -> &str;

    /// The key for `dimension`, if this tuple shape carries it.
    fn value(&self, dimension: Dimension) -> Option<DimensionValue<'_>>;

    /// Whether the tuple came from a weekend schedule.
    fn is_weekend(&self) -> bool;

    /// Source sheet name, if known.
    fn sheet(&self) -> Option<&str> {
        None
    }
}

/// Spanning-set tuple: a study type observed at a hospital, modality and
/// specialty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageRecord {
    pub study_type: String,
    pub hospital: String,
    pub modality: String,
    pub specialty: String,
    pub is_weekend: bool,
}

impl CoverageRecord {
    pub fn new(
        study_type: impl Into<String>,
        hospital: impl Into<String>,
        modality: impl Into<String>,
        specialty: impl Into<String>,
        is_weekend: bool,
    ) -> Self {
        Self {
            study_type: study_type.into(),
            hospital: hospital.into(),
            modality: modality.into(),
            specialty: specialty.into(),
            is_weekend,
        }
    }
}

impl CoverageTuple for CoverageRecord {
    fn element(&self) -> &str {
        &self.study_type
    }

    fn value(&self, dimension: Dimension) -> Option<DimensionValue<'_>> {
        match dimension {
            Dimension::Modality => Some(DimensionValue::Single(&self.modality)),
            Dimension::Specialty => Some(DimensionValue::Single(&self.specialty)),
            Dimension::Hospital => Some(DimensionValue::Single(&self.hospital)),
            Dimension::Cross => Some(DimensionValue::Pair(&self.modality, &self.specialty)),
            Dimension::Position => None,
        }
    }

    fn is_weekend(&self) -> bool {
        self.is_weekend
    }
}

/// Shift-position tuple: a study type read by a named position on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAssignment {
    pub study_type: String,
    pub position: String,
    pub sheet: String,
    pub is_weekend: bool,
}

impl PositionAssignment {
    pub fn new(
        study_type: impl Into<String>,
        position: impl Into<String>,
        sheet: impl Into<String>,
        is_weekend: bool,
    ) -> Self {
        Self {
            study_type: study_type.into(),
            position: position.into(),
            sheet: sheet.into(),
            is_weekend,
        }
    }
}

impl CoverageTuple for PositionAssignment {
    fn element(&self) -> &str {
        &self.study_type
    }

    fn value(&self, dimension: Dimension) -> Option<DimensionValue<'_>> {
        match dimension {
            Dimension::Position => Some(DimensionValue::Single(&self.position)),
            _ => None,
        }
    }

    fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    fn sheet(&self) -> Option<&str> {
        Some(&self.sheet)
    }
}

/// A ready-to-solve problem: the universe plus its candidate sets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverInstance<E: Element> {
    /// Every element observed in the input.
    pub universe: Universe<E>,
    /// Candidate sets ordered by dimension, then id.
    pub candidates: CandidateCollection<E>,
    /// Tuples dropped because their element identifier was blank.
    pub skipped_tuples: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_exposes_all_spanning_dimensions() {
        let r = CoverageRecord::new("CT Head CPMC", "CPMC", "CT", "Neuro", false);
        assert_eq!(r.value(Dimension::Modality), Some(DimensionValue::Single("CT")));
        assert_eq!(r.value(Dimension::Hospital), Some(DimensionValue::Single("CPMC")));
        assert_eq!(r.value(Dimension::Cross), Some(DimensionValue::Pair("CT", "Neuro")));
        assert_eq!(r.value(Dimension::Position), None);
        assert_eq!(r.sheet(), None);
    }

    #[test]
    fn test_assignment_exposes_only_position() {
        let a = PositionAssignment::new("CT Head", "Neuro Day", "Weekday", false);
        assert_eq!(a.value(Dimension::Position), Some(DimensionValue::Single("Neuro Day")));
        assert_eq!(a.value(Dimension::Modality), None);
        assert_eq!(a.sheet(), Some("Weekday"));
        assert_eq!(a.element(), "CT Head");
    }
}
