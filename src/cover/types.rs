//! Core data model for set cover problems.

use std::collections::BTreeSet;
use std::fmt;

/// An opaque, comparable identifier that must be covered.
///
/// Blanket-implemented for every type satisfying the bounds; `String` is
/// what the candidate set builders produce.
pub trait Element: Ord + Clone + fmt::Debug + Send + Sync {}

impl<T: Ord + Clone + fmt::Debug + Send + Sync> Element for T {}

/// The grouping axis a candidate set was derived from.
///
/// Variants are declared in the canonical reporting order; `Ord` follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Imaging modality (CT, MRI, ...).
    Modality,
    /// Clinical specialty (Neuro, Body, ...).
    Specialty,
    /// Hospital site.
    Hospital,
    /// Cross product of modality and specialty.
    Cross,
    /// Concrete shift position.
    Position,
}

impl Dimension {
    /// All dimensions in declaration order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Modality,
        Dimension::Specialty,
        Dimension::Hospital,
        Dimension::Cross,
        Dimension::Position,
    ];

    /// Lowercase tag used as the candidate id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Modality => "modality",
            Dimension::Specialty => "specialty",
            Dimension::Hospital => "hospital",
            Dimension::Cross => "cross",
            Dimension::Position => "position",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which parts of the week a candidate set was observed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageWindow {
    /// Seen on at least one weekday-tagged tuple.
    pub weekday: bool,
    /// Seen on at least one weekend-tagged tuple.
    pub weekend: bool,
}

impl CoverageWindow {
    /// Records one observation.
    pub fn observe(&mut self, is_weekend: bool) {
        if is_weekend {
            self.weekend = true;
        } else {
            self.weekday = true;
        }
    }

    /// Human-readable schedule label.
    pub fn label(&self) -> &'static str {
        match (self.weekday, self.weekend) {
            (true, true) => "24/7",
            (true, false) => "Weekday only",
            (false, true) => "Weekend only",
            (false, false) => "No coverage",
        }
    }
}

/// A named, dimension-tagged subset of the universe.
///
/// Immutable once constructed; members are deduplicated and ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateSet<E: Element> {
    id: String,
    display_name: String,
    description: String,
    dimension: Dimension,
    members: BTreeSet<E>,
    window: CoverageWindow,
    sheets: BTreeSet<String>,
}

impl<E: Element> CandidateSet<E> {
    /// Creates a candidate set with no description and an empty window.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        dimension: Dimension,
        members: impl IntoIterator<Item = E>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            dimension,
            members: members.into_iter().collect(),
            window: CoverageWindow::default(),
            sheets: BTreeSet::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the weekday/weekend coverage window.
    pub fn with_window(mut self, window: CoverageWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the sheets this set was observed on.
    pub fn with_sheets(mut self, sheets: impl IntoIterator<Item = String>) -> Self {
        self.sheets = sheets.into_iter().collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn members(&self) -> &BTreeSet<E> {
        &self.members
    }

    pub fn window(&self) -> CoverageWindow {
        self.window
    }

    pub fn sheets(&self) -> &BTreeSet<String> {
        &self.sheets
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Counts the members still present in `uncovered`.
    pub fn gain(&self, uncovered: &BTreeSet<E>) -> usize {
        // Iterate the smaller side.
        if self.members.len() <= uncovered.len() {
            self.members.iter().filter(|m| uncovered.contains(*m)).count()
        } else {
            uncovered.iter().filter(|u| self.members.contains(*u)).count()
        }
    }
}

/// The full set of elements that must be covered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Universe<E: Element> {
    elements: BTreeSet<E>,
}

impl<E: Element> Universe<E> {
    /// Creates a universe from any collection of elements (duplicates collapse).
    pub fn new(elements: impl IntoIterator<Item = E>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }
}

impl<E: Element> Default for Universe<E> {
    fn default() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }
}

impl<E: Element> FromIterator<E> for Universe<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// An ordered list of candidate sets, filterable by dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateCollection<E: Element> {
    sets: Vec<CandidateSet<E>>,
}

impl<E: Element> CandidateCollection<E> {
    /// Wraps the given sets, preserving their order.
    pub fn new(sets: Vec<CandidateSet<E>>) -> Self {
        Self { sets }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateSet<E>> {
        self.sets.iter()
    }

    pub fn as_slice(&self) -> &[CandidateSet<E>] {
        &self.sets
    }

    /// Looks up a set by id.
    pub fn get(&self, id: &str) -> Option<&CandidateSet<E>> {
        self.sets.iter().find(|s| s.id() == id)
    }

    /// Distinct dimensions present, in declaration order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.sets.iter().any(|s| s.dimension() == *d))
            .collect()
    }

    /// Returns a new collection holding only the sets tagged `dimension`.
    pub fn by_dimension(&self, dimension: Dimension) -> CandidateCollection<E> {
        CandidateCollection::new(
            self.sets
                .iter()
                .filter(|s| s.dimension() == dimension)
                .cloned()
                .collect(),
        )
    }

    /// The `limit` largest sets, by member count descending then id.
    pub fn ranked_by_size(&self, limit: usize) -> Vec<&CandidateSet<E>> {
        let mut ranked: Vec<&CandidateSet<E>> = self.sets.iter().collect();
        ranked.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.id().cmp(b.id())));
        ranked.truncate(limit);
        ranked
    }
}

impl<E: Element> Default for CandidateCollection<E> {
    fn default() -> Self {
        Self { sets: Vec::new() }
    }
}

impl<E: Element> FromIterator<CandidateSet<E>> for CandidateCollection<E> {
    fn from_iter<I: IntoIterator<Item = CandidateSet<E>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E: Element> IntoIterator for &'a CandidateCollection<E> {
    type Item = &'a CandidateSet<E>;
    type IntoIter = std::slice::Iter<'a, CandidateSet<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
