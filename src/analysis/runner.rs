//! Per-dimension cover comparison.

use crate::cover::{
    CandidateCollection, CoverConfig, CoverSolution, Dimension, Element, GreedyCoverRunner,
    Universe,
};

/// Greedy cover restricted to the candidates of one dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionCover<E: Element> {
    /// The dimension the candidates were filtered to.
    pub dimension: Dimension,
    /// How many candidates carried this dimension.
    pub candidate_count: usize,
    /// Solution against the full universe.
    pub solution: CoverSolution<E>,
}

/// Results of a [`DimensionAnalyzer`] run, one entry per dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionComparison<E: Element> {
    pub covers: Vec<DimensionCover<E>>,
}

impl<E: Element> DimensionComparison<E> {
    /// The entry for `dimension`, if it was analyzed.
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionCover<E>> {
        self.covers.iter().find(|c| c.dimension == dimension)
    }

    /// The dimension covering the most elements with the fewest sets.
    ///
    /// Remaining ties go to the earlier entry.
    pub fn most_efficient(&self) -> Option<&DimensionCover<E>> {
        self.covers.iter().reduce(|best, c| {
            let more_coverage = c.solution.covered.len() > best.solution.covered.len();
            let same_coverage = c.solution.covered.len() == best.solution.covered.len();
            let fewer_sets = c.solution.set_count() < best.solution.set_count();
            if more_coverage || (same_coverage && fewer_sets) {
                c
            } else {
                best
            }
        })
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

/// Runs the greedy solver once per dimension tag.
pub struct DimensionAnalyzer;

impl DimensionAnalyzer {
    /// Analyzes every dimension present in `candidates`, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_setcover::analysis::DimensionAnalyzer;
    /// use u_setcover::cover::{
    ///     CandidateCollection, CandidateSet, CoverConfig, Dimension, Universe,
    /// };
    ///
    /// let universe: Universe<&str> = ["A", "B"].into_iter().collect();
    /// let candidates = CandidateCollection::new(vec![
    ///     CandidateSet::new("hospital_X", "X", Dimension::Hospital, ["A", "B"]),
    ///     CandidateSet::new("modality_CT", "CT", Dimension::Modality, ["A"]),
    /// ]);
    ///
    /// let comparison = DimensionAnalyzer::run(&universe, &candidates, &CoverConfig::default());
    /// assert_eq!(comparison.len(), 2);
    /// assert_eq!(comparison.most_efficient().unwrap().dimension, Dimension::Hospital);
    /// ```
    pub fn run<E: Element>(
        universe: &Universe<E>,
        candidates: &CandidateCollection<E>,
        config: &CoverConfig,
    ) -> DimensionComparison<E> {
        Self::run_for(universe, candidates, &candidates.dimensions(), config)
    }

    /// Analyzes the given dimensions in the given order.
    ///
    /// A dimension with no candidates yields a zero-step solution.
    pub fn run_for<E: Element>(
        universe: &Universe<E>,
        candidates: &CandidateCollection<E>,
        dimensions: &[Dimension],
        config: &CoverConfig,
    ) -> DimensionComparison<E> {
        let covers = solve_each(universe, candidates, dimensions, config);

        for c in &covers {
            tracing::debug!(
                dimension = %c.dimension,
                candidates = c.candidate_count,
                sets = c.solution.set_count(),
                coverage_percent = c.solution.coverage_percent,
                "dimension cover"
            );
        }

        DimensionComparison { covers }
    }
}

fn solve_one<E: Element>(
    universe: &Universe<E>,
    candidates: &CandidateCollection<E>,
    dimension: Dimension,
    config: &CoverConfig,
) -> DimensionCover<E> {
    let subset = candidates.by_dimension(dimension);
    DimensionCover {
        dimension,
        candidate_count: subset.len(),
        solution: GreedyCoverRunner::run(universe, &subset, config),
    }
}

#[cfg(feature = "parallel")]
fn solve_each<E: Element>(
    universe: &Universe<E>,
    candidates: &CandidateCollection<E>,
    dimensions: &[Dimension],
    config: &CoverConfig,
) -> Vec<DimensionCover<E>> {
    use rayon::prelude::*;

    if config.parallel {
        dimensions
            .par_iter()
            .map(|&d| solve_one(universe, candidates, d, config))
            .collect()
    } else {
        dimensions
            .iter()
            .map(|&d| solve_one(universe, candidates, d, config))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn solve_each<E: Element>(
    universe: &Universe<E>,
    candidates: &CandidateCollection<E>,
    dimensions: &[Dimension],
    config: &CoverConfig,
) -> Vec<DimensionCover<E>> {
    dimensions
        .iter()
        .map(|&d| solve_one(universe, candidates, d, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CandidateSetBuilder, CoverageRecord};
    use crate::cover::CandidateSet;

    fn instance() -> (Universe<String>, CandidateCollection<String>) {
        let records = vec![
            CoverageRecord::new("CT Head CPMC", "CPMC", "CT", "Neuro", false),
            CoverageRecord::new("CT Abd CPMC", "CPMC", "CT", "Body", false),
            CoverageRecord::new("MR Brain Allen", "Allen", "MRI", "Neuro", true),
            CoverageRecord::new("US Pelvis Allen", "Allen", "US", "Body", false),
            CoverageRecord::new("XR Foot CHONY", "CHONY", "X-Ray", "General", false),
        ];
        let built = CandidateSetBuilder::default().build(&records);
        (built.universe, built.candidates)
    }

    #[test]
    fn test_one_entry_per_dimension_in_declaration_order() {
        let (u, c) = instance();
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        let dims: Vec<Dimension> = comparison.covers.iter().map(|c| c.dimension).collect();
        assert_eq!(
            dims,
            vec![
                Dimension::Modality,
                Dimension::Specialty,
                Dimension::Hospital,
                Dimension::Cross
            ]
        );
    }

    #[test]
    fn test_solutions_use_only_their_dimension() {
        let (u, c) = instance();
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        for cover in &comparison.covers {
            assert!(cover
                .solution
                .chosen_sets()
                .iter()
                .all(|s| s.dimension() == cover.dimension));
            assert_eq!(cover.solution.universe_size, u.len());
        }
    }

    #[test]
    fn test_cross_dimension_is_partial_when_general_excluded() {
        let (u, c) = instance();
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        let cross = comparison.get(Dimension::Cross).unwrap();
        assert!(!cross.solution.is_complete());
        assert!(cross.solution.uncovered(&u).contains("XR Foot CHONY"));

        let hospital = comparison.get(Dimension::Hospital).unwrap();
        assert!(hospital.solution.is_complete());
        assert_eq!(hospital.solution.set_count(), 3);
        assert_eq!(hospital.candidate_count, 3);
    }

    #[test]
    fn test_most_efficient_prefers_fewest_sets_at_full_coverage() {
        let (u, c) = instance();
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        // Specialty: Body, General, Neuro = 3 sets; hospital = 3 sets; modality = 4.
        let best = comparison.most_efficient().unwrap();
        assert_eq!(best.dimension, Dimension::Specialty);
        assert!(best.solution.is_complete());
    }

    #[test]
    fn test_rerun_is_identical() {
        let (u, c) = instance();
        let first = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());
        let second = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());
        assert_eq!(first, second);

        let parallel = DimensionAnalyzer::run(&u, &c, &CoverConfig::default().with_parallel(true));
        assert_eq!(first, parallel);
    }

    #[test]
    fn test_requested_dimension_without_candidates() {
        let (u, c) = instance();
        let comparison = DimensionAnalyzer::run_for(
            &u,
            &c,
            &[Dimension::Position, Dimension::Hospital],
            &CoverConfig::default(),
        );

        let position = &comparison.covers[0];
        assert_eq!(position.dimension, Dimension::Position);
        assert_eq!(position.candidate_count, 0);
        assert!(position.solution.steps.is_empty());
        assert_eq!(position.solution.coverage_percent, 0.0);
        assert_eq!(comparison.covers[1].dimension, Dimension::Hospital);
    }

    #[test]
    fn test_empty_collection() {
        let u: Universe<&str> = ["A"].into_iter().collect();
        let c: CandidateCollection<&str> = CandidateCollection::default();
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        assert!(comparison.is_empty());
        assert!(comparison.most_efficient().is_none());
    }

    #[test]
    fn test_most_efficient_tie_keeps_earlier_dimension() {
        let u: Universe<&str> = ["A", "B"].into_iter().collect();
        let c = CandidateCollection::new(vec![
            CandidateSet::new("hospital_X", "X", Dimension::Hospital, ["A", "B"]),
            CandidateSet::new("modality_CT", "CT", Dimension::Modality, ["A", "B"]),
        ]);
        let comparison = DimensionAnalyzer::run(&u, &c, &CoverConfig::default());

        assert_eq!(
            comparison.most_efficient().unwrap().dimension,
            Dimension::Modality
        );
    }
}
