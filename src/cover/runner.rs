//! Greedy set cover execution engine.
//!
//! # Algorithm
//!
//! 1. `uncovered := universe`
//! 2. While `uncovered` is non-empty:
//!    a. Score every unchosen candidate by `|members ∩ uncovered|`
//!    b. Select the highest score; ties go to the smallest candidate id
//!    c. If the best score is 0, stop (partial coverage)
//!    d. Otherwise record a step, remove the members from `uncovered`
//! 3. Return the ordered steps and the final coverage
//!
//! The result uses at most `H(n) · OPT` sets, where `n = |universe|` and
//! `H` is the harmonic number.
//!
//! # Reference
//!
//! Chvátal, V. (1979). "A Greedy Heuristic for the Set-Covering Problem",
//! *Mathematics of Operations Research* 4(3), 233-235.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::config::CoverConfig;
use super::types::{CandidateCollection, CandidateSet, Element, Universe};

/// How a greedy run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Every element of the universe is covered.
    Complete,
    /// No remaining candidate covers any uncovered element.
    Exhausted,
}

/// One iteration of the greedy loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionStep<E: Element> {
    /// The candidate chosen at this step.
    pub set: CandidateSet<E>,
    /// Elements covered for the first time by `set`. Never empty.
    pub newly_covered: BTreeSet<E>,
    /// Total covered elements after this step.
    pub cumulative_covered: usize,
}

/// Result of a greedy cover run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverSolution<E: Element> {
    /// Steps in the order the sets were chosen.
    pub steps: Vec<SolutionStep<E>>,
    /// Union of the chosen sets' members.
    pub covered: BTreeSet<E>,
    /// `100 · |covered| / |universe|`, or 0 for an empty universe.
    pub coverage_percent: f64,
    /// Size of the universe the run was asked to cover.
    pub universe_size: usize,
    /// Why the loop stopped.
    pub termination: Termination,
}

impl<E: Element> CoverSolution<E> {
    /// Chosen sets in selection order.
    pub fn chosen_sets(&self) -> Vec<&CandidateSet<E>> {
        self.steps.iter().map(|s| &s.set).collect()
    }

    /// Number of sets in the cover.
    pub fn set_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if every element was covered.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Complete
    }

    /// Elements of `universe` this solution leaves uncovered.
    pub fn uncovered(&self, universe: &Universe<E>) -> BTreeSet<E> {
        universe.elements().difference(&self.covered).cloned().collect()
    }
}

/// Greedy set cover runner.
pub struct GreedyCoverRunner;

impl GreedyCoverRunner {
    /// Computes an approximate minimum cover of `universe` from `candidates`.
    ///
    /// Candidate members are expected to be a subset of `universe`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_setcover::cover::{
    ///     CandidateCollection, CandidateSet, CoverConfig, Dimension, GreedyCoverRunner, Universe,
    /// };
    ///
    /// let universe: Universe<&str> = ["A", "B", "C"].into_iter().collect();
    /// let candidates = CandidateCollection::new(vec![
    ///     CandidateSet::new("s1", "S1", Dimension::Modality, ["A", "B"]),
    ///     CandidateSet::new("s2", "S2", Dimension::Modality, ["C"]),
    /// ]);
    ///
    /// let solution = GreedyCoverRunner::run(&universe, &candidates, &CoverConfig::default());
    /// assert_eq!(solution.set_count(), 2);
    /// assert!(solution.is_complete());
    /// ```
    pub fn run<E: Element>(
        universe: &Universe<E>,
        candidates: &CandidateCollection<E>,
        config: &CoverConfig,
    ) -> CoverSolution<E> {
        let total = universe.len();
        let sets = candidates.as_slice();

        let mut uncovered = universe.elements().clone();
        let mut chosen = vec![false; sets.len()];
        let mut steps: Vec<SolutionStep<E>> = Vec::new();

        while !uncovered.is_empty() {
            let gains = score_candidates(sets, &chosen, &uncovered, config.parallel);

            let Some(best) = select_best(sets, &gains) else {
                break;
            };

            chosen[best] = true;
            let set = &sets[best];
            let newly_covered: BTreeSet<E> = set
                .members()
                .iter()
                .filter(|m| uncovered.contains(*m))
                .cloned()
                .collect();
            for member in &newly_covered {
                uncovered.remove(member);
            }

            let cumulative_covered = total - uncovered.len();
            tracing::debug!(
                step = steps.len() + 1,
                set = set.id(),
                dimension = %set.dimension(),
                newly_covered = newly_covered.len(),
                covered = cumulative_covered,
                total,
                "greedy step"
            );

            steps.push(SolutionStep {
                set: set.clone(),
                newly_covered,
                cumulative_covered,
            });
        }

        let termination = if uncovered.is_empty() {
            Termination::Complete
        } else {
            Termination::Exhausted
        };
        let covered: BTreeSet<E> = universe.elements().difference(&uncovered).cloned().collect();
        let coverage_percent = coverage_percent(covered.len(), total);

        tracing::debug!(
            sets = steps.len(),
            candidates = sets.len(),
            covered = covered.len(),
            total,
            coverage_percent,
            ?termination,
            "greedy cover finished"
        );

        CoverSolution {
            steps,
            covered,
            coverage_percent,
            universe_size: total,
            termination,
        }
    }
}

/// Share of the universe covered, 0–100. An empty universe reports 0.
pub(crate) fn coverage_percent(covered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 / total as f64 * 100.0
    }
}

/// New-coverage count per candidate; chosen candidates score 0.
#[cfg(feature = "parallel")]
fn score_candidates<E: Element>(
    sets: &[CandidateSet<E>],
    chosen: &[bool],
    uncovered: &BTreeSet<E>,
    parallel: bool,
) -> Vec<usize> {
    use rayon::prelude::*;

    if parallel {
        sets.par_iter()
            .zip(chosen.par_iter())
            .map(|(set, &taken)| if taken { 0 } else { set.gain(uncovered) })
            .collect()
    } else {
        score_sequential(sets, chosen, uncovered)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_candidates<E: Element>(
    sets: &[CandidateSet<E>],
    chosen: &[bool],
    uncovered: &BTreeSet<E>,
    _parallel: bool,
) -> Vec<usize> {
    score_sequential(sets, chosen, uncovered)
}

fn score_sequential<E: Element>(
    sets: &[CandidateSet<E>],
    chosen: &[bool],
    uncovered: &BTreeSet<E>,
) -> Vec<usize> {
    sets.iter()
        .zip(chosen)
        .map(|(set, &taken)| if taken { 0 } else { set.gain(uncovered) })
        .collect()
}

/// Index of the best candidate, or `None` if nothing covers anything.
///
/// Highest gain wins; ties go to the lexicographically smallest id, then to
/// the earlier position.
fn select_best<E: Element>(sets: &[CandidateSet<E>], gains: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, &gain) in gains.iter().enumerate() {
        if gain == 0 {
            continue;
        }
        best = match best {
            None => Some(i),
            Some(b) => match gain.cmp(&gains[b]) {
                Ordering::Greater => Some(i),
                Ordering::Equal if sets[i].id() < sets[b].id() => Some(i),
                _ => Some(b),
            },
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::Dimension;
    use proptest::prelude::*;

    fn set(id: &str, members: &[&'static str]) -> CandidateSet<&'static str> {
        CandidateSet::new(id, id.to_uppercase(), Dimension::Position, members.iter().copied())
    }

    fn universe(elements: &[&'static str]) -> Universe<&'static str> {
        elements.iter().copied().collect()
    }

    fn ids<E: Element>(solution: &CoverSolution<E>) -> Vec<&str> {
        solution.steps.iter().map(|s| s.set.id()).collect()
    }

    fn harmonic(n: usize) -> f64 {
        (1..=n).map(|k| 1.0 / k as f64).sum()
    }

    #[test]
    fn test_tie_broken_by_smallest_id() {
        let u = universe(&["A", "B", "C", "D", "E"]);
        let candidates = CandidateCollection::new(vec![
            set("s1", &["A", "B", "C"]),
            set("s2", &["C", "D"]),
            set("s3", &["E"]),
        ]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert_eq!(ids(&solution), vec!["s1", "s2", "s3"]);
        assert_eq!(solution.steps[0].newly_covered.len(), 3);
        assert_eq!(solution.steps[0].cumulative_covered, 3);
        assert_eq!(solution.steps[1].newly_covered, ["D"].into_iter().collect());
        assert_eq!(solution.steps[2].cumulative_covered, 5);
        assert!((solution.coverage_percent - 100.0).abs() < 1e-10);
        assert!(solution.is_complete());
    }

    #[test]
    fn test_tie_break_independent_of_collection_order() {
        let u = universe(&["A", "B", "C", "D", "E"]);
        let forward = CandidateCollection::new(vec![
            set("s1", &["A", "B", "C"]),
            set("s2", &["C", "D"]),
            set("s3", &["E"]),
        ]);
        let reversed = CandidateCollection::new(forward.iter().rev().cloned().collect());

        let a = GreedyCoverRunner::run(&u, &forward, &CoverConfig::default());
        let b = GreedyCoverRunner::run(&u, &reversed, &CoverConfig::default());

        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_coverage_halts() {
        let u = universe(&["A", "B", "C"]);
        let candidates = CandidateCollection::new(vec![set("a", &["A"])]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert_eq!(solution.set_count(), 1);
        assert_eq!(solution.covered, ["A"].into_iter().collect());
        assert!((solution.coverage_percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(solution.termination, Termination::Exhausted);
        assert_eq!(solution.uncovered(&u), ["B", "C"].into_iter().collect());
    }

    #[test]
    fn test_empty_universe() {
        let u: Universe<&str> = Universe::default();
        let candidates = CandidateCollection::new(vec![set("a", &["A"])]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert!(solution.steps.is_empty());
        assert!(solution.chosen_sets().is_empty());
        assert_eq!(solution.coverage_percent, 0.0);
        assert_eq!(solution.universe_size, 0);
        assert!(solution.is_complete());
    }

    #[test]
    fn test_no_candidates() {
        let u = universe(&["A", "B"]);
        let candidates: CandidateCollection<&str> = CandidateCollection::default();

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert!(solution.steps.is_empty());
        assert!(solution.covered.is_empty());
        assert_eq!(solution.coverage_percent, 0.0);
        assert_eq!(solution.termination, Termination::Exhausted);
    }

    #[test]
    fn test_candidates_covering_nothing() {
        let u = universe(&["A", "B"]);
        let candidates = CandidateCollection::new(vec![set("e1", &[]), set("e2", &[])]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert!(solution.steps.is_empty());
        assert!(solution.coverage_percent < 100.0);
        assert_eq!(solution.uncovered(&u).len(), 2);
    }

    #[test]
    fn test_redundant_set_skipped_for_disjoint_optimum() {
        let u = universe(&["A", "B", "C", "D"]);
        let candidates = CandidateCollection::new(vec![
            set("ab", &["A", "B"]),
            set("ac", &["A", "C"]),
            set("cd", &["C", "D"]),
        ]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert_eq!(solution.set_count(), 2);
        assert_eq!(ids(&solution), vec!["ab", "cd"]);
        assert!(solution.is_complete());
    }

    #[test]
    fn test_greedy_trap_within_harmonic_bound() {
        // OPT = {t1, t2}; greedy is lured by the 4-element set first.
        let u = universe(&["1", "2", "3", "4", "5", "6"]);
        let candidates = CandidateCollection::new(vec![
            set("g", &["1", "2", "4", "5"]),
            set("t1", &["1", "2", "3"]),
            set("t2", &["4", "5", "6"]),
        ]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        assert_eq!(ids(&solution), vec!["g", "t1", "t2"]);
        assert!(solution.set_count() as f64 <= harmonic(u.len()) * 2.0);
    }

    #[test]
    fn test_chosen_sets_not_reused() {
        let u = universe(&["A", "B", "C"]);
        let candidates = CandidateCollection::new(vec![
            set("big", &["A", "B"]),
            set("small", &["C"]),
        ]);

        let solution = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());

        let mut seen = BTreeSet::new();
        for s in solution.chosen_sets() {
            assert!(seen.insert(s.id()), "set {} chosen twice", s.id());
        }
    }

    #[test]
    fn test_parallel_flag_gives_same_result() {
        let u = universe(&["A", "B", "C", "D", "E", "F"]);
        let candidates = CandidateCollection::new(vec![
            set("p", &["A", "B"]),
            set("q", &["C", "D"]),
            set("r", &["E", "F"]),
            set("s", &["A", "C", "E"]),
        ]);

        let seq = GreedyCoverRunner::run(&u, &candidates, &CoverConfig::default());
        let par = GreedyCoverRunner::run(
            &u,
            &candidates,
            &CoverConfig::default().with_parallel(true),
        );

        assert_eq!(seq, par);
    }

    #[test]
    fn test_coverage_percent_convention() {
        assert_eq!(coverage_percent(0, 0), 0.0);
        assert!((coverage_percent(1, 4) - 25.0).abs() < 1e-10);
        assert!((coverage_percent(4, 4) - 100.0).abs() < 1e-10);
    }

    // ---- Properties on random instances ----

    fn instance() -> impl Strategy<Value = (Universe<u8>, CandidateCollection<u8>)> {
        (
            prop::collection::vec(prop::collection::btree_set(0u8..12, 0..6), 0..8),
            prop::collection::btree_set(0u8..16, 0..6),
        )
            .prop_map(|(groups, extra)| {
                let mut elements: BTreeSet<u8> = extra;
                for g in &groups {
                    elements.extend(g.iter().copied());
                }
                let sets = groups
                    .into_iter()
                    .enumerate()
                    .map(|(i, g)| {
                        CandidateSet::new(format!("s{i:02}"), format!("S{i}"), Dimension::Cross, g)
                    })
                    .collect();
                (Universe::new(elements), CandidateCollection::new(sets))
            })
    }

    proptest! {
        #[test]
        fn prop_covered_is_union_of_chosen((u, c) in instance()) {
            let solution = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());

            let union: BTreeSet<u8> = solution
                .chosen_sets()
                .iter()
                .flat_map(|s| s.members().iter().copied())
                .collect();
            prop_assert_eq!(&solution.covered, &union);
            prop_assert!(solution.covered.iter().all(|e| u.contains(e)));
        }

        #[test]
        fn prop_progress_is_strictly_monotonic((u, c) in instance()) {
            let solution = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());

            let mut previous = 0;
            for step in &solution.steps {
                prop_assert!(!step.newly_covered.is_empty());
                prop_assert!(step.cumulative_covered > previous);
                prop_assert_eq!(step.cumulative_covered, previous + step.newly_covered.len());
                previous = step.cumulative_covered;
            }
        }

        #[test]
        fn prop_each_step_is_locally_best((u, c) in instance()) {
            let solution = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());

            let mut uncovered = u.elements().clone();
            let mut taken: BTreeSet<String> = BTreeSet::new();
            for step in &solution.steps {
                for other in c.iter().filter(|s| !taken.contains(s.id())) {
                    prop_assert!(other.gain(&uncovered) <= step.newly_covered.len());
                }
                taken.insert(step.set.id().to_string());
                for e in &step.newly_covered {
                    uncovered.remove(e);
                }
            }
        }

        #[test]
        fn prop_deterministic((u, c) in instance()) {
            let a = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());
            let b = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_complete_iff_candidates_span_universe((u, c) in instance()) {
            let solution = GreedyCoverRunner::run(&u, &c, &CoverConfig::default());

            let reachable: BTreeSet<u8> =
                c.iter().flat_map(|s| s.members().iter().copied()).collect();
            let spans = u.iter().all(|e| reachable.contains(e));
            prop_assert_eq!(solution.is_complete(), spans);
            prop_assert_eq!(solution.uncovered(&u).len() + solution.covered.len(), u.len());
        }
    }
}
