//! Human-readable rendering of cover results.
//!
//! All renderers implement [`fmt::Display`]; callers decide where the text
//! goes.

use std::fmt;

use crate::analysis::DimensionComparison;
use crate::cover::{CoverSolution, Dimension, Element, SolutionStep, Universe};

use super::config::DisplayNames;
use super::types::efficiency_percent;

/// Newly covered elements are listed only up to this many.
const MAX_LISTED: usize = 5;

/// Position steps list this many newly covered elements, then a count.
const POSITION_LISTED: usize = 3;

fn join<'a, E: fmt::Display + 'a>(items: impl IntoIterator<Item = &'a E>) -> String {
    items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One greedy step, as a trace line.
///
/// Position steps always list new elements, truncated after three with a
/// remainder count. Other steps list them only when there are at most five.
///
/// ```text
/// Step 1: All CT (modality)
///         Covers 3 new studies (total: 3/5 covered)
///         New: A, B, C
/// ```
pub struct StepTrace<'a, E: Element> {
    index: usize,
    step: &'a SolutionStep<E>,
    universe_size: usize,
}

impl<'a, E: Element> StepTrace<'a, E> {
    /// Trace lines for every step of `solution`.
    pub fn all(solution: &'a CoverSolution<E>) -> Vec<StepTrace<'a, E>> {
        solution
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepTrace {
                index: i + 1,
                step,
                universe_size: solution.universe_size,
            })
            .collect()
    }
}

impl<E: Element + fmt::Display> fmt::Display for StepTrace<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = &self.step.set;
        writeln!(
            f,
            "Step {}: {} ({})",
            self.index,
            set.display_name(),
            set.dimension()
        )?;
        write!(
            f,
            "        Covers {} new studies (total: {}/{} covered)",
            self.step.newly_covered.len(),
            self.step.cumulative_covered,
            self.universe_size
        )?;
        let new = &self.step.newly_covered;
        if set.dimension() == Dimension::Position && new.len() > POSITION_LISTED {
            write!(
                f,
                "\n        New: {}, ... and {} more",
                join(new.iter().take(POSITION_LISTED)),
                new.len() - POSITION_LISTED
            )?;
        } else if set.dimension() == Dimension::Position || new.len() <= MAX_LISTED {
            write!(f, "\n        New: {}", join(new))?;
        }
        Ok(())
    }
}

/// Final summary of a cover: totals, efficiency and the chosen sets.
pub struct CoverSummary<'a, E: Element> {
    solution: &'a CoverSolution<E>,
    universe: &'a Universe<E>,
    total_candidates: usize,
    names: &'a DisplayNames,
}

impl<'a, E: Element> CoverSummary<'a, E> {
    pub fn new(
        solution: &'a CoverSolution<E>,
        universe: &'a Universe<E>,
        total_candidates: usize,
        names: &'a DisplayNames,
    ) -> Self {
        Self {
            solution,
            universe,
            total_candidates,
            names,
        }
    }
}

impl<E: Element + fmt::Display> fmt::Display for CoverSummary<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chosen = self.solution.set_count();
        writeln!(f, "Minimum sets needed: {chosen}")?;
        writeln!(
            f,
            "Coverage: {} studies ({:.1}%)",
            self.solution.covered.len(),
            self.solution.coverage_percent
        )?;
        writeln!(
            f,
            "Efficiency: Using {}/{} sets ({:.1}%)",
            chosen,
            self.total_candidates,
            efficiency_percent(chosen, self.total_candidates)
        )?;

        for (i, set) in self.solution.chosen_sets().into_iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {} ({})", i + 1, set.display_name(), set.dimension())?;
            writeln!(f, "   Members: {}", set.len())?;
            writeln!(f, "   Schedule: {}", set.window().label())?;
            let description = self.names.describe(set);
            if !description.is_empty() {
                writeln!(f, "   {description}")?;
            }
        }

        let gap = self.solution.uncovered(self.universe);
        if !gap.is_empty() {
            writeln!(f)?;
            writeln!(f, "Uncovered ({}): {}", gap.len(), join(&gap))?;
        }
        Ok(())
    }
}

/// Side-by-side view of per-dimension covers.
///
/// ```text
/// Using only HOSPITAL dimension:
///   Sets needed: 3
///   Coverage: 100.0%
///   Sets: CPMC - All Services, Allen - All Services, CHONY - All Services
/// ```
pub struct ComparisonSummary<'a, E: Element> {
    comparison: &'a DimensionComparison<E>,
}

impl<'a, E: Element> ComparisonSummary<'a, E> {
    pub fn new(comparison: &'a DimensionComparison<E>) -> Self {
        Self { comparison }
    }
}

impl<E: Element> fmt::Display for ComparisonSummary<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cover) in self.comparison.covers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let names: Vec<&str> = cover
                .solution
                .chosen_sets()
                .into_iter()
                .map(|s| s.display_name())
                .collect();
            writeln!(
                f,
                "Using only {} dimension:",
                cover.dimension.as_str().to_uppercase()
            )?;
            writeln!(f, "  Sets needed: {}", cover.solution.set_count())?;
            writeln!(f, "  Coverage: {:.1}%", cover.solution.coverage_percent)?;
            writeln!(f, "  Sets: {}", names.join(", "))?;
        }
        if let Some(best) = self.comparison.most_efficient() {
            writeln!(f)?;
            writeln!(
                f,
                "Most efficient: {} ({} sets, {:.1}%)",
                best.dimension,
                best.solution.set_count(),
                best.solution.coverage_percent
            )?;
        }
        Ok(())
    }
}
