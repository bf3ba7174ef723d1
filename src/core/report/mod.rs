//! Degree-audit report generation
//!
//! Renders the structured output of the progress and GPA evaluators into a
//! Markdown report. The engine itself only returns structured verdicts; this
//! module is the CLI-facing rendering of them.

pub mod markdown;

pub use markdown::MarkdownReporter;

use crate::core::gpa;
use crate::core::models::{Catalog, DegreeProgram, PlanState, Term};
use crate::core::progress::ProgramProgress;

/// Data context for report generation
///
/// Aggregates everything needed to render a degree audit, providing a single
/// source of truth for the template.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Plan being audited
    pub plan: &'a PlanState,
    /// Degree program the plan targets
    pub program: &'a DegreeProgram,
    /// Catalog backing the plan
    pub catalog: &'a Catalog,
    /// Requirement progress computed for the plan
    pub progress: &'a ProgramProgress,
}

impl ReportContext<'_> {
    /// Cumulative GPA across the whole plan
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        gpa::cumulative_gpa(self.plan)
    }

    /// Display label for a term, e.g. `"Fall 2025"`
    #[must_use]
    pub fn term_label(term: &Term) -> String {
        format!("{} {}", term.season, term.year)
    }
}
