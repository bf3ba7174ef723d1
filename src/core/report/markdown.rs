//! Markdown degree-audit report generator
//!
//! Renders the audit through an embedded template with placeholder
//! substitution; the result renders well in GitHub, GitLab, and VS Code.

use crate::core::gpa;
use crate::core::report::ReportContext;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Embedded Markdown audit template
const AUDIT_TEMPLATE: &str = include_str!("templates/audit.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[must_use]
    pub fn render(&self, ctx: &ReportContext<'_>) -> String {
        let mut output = AUDIT_TEMPLATE.to_string();

        output = output.replace("{{plan_name}}", &ctx.plan.name);
        output = output.replace("{{program_name}}", &ctx.program.name);
        output = output.replace("{{program_id}}", &ctx.program.id);
        output = output.replace(
            "{{overall_percent}}",
            &ctx.progress.overall_percent.to_string(),
        );
        output = output.replace(
            "{{completed_credits}}",
            &ctx.progress.completed_credits.to_string(),
        );
        output = output.replace(
            "{{required_credits}}",
            &ctx.progress.required_credits.to_string(),
        );
        output = output.replace("{{cumulative_gpa}}", &format!("{:.2}", ctx.cumulative_gpa()));

        output = output.replace("{{category_table}}", &Self::category_table(ctx));
        output = output.replace("{{term_table}}", &Self::term_table(ctx));
        output = output.replace("{{overload_notes}}", &Self::overload_notes(ctx));

        output
    }

    /// Render and write the report to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn generate(&self, ctx: &ReportContext<'_>, path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(path, self.render(ctx))?;
        Ok(())
    }

    fn category_table(ctx: &ReportContext<'_>) -> String {
        let mut table = String::new();
        let _ = writeln!(
            table,
            "| Category | Status | Courses | Credits | In Progress |"
        );
        let _ = writeln!(table, "|---|---|---|---|---|");

        for category in &ctx.progress.categories {
            let courses = if category.required_count == 0 {
                category.completed_count.to_string()
            } else {
                format!("{} / {}", category.completed_count, category.required_count)
            };
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} / {} | {} |",
                category.name,
                category.status,
                courses,
                category.completed_credits,
                category.required_credits,
                category.in_progress_credits
            );
        }

        table
    }

    fn term_table(ctx: &ReportContext<'_>) -> String {
        let mut table = String::new();
        let _ = writeln!(table, "| Term | Courses | Credits | GPA |");
        let _ = writeln!(table, "|---|---|---|---|");

        for term in ctx.plan.terms() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.2} |",
                ReportContext::term_label(term),
                term.course_count(),
                term.total_credits(),
                gpa::term_gpa(term)
            );
        }

        table
    }

    fn overload_notes(ctx: &ReportContext<'_>) -> String {
        let mut notes = String::new();
        for term in ctx.plan.overloaded_terms() {
            let _ = writeln!(
                notes,
                "\n> Warning: {} carries {} credits, above its {}-credit cap.",
                ReportContext::term_label(term),
                term.total_credits(),
                term.max_credits
            );
        }
        notes
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}
