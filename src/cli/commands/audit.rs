//! Audit command handler
//!
//! Evaluates a plan against its degree program and prints per-category
//! progress, overall completion, and GPA. Optionally writes a Markdown
//! report.

use buzzplan::config::Config;
use buzzplan::core::{
    gpa,
    loader::{load_catalog, load_plan, load_program},
    progress::{evaluate_program, CategoryStatus, ProgramProgress},
    report::{MarkdownReporter, ReportContext},
};
use buzzplan::{error, info, verbose, warn};
use std::path::{Path, PathBuf};

/// Run the audit command.
///
/// # Arguments
/// * `plan_file` - Path to the plan TOML file
/// * `catalog_file` - Path to the catalog TOML file
/// * `program_file` - Path to the degree-program TOML file
/// * `report` - Whether to write a Markdown report
/// * `output` - Explicit report path; defaults into the configured reports
///   directory
/// * `config` - Loaded configuration
pub fn run(
    plan_file: &Path,
    catalog_file: &Path,
    program_file: &Path,
    report: bool,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = audit_single(plan_file, catalog_file, program_file, report, output, config) {
        error!("Audit failed for {}: {err}", plan_file.display());
        eprintln!("{err}");
    }
}

fn audit_single(
    plan_file: &Path,
    catalog_file: &Path,
    program_file: &Path,
    report: bool,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(catalog_file)
        .map_err(|e| format!("✗ Failed to load catalog {}: {e}", catalog_file.display()))?;
    let program = load_program(program_file)
        .map_err(|e| format!("✗ Failed to load program {}: {e}", program_file.display()))?;
    let plan = load_plan(plan_file, &catalog, config.planning.max_term_credits)
        .map_err(|e| format!("✗ Failed to load plan {}: {e}", plan_file.display()))?;

    info!("Auditing {} against {}", plan.name, program.name);
    if plan.program_id != program.id {
        warn!(
            "Plan targets program '{}' but '{}' was supplied",
            plan.program_id, program.id
        );
    }

    let progress = evaluate_program(&program, &plan, &catalog);
    print_summary(&plan.name, &program.name, &progress);

    println!("Cumulative GPA: {:.2}", gpa::cumulative_gpa(&plan));
    for term in plan.overloaded_terms() {
        println!(
            "! {} {} carries {} credits, above its {}-credit cap",
            term.season,
            term.year,
            term.total_credits(),
            term.max_credits
        );
    }

    if report {
        let ctx = ReportContext {
            plan: &plan,
            program: &program,
            catalog: &catalog,
            progress: &progress,
        };
        let report_path = resolve_report_path(plan_file, output, config)?;
        MarkdownReporter::new()
            .generate(&ctx, &report_path)
            .map_err(|e| format!("✗ Failed to write report {}: {e}", report_path.display()))?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

fn print_summary(plan_name: &str, program_name: &str, progress: &ProgramProgress) {
    println!("{plan_name} — {program_name}");
    println!(
        "Overall: {}% ({} / {} credits)",
        progress.overall_percent, progress.completed_credits, progress.required_credits
    );

    for category in &progress.categories {
        let glyph = match category.status {
            CategoryStatus::Satisfied => "✓",
            CategoryStatus::PartiallySatisfied => "~",
            CategoryStatus::Unsatisfied => "✗",
        };
        println!(
            "  {glyph} {}: {} ({} / {} credits)",
            category.name, category.status, category.completed_credits, category.required_credits
        );
        verbose!(
            "      in progress: {} credits, remaining: {} credits",
            category.in_progress_credits,
            category.remaining_credits()
        );
    }
}

/// Resolve the report output path: explicit `--output` wins, otherwise the
/// configured reports directory with `<plan-stem>-audit.md`.
fn resolve_report_path(
    plan_file: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
            }
        }
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir)
        .map_err(|e| format!("✗ Failed to create {}: {e}", reports_dir.display()))?;

    let stem = plan_file
        .file_stem()
        .map_or_else(|| "plan".to_string(), |s| s.to_string_lossy().to_string());
    Ok(reports_dir.join(format!("{stem}-audit.md")))
}
