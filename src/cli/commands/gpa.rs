//! GPA command handler
//!
//! Prints per-term and cumulative GPA for a plan.

use buzzplan::config::Config;
use buzzplan::core::{
    gpa,
    loader::{load_catalog, load_plan},
    models::Catalog,
};
use buzzplan::error;
use std::path::Path;

/// Run the gpa command.
///
/// # Arguments
/// * `plan_file` - Path to the plan TOML file
/// * `catalog_file` - Optional catalog used for nominal credits
/// * `config` - Loaded configuration
pub fn run(plan_file: &Path, catalog_file: Option<&Path>, config: &Config) {
    if let Err(err) = gpa_single(plan_file, catalog_file, config) {
        error!("GPA computation failed for {}: {err}", plan_file.display());
        eprintln!("{err}");
    }
}

fn gpa_single(
    plan_file: &Path,
    catalog_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let catalog = match catalog_file {
        Some(path) => load_catalog(path)
            .map_err(|e| format!("✗ Failed to load catalog {}: {e}", path.display()))?,
        None => Catalog::new(),
    };
    let plan = load_plan(plan_file, &catalog, config.planning.max_term_credits)
        .map_err(|e| format!("✗ Failed to load plan {}: {e}", plan_file.display()))?;

    for term in plan.terms() {
        println!(
            "{} {}: {:.2} ({} credits planned)",
            term.season,
            term.year,
            gpa::term_gpa(term),
            term.total_credits()
        );
    }
    println!("Cumulative: {:.2}", gpa::cumulative_gpa(&plan));

    Ok(())
}
