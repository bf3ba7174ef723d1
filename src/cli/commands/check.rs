//! Check command handler
//!
//! Validates adding one course to a plan and prints the verdict.

use buzzplan::config::Config;
use buzzplan::core::{
    loader::{load_catalog, load_plan},
    models::Season,
    validate::{check_addition_by_code, check_addition_in_term, AdditionVerdict},
};
use buzzplan::{error, info};
use std::path::Path;

/// Run the check command.
///
/// # Arguments
/// * `plan_file` - Path to the plan TOML file
/// * `course_code` - Candidate course code
/// * `catalog_file` - Path to the catalog TOML file
/// * `term` - Optional target term id ("2026-fall") for the overload advisory
/// * `config` - Loaded configuration
pub fn run(
    plan_file: &Path,
    course_code: &str,
    catalog_file: &Path,
    term: Option<&str>,
    config: &Config,
) {
    if let Err(err) = check_single(plan_file, course_code, catalog_file, term, config) {
        error!("Check failed for {course_code}: {err}");
        eprintln!("{err}");
    }
}

fn check_single(
    plan_file: &Path,
    course_code: &str,
    catalog_file: &Path,
    term: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(catalog_file)
        .map_err(|e| format!("✗ Failed to load catalog {}: {e}", catalog_file.display()))?;
    let plan = load_plan(plan_file, &catalog, config.planning.max_term_credits)
        .map_err(|e| format!("✗ Failed to load plan {}: {e}", plan_file.display()))?;

    info!(
        "Plan loaded: {} ({} courses across {} terms)",
        plan.name,
        plan.course_count(),
        plan.terms().len()
    );

    let target = term.map(parse_term_id).transpose()?;
    if let Some((year, season)) = target {
        if plan.get_term(year, season).is_none() {
            return Err(format!("✗ Term {year}-{season} is not in the plan"));
        }
    }

    let verdict = catalog.get(course_code).map_or_else(
        || check_addition_by_code(course_code, &catalog, &plan),
        |course| check_addition_in_term(course, &plan, target),
    );

    print_verdict(course_code, &verdict);
    Ok(())
}

fn print_verdict(course_code: &str, verdict: &AdditionVerdict) {
    if verdict.can_add {
        if verdict.is_blocked() {
            println!("✓ {course_code} can be added (with warnings)");
        } else {
            println!("✓ {course_code} can be added");
        }
    } else {
        println!("✗ {course_code} cannot be added");
    }

    for missing in &verdict.missing_prerequisites {
        println!("  ✗ Missing prerequisite: {missing}");
    }
    for warning in &verdict.warnings {
        println!("  ! {warning}");
    }
}

/// Parse a term id of the form "2026-fall"
fn parse_term_id(id: &str) -> Result<(u16, Season), String> {
    let (year_str, season_str) = id
        .split_once('-')
        .ok_or_else(|| format!("✗ Invalid term id '{id}'; expected e.g. 2026-fall"))?;
    let year = year_str
        .parse::<u16>()
        .map_err(|_| format!("✗ Invalid year in term id '{id}'"))?;
    let season = season_str
        .parse::<Season>()
        .map_err(|_| format!("✗ Invalid season in term id '{id}'"))?;
    Ok((year, season))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_term_ids() {
        assert_eq!(parse_term_id("2026-fall"), Ok((2026, Season::Fall)));
        assert_eq!(parse_term_id("2025-spring"), Ok((2025, Season::Spring)));
    }

    #[test]
    fn rejects_malformed_term_ids() {
        assert!(parse_term_id("fall-2026").is_err());
        assert!(parse_term_id("2026").is_err());
        assert!(parse_term_id("2026-winter").is_err());
    }
}
