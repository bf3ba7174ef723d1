//! TOML loading for catalog, degree-program, and plan files
//!
//! Data-quality defects (duplicate codes, a completed course missing its
//! grade, credits for a course the catalog does not know) are logged and
//! skipped or defaulted conservatively — a bad record never aborts the load.

use crate::core::models::{
    Catalog, Course, CourseStatus, DegreeProgram, Grade, PlanState, PlannedCourse,
    RequirementCategory, Season,
};
use crate::warn;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "course")]
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct ProgramFile {
    id: String,
    name: String,
    #[serde(default, rename = "category")]
    categories: Vec<RequirementCategory>,
}

#[derive(Debug, Deserialize)]
struct PlanFile {
    name: String,
    program: String,
    #[serde(default, rename = "term")]
    terms: Vec<TermFile>,
}

#[derive(Debug, Deserialize)]
struct TermFile {
    year: u16,
    season: Season,
    max_credits: Option<u32>,
    #[serde(default, rename = "course")]
    courses: Vec<PlanEntryFile>,
}

#[derive(Debug, Deserialize)]
struct PlanEntryFile {
    code: String,
    credits: Option<u32>,
    #[serde(default = "default_status")]
    status: CourseStatus,
    /// Kept as free text so an unrecognized grade degrades to "ungraded"
    /// instead of failing the whole file
    grade: Option<String>,
}

const fn default_status() -> CourseStatus {
    CourseStatus::Planned
}

/// Load a course catalog from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_toml(&content)
}

/// Parse a course catalog from TOML text
///
/// Duplicate course codes keep the first registration and log a warning.
///
/// # Errors
/// Returns an error if the TOML cannot be parsed.
pub fn parse_catalog_toml(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut catalog = Catalog::new();
    for course in file.courses {
        let code = course.code.clone();
        if !catalog.add_course(course) {
            warn!("Duplicate catalog entry for {code}; keeping the first");
        }
    }
    Ok(catalog)
}

/// Load a degree program from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<DegreeProgram, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_program_toml(&content)
}

/// Parse a degree program from TOML text
///
/// # Errors
/// Returns an error if the TOML cannot be parsed.
pub fn parse_program_toml(content: &str) -> Result<DegreeProgram, Box<dyn Error>> {
    let file: ProgramFile = toml::from_str(content)?;

    let mut program = DegreeProgram::new(file.id, file.name);
    for category in file.categories {
        program.add_category(category);
    }
    Ok(program)
}

/// Load a plan from a TOML file
///
/// # Arguments
/// * `path` - Path to the plan TOML file
/// * `catalog` - Catalog consulted for nominal credits when an entry omits
///   its own
/// * `default_max_credits` - Advisory credit cap for terms that omit theirs
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_plan<P: AsRef<Path>>(
    path: P,
    catalog: &Catalog,
    default_max_credits: u32,
) -> Result<PlanState, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_plan_toml(&content, catalog, default_max_credits)
}

/// Parse a plan from TOML text, rebuilding it through the edit operations
///
/// Duplicate terms and courses double-planned across terms are skipped with
/// a warning so the loaded plan always honors the plan-state invariants.
///
/// # Errors
/// Returns an error if the TOML cannot be parsed.
pub fn parse_plan_toml(
    content: &str,
    catalog: &Catalog,
    default_max_credits: u32,
) -> Result<PlanState, Box<dyn Error>> {
    let file: PlanFile = toml::from_str(content)?;

    let mut plan = PlanState::new(file.name, file.program);
    for term_file in file.terms {
        let max_credits = term_file.max_credits.unwrap_or(default_max_credits);
        if !plan.add_term(term_file.year, term_file.season, max_credits) {
            warn!(
                "Duplicate term {}-{} in plan; skipping its courses",
                term_file.year, term_file.season
            );
            continue;
        }

        for entry_file in term_file.courses {
            if let Some(entry) = build_entry(entry_file, catalog) {
                if plan.contains(&entry.code) {
                    warn!(
                        "{} is already planned in another term; skipping",
                        entry.code
                    );
                    continue;
                }
                plan.add_course(term_file.year, term_file.season, entry);
            }
        }
    }
    Ok(plan)
}

/// Build one planned-course entry, defaulting credits from the catalog
fn build_entry(file: PlanEntryFile, catalog: &Catalog) -> Option<PlannedCourse> {
    let code = file.code.trim().to_string();
    if code.is_empty() {
        warn!("Plan entry with blank course code; skipping");
        return None;
    }

    let credits = file.credits.or_else(|| catalog.get(&code).map(|c| c.credits));
    let credits = credits.unwrap_or_else(|| {
        warn!("{code} is not in the catalog and declares no credits; assuming 0");
        0
    });

    let grade = file.grade.as_deref().and_then(|raw| match raw.parse::<Grade>() {
        Ok(grade) => Some(grade),
        Err(_) => {
            warn!("{code} has unrecognized grade '{raw}'; treating it as ungraded");
            None
        }
    });
    let grade = match (file.status, grade) {
        (CourseStatus::Completed, None) => {
            warn!("{code} is completed but has no grade; it will not count toward GPA");
            None
        }
        (CourseStatus::Completed, grade) => grade,
        (_, Some(_)) => {
            warn!("{code} carries a grade but is not completed; ignoring the grade");
            None
        }
        (_, None) => None,
    };

    Some(PlannedCourse {
        code,
        credits,
        status: file.status,
        grade,
    })
}
