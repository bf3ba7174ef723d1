//! Degree-requirement progress evaluation
//!
//! Walks a degree program's requirement categories against a plan and
//! reports per-category completion plus a credit-weighted overall
//! percentage. Credits are capped per category and never shared across
//! categories; a course listed in several option sets advances each of them
//! independently.

use crate::core::models::{Catalog, CategoryRule, DegreeProgram, PlanState, Threshold};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Completion status of one requirement category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    /// Every requirement of the category is met
    Satisfied,
    /// Some but not all requirements are met
    PartiallySatisfied,
    /// Nothing counts toward the category yet
    Unsatisfied,
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Satisfied => "satisfied",
            Self::PartiallySatisfied => "partially satisfied",
            Self::Unsatisfied => "unsatisfied",
        };
        write!(f, "{label}")
    }
}

/// Progress figures for one requirement category
///
/// `required_count` is 0 for credit-thresholded choose-N buckets, where a
/// course count is not part of the requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    /// Category name
    pub name: String,
    /// Completion status
    pub status: CategoryStatus,
    /// Completed courses counting toward the category (capped for choose-N)
    pub completed_count: usize,
    /// Courses the category requires
    pub required_count: usize,
    /// Credits counting toward the category, capped at the requirement
    pub completed_credits: u32,
    /// Credits the category requires
    pub required_credits: u32,
    /// Credits of in-flight (planned or in-progress) member courses
    pub in_progress_credits: u32,
}

impl CategoryProgress {
    /// Credits still needed to satisfy the category
    #[must_use]
    pub const fn remaining_credits(&self) -> u32 {
        self.required_credits.saturating_sub(self.completed_credits)
    }

    /// Courses still needed to satisfy the category
    #[must_use]
    pub const fn remaining_count(&self) -> usize {
        self.required_count.saturating_sub(self.completed_count)
    }
}

/// Progress of a whole degree program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramProgress {
    /// Program identifier the evaluation ran against
    pub program_id: String,
    /// Per-category progress, in program order
    pub categories: Vec<CategoryProgress>,
    /// Capped credits counting toward the program across all categories
    pub completed_credits: u32,
    /// Credits the program requires across all categories
    pub required_credits: u32,
    /// Credit-weighted completion percentage, 0-100
    pub overall_percent: u32,
}

/// Plan facts the evaluator reads: earned credits per completed course and
/// the in-flight credit figure per code
struct PlanFacts {
    completed: HashMap<String, u32>,
    in_flight: HashMap<String, u32>,
}

impl PlanFacts {
    fn of(plan: &PlanState) -> Self {
        let mut completed = HashMap::new();
        let mut in_flight = HashMap::new();
        for entry in plan.all_courses() {
            if entry.status.is_completed() {
                completed.insert(entry.code.clone(), entry.credits);
            } else {
                in_flight.insert(entry.code.clone(), entry.credits);
            }
        }
        Self {
            completed,
            in_flight,
        }
    }
}

/// Evaluate a plan against a degree program's requirement categories
///
/// Pure and idempotent: identical inputs yield identical output.
#[must_use]
pub fn evaluate_program(
    program: &DegreeProgram,
    plan: &PlanState,
    catalog: &Catalog,
) -> ProgramProgress {
    let facts = PlanFacts::of(plan);

    let categories: Vec<CategoryProgress> = program
        .categories
        .iter()
        .map(|category| match &category.rule {
            CategoryRule::FixedList { courses } => {
                evaluate_fixed_list(&category.name, courses, &facts, catalog)
            }
            CategoryRule::ChooseN { options, threshold } => {
                evaluate_choose_n(&category.name, options, *threshold, &facts, catalog)
            }
        })
        .collect();

    let completed_credits: u32 = categories.iter().map(|c| c.completed_credits).sum();
    let required_credits: u32 = categories.iter().map(|c| c.required_credits).sum();

    let overall_percent = if required_credits == 0 {
        0
    } else {
        let ratio = f64::from(completed_credits) / f64::from(required_credits);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (ratio * 100.0).round() as u32;
        percent
    };

    ProgramProgress {
        program_id: program.id.clone(),
        categories,
        completed_credits,
        required_credits,
        overall_percent,
    }
}

fn evaluate_fixed_list(
    name: &str,
    courses: &[String],
    facts: &PlanFacts,
    catalog: &Catalog,
) -> CategoryProgress {
    let mut completed_count = 0usize;
    let mut completed_credits = 0u32;
    let mut required_credits = 0u32;
    let mut in_progress_credits = 0u32;
    // Duplicate listings in defective category data must not double-count
    let mut seen = HashSet::new();

    for code in courses {
        if !seen.insert(code.as_str()) {
            continue;
        }
        // Unknown catalog codes contribute zero required credits (conservative)
        required_credits += catalog.get(code).map_or(0, |c| c.credits);

        if let Some(&credits) = facts.completed.get(code) {
            completed_count += 1;
            completed_credits += credits;
        } else if let Some(&credits) = facts.in_flight.get(code) {
            in_progress_credits += credits;
        }
    }

    let required_count = seen.len();
    let status = if completed_count == required_count {
        CategoryStatus::Satisfied
    } else if completed_count > 0 {
        CategoryStatus::PartiallySatisfied
    } else {
        CategoryStatus::Unsatisfied
    };

    CategoryProgress {
        name: name.to_string(),
        status,
        completed_count,
        required_count,
        completed_credits: completed_credits.min(required_credits),
        required_credits,
        in_progress_credits,
    }
}

fn evaluate_choose_n(
    name: &str,
    options: &[String],
    threshold: Threshold,
    facts: &PlanFacts,
    catalog: &Catalog,
) -> CategoryProgress {
    let mut seen = HashSet::new();
    let mut in_progress_credits = 0u32;
    let mut completed_members: Vec<(&str, u32)> = Vec::new();

    for code in options {
        if !seen.insert(code.as_str()) {
            continue;
        }
        if let Some(&credits) = facts.completed.get(code) {
            completed_members.push((code.as_str(), credits));
        } else if let Some(&credits) = facts.in_flight.get(code) {
            in_progress_credits += credits;
        }
    }

    match threshold {
        Threshold::Credits(required_credits) => {
            let raw: u32 = completed_members.iter().map(|(_, credits)| credits).sum();
            let status = if raw >= required_credits {
                CategoryStatus::Satisfied
            } else if raw > 0 {
                CategoryStatus::PartiallySatisfied
            } else {
                CategoryStatus::Unsatisfied
            };

            CategoryProgress {
                name: name.to_string(),
                status,
                completed_count: completed_members.len(),
                required_count: 0,
                completed_credits: raw.min(required_credits),
                required_credits,
                in_progress_credits,
            }
        }
        Threshold::Courses(required_count) => {
            let required_count = required_count as usize;
            // The credit denominator for a count-based bucket is the cheapest
            // way to satisfy it: the N smallest option credit values
            let mut option_credits: Vec<u32> = seen
                .iter()
                .filter_map(|code| catalog.get(code).map(|c| c.credits))
                .collect();
            option_credits.sort_unstable();
            let required_credits: u32 = option_credits.iter().take(required_count).sum();

            let counted = completed_members.len().min(required_count);
            let raw: u32 = completed_members
                .iter()
                .take(required_count)
                .map(|(_, credits)| credits)
                .sum();

            let status = if counted >= required_count {
                CategoryStatus::Satisfied
            } else if counted > 0 {
                CategoryStatus::PartiallySatisfied
            } else {
                CategoryStatus::Unsatisfied
            };

            CategoryProgress {
                name: name.to_string(),
                status,
                completed_count: counted,
                required_count,
                completed_credits: raw.min(required_credits),
                required_credits,
                in_progress_credits,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Course, Grade, PlannedCourse, RequirementCategory, Season,
    };

    fn math_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_course(Course::new("MATH 1551", "Differential Calculus", 3));
        catalog.add_course(Course::new("MATH 1552", "Integral Calculus", 3));
        catalog.add_course(Course::new("CS 1301", "Introduction to Computing", 3));
        catalog.add_course(Course::new("CS 3600", "Introduction to AI", 3));
        catalog.add_course(Course::new("CS 4641", "Machine Learning", 3));
        catalog.add_course(Course::new("CS 4650", "Natural Language", 3));
        catalog
    }

    fn plan_with(entries: Vec<PlannedCourse>) -> PlanState {
        let mut plan = PlanState::new("Test".to_string(), "BSCS".to_string());
        plan.add_term(2025, Season::Fall, 18);
        for entry in entries {
            plan.add_course(2025, Season::Fall, entry);
        }
        plan
    }

    fn fixed_list(name: &str, courses: &[&str]) -> RequirementCategory {
        RequirementCategory {
            name: name.to_string(),
            rule: CategoryRule::FixedList {
                courses: courses.iter().map(ToString::to_string).collect(),
            },
        }
    }

    fn choose_n(name: &str, options: &[&str], threshold: Threshold) -> RequirementCategory {
        RequirementCategory {
            name: name.to_string(),
            rule: CategoryRule::ChooseN {
                options: options.iter().map(ToString::to_string).collect(),
                threshold,
            },
        }
    }

    #[test]
    fn fixed_list_partially_satisfied_at_half() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Math Core", &["MATH 1551", "MATH 1552"]));

        let plan = plan_with(vec![PlannedCourse::completed("MATH 1551", 3, Grade::B)]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        let category = &progress.categories[0];
        assert_eq!(category.status, CategoryStatus::PartiallySatisfied);
        assert_eq!(category.completed_count, 1);
        assert_eq!(category.required_count, 2);
        assert_eq!(category.completed_credits, 3);
        assert_eq!(category.required_credits, 6);
        assert_eq!(progress.overall_percent, 50);
    }

    #[test]
    fn fixed_list_satisfied_when_all_completed() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Math Core", &["MATH 1551", "MATH 1552"]));

        let plan = plan_with(vec![
            PlannedCourse::completed("MATH 1551", 3, Grade::B),
            PlannedCourse::completed("MATH 1552", 3, Grade::A),
        ]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        assert_eq!(progress.categories[0].status, CategoryStatus::Satisfied);
        assert_eq!(progress.overall_percent, 100);
    }

    #[test]
    fn fixed_list_in_flight_counts_separately() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Math Core", &["MATH 1551", "MATH 1552"]));

        let plan = plan_with(vec![PlannedCourse::new("MATH 1551", 3)]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        let category = &progress.categories[0];
        assert_eq!(category.status, CategoryStatus::Unsatisfied);
        assert_eq!(category.completed_credits, 0);
        assert_eq!(category.in_progress_credits, 3);
    }

    #[test]
    fn choose_n_credits_caps_excess() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(choose_n(
            "Intelligence Thread",
            &["CS 3600", "CS 4641", "CS 4650"],
            Threshold::Credits(6),
        ));

        let plan = plan_with(vec![
            PlannedCourse::completed("CS 3600", 3, Grade::A),
            PlannedCourse::completed("CS 4641", 3, Grade::B),
            PlannedCourse::completed("CS 4650", 3, Grade::B),
        ]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        let category = &progress.categories[0];
        assert_eq!(category.status, CategoryStatus::Satisfied);
        assert_eq!(category.completed_credits, 6, "excess credits are capped");
        assert_eq!(progress.overall_percent, 100);
    }

    #[test]
    fn choose_n_courses_counts_members() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(choose_n(
            "Free Electives",
            &["CS 3600", "CS 4641", "CS 4650"],
            Threshold::Courses(2),
        ));

        let plan = plan_with(vec![PlannedCourse::completed("CS 3600", 3, Grade::C)]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        let category = &progress.categories[0];
        assert_eq!(category.status, CategoryStatus::PartiallySatisfied);
        assert_eq!(category.completed_count, 1);
        assert_eq!(category.required_count, 2);
        assert_eq!(category.required_credits, 6);
        assert_eq!(category.completed_credits, 3);
    }

    #[test]
    fn double_counting_across_categories_is_allowed() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(choose_n(
            "Intelligence Thread",
            &["CS 3600", "CS 4641"],
            Threshold::Credits(3),
        ));
        program.add_category(choose_n(
            "Free Electives",
            &["CS 3600", "CS 4650"],
            Threshold::Credits(3),
        ));

        let plan = plan_with(vec![PlannedCourse::completed("CS 3600", 3, Grade::A)]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        assert_eq!(progress.categories[0].completed_credits, 3);
        assert_eq!(progress.categories[1].completed_credits, 3);
        assert_eq!(progress.overall_percent, 100);
    }

    #[test]
    fn overall_percent_is_credit_weighted() {
        // A 3-credit category and a 27-credit category must not weigh equally
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Intro", &["CS 1301"]));
        program.add_category(choose_n(
            "Depth",
            &["CS 3600", "CS 4641", "CS 4650"],
            Threshold::Credits(27),
        ));

        let plan = plan_with(vec![PlannedCourse::completed("CS 1301", 3, Grade::A)]);
        let progress = evaluate_program(&program, &plan, &math_catalog());

        // 3 of 30 credits complete: 10%, not the 50% a category average gives
        assert_eq!(progress.overall_percent, 10);
    }

    #[test]
    fn unknown_catalog_codes_contribute_nothing() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Ghost", &["CS 9999"]));

        let plan = plan_with(Vec::new());
        let progress = evaluate_program(&program, &plan, &math_catalog());

        assert_eq!(progress.categories[0].required_credits, 0);
        assert_eq!(progress.overall_percent, 0);
    }

    #[test]
    fn empty_program_yields_zero_percent() {
        let program = DegreeProgram::new("BSCS", "BS Computer Science");
        let progress = evaluate_program(&program, &plan_with(Vec::new()), &math_catalog());

        assert_eq!(progress.overall_percent, 0);
        assert!(progress.categories.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(fixed_list("Math Core", &["MATH 1551", "MATH 1552"]));
        program.add_category(choose_n(
            "Intelligence Thread",
            &["CS 3600", "CS 4641"],
            Threshold::Credits(6),
        ));

        let plan = plan_with(vec![PlannedCourse::completed("MATH 1551", 3, Grade::B)]);
        let catalog = math_catalog();

        let first = evaluate_program(&program, &plan, &catalog);
        let second = evaluate_program(&program, &plan, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn adding_completed_member_never_decreases_credits() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        program.add_category(choose_n(
            "Intelligence Thread",
            &["CS 3600", "CS 4641", "CS 4650"],
            Threshold::Credits(9),
        ));
        let catalog = math_catalog();

        let mut plan = plan_with(vec![PlannedCourse::completed("CS 3600", 3, Grade::B)]);
        let before = evaluate_program(&program, &plan, &catalog).categories[0].completed_credits;

        plan.add_course(
            2025,
            Season::Fall,
            PlannedCourse::completed("CS 4641", 3, Grade::A),
        );
        let after = evaluate_program(&program, &plan, &catalog).categories[0].completed_credits;

        assert!(after >= before);
    }
}
