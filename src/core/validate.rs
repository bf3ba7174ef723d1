//! Prerequisite validation for plan additions
//!
//! Decides whether a candidate course may be added to a plan given the
//! student's completed and in-flight history. Data defects (blank codes,
//! empty groups, missing catalog entries) degrade to the most conservative
//! verdict instead of failing: blocking a planning session on bad catalog
//! data is worse than an under-confident answer.

use crate::core::models::{Catalog, Course, Grade, PlanState, Requisite, Season};
use std::collections::{HashMap, HashSet};

/// Validation verdict for adding one candidate course to a plan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdditionVerdict {
    /// Whether the addition may commit
    pub can_add: bool,
    /// Human-readable unmet requirement descriptions, in evaluation order
    pub missing_prerequisites: Vec<String>,
    /// Advisory messages (pending prerequisites, corequisites, overload)
    pub warnings: Vec<String>,
}

impl AdditionVerdict {
    /// Whether the UI should flag this addition
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.missing_prerequisites.is_empty() || !self.warnings.is_empty()
    }

    const fn allowed() -> Self {
        Self {
            can_add: true,
            missing_prerequisites: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Evaluation state of one requisite subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReqState {
    /// Satisfied by completed courses
    Met,
    /// Satisfiable once in-flight courses complete
    Pending,
    /// Not satisfiable from the current plan
    Unmet,
}

/// Outcome of evaluating one requisite subtree, with accumulated messages
struct EvalOutcome {
    state: ReqState,
    /// Missing-requirement descriptions (populated when `state` is `Unmet`)
    missing: Vec<String>,
    /// Codes satisfying the subtree only once completed (when `Pending`)
    pending: Vec<String>,
}

impl EvalOutcome {
    const fn met() -> Self {
        Self {
            state: ReqState::Met,
            missing: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn unmet(description: String) -> Self {
        Self {
            state: ReqState::Unmet,
            missing: vec![description],
            pending: Vec::new(),
        }
    }

    fn pending(code: String) -> Self {
        Self {
            state: ReqState::Pending,
            missing: Vec::new(),
            pending: vec![code],
        }
    }
}

/// Snapshot of the plan partitioned the way the resolver reads it
struct PlanView {
    completed: HashSet<String>,
    grades: HashMap<String, Grade>,
    in_flight: HashSet<String>,
}

impl PlanView {
    fn of(plan: &PlanState) -> Self {
        Self {
            completed: plan.completed_codes(),
            grades: plan.completed_grades(),
            in_flight: plan.in_flight_codes(),
        }
    }
}

/// Evaluate a requisite subtree against the partitioned plan
fn evaluate(req: &Requisite, view: &PlanView) -> EvalOutcome {
    match req {
        Requisite::Course { code, min_grade } => evaluate_leaf(code, *min_grade, view),
        Requisite::All { of } => evaluate_all(of, view),
        Requisite::Any { of } => evaluate_any(of, view),
    }
}

fn evaluate_leaf(code: &str, min_grade: Option<Grade>, view: &PlanView) -> EvalOutcome {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return EvalOutcome::unmet(Requisite::leaf_label(code, min_grade));
    }

    if view.completed.contains(trimmed) {
        return match min_grade {
            None => EvalOutcome::met(),
            Some(min) => match view.grades.get(trimmed) {
                Some(grade) if grade.at_least(min) => EvalOutcome::met(),
                // Below the minimum, or completed without a recorded grade
                _ => EvalOutcome::unmet(Requisite::leaf_label(trimmed, Some(min))),
            },
        };
    }

    if view.in_flight.contains(trimmed) {
        return EvalOutcome::pending(trimmed.to_string());
    }

    EvalOutcome::unmet(Requisite::leaf_label(trimmed, min_grade))
}

fn evaluate_all(children: &[Requisite], view: &PlanView) -> EvalOutcome {
    if children.is_empty() {
        return EvalOutcome::unmet("(empty requirement group)".to_string());
    }

    let mut missing = Vec::new();
    let mut pending = Vec::new();

    for child in children {
        let outcome = evaluate(child, view);
        match outcome.state {
            ReqState::Unmet => missing.extend(outcome.missing),
            ReqState::Pending => pending.extend(outcome.pending),
            ReqState::Met => {}
        }
    }

    if !missing.is_empty() {
        return EvalOutcome {
            state: ReqState::Unmet,
            missing,
            pending: Vec::new(),
        };
    }
    if !pending.is_empty() {
        return EvalOutcome {
            state: ReqState::Pending,
            missing: Vec::new(),
            pending,
        };
    }
    EvalOutcome::met()
}

fn evaluate_any(children: &[Requisite], view: &PlanView) -> EvalOutcome {
    if children.is_empty() {
        return EvalOutcome::unmet("(empty requirement group)".to_string());
    }

    let mut pending = Vec::new();
    for child in children {
        let outcome = evaluate(child, view);
        match outcome.state {
            ReqState::Met => return EvalOutcome::met(),
            ReqState::Pending => pending.extend(outcome.pending),
            ReqState::Unmet => {}
        }
    }

    if !pending.is_empty() {
        return EvalOutcome {
            state: ReqState::Pending,
            missing: Vec::new(),
            pending,
        };
    }

    // Report the group as one item rather than each leaf, to avoid implying
    // that all of them are required
    let mut codes = Vec::new();
    for child in children {
        child.collect_leaf_codes(&mut codes);
    }
    if codes.is_empty() {
        return EvalOutcome::unmet("(empty requirement group)".to_string());
    }
    EvalOutcome::unmet(format!("One of: {}", codes.join(", ")))
}

/// A course may carry multiple independent requirement groups; a top-level
/// AND's children are evaluated as such.
fn top_level_groups(req: &Requisite) -> Vec<&Requisite> {
    match req {
        Requisite::All { of } if !of.is_empty() => of.iter().collect(),
        _ => vec![req],
    }
}

/// Presence-only corequisite check: a leaf holds when the course is planned
/// anywhere in the plan or completed. Minimum grades are not examined —
/// corequisite outcomes are advisory, never blocking.
fn coreq_satisfied(req: &Requisite, available: &HashSet<String>) -> bool {
    match req {
        Requisite::Course { code, .. } => available.contains(code.trim()),
        Requisite::All { of } => !of.is_empty() && of.iter().all(|c| coreq_satisfied(c, available)),
        Requisite::Any { of } => of.iter().any(|c| coreq_satisfied(c, available)),
    }
}

fn dedup_preserving_order(codes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    codes
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

/// Validate adding a candidate course to the plan
///
/// # Returns
/// An [`AdditionVerdict`]: `can_add` is false only when a prerequisite is
/// missing outright (or the course is already planned); prerequisites that
/// are merely in flight produce a warning, since taking the candidate after
/// them is the student's declared intent.
#[must_use]
pub fn check_addition(course: &Course, plan: &PlanState) -> AdditionVerdict {
    check_addition_in_term(course, plan, None)
}

/// Validate adding a candidate course to a specific term of the plan
///
/// Behaves like [`check_addition`] and additionally raises an advisory
/// warning when the target term would exceed its credit cap. An unknown
/// target term contributes nothing (term existence is the caller's concern).
#[must_use]
pub fn check_addition_in_term(
    course: &Course,
    plan: &PlanState,
    target: Option<(u16, Season)>,
) -> AdditionVerdict {
    if plan.contains(&course.code) {
        return AdditionVerdict {
            can_add: false,
            missing_prerequisites: Vec::new(),
            warnings: vec!["Course is already planned".to_string()],
        };
    }

    let view = PlanView::of(plan);
    let mut verdict = AdditionVerdict::allowed();

    if let Some(prereq) = &course.prerequisites {
        let mut pending = Vec::new();
        for group in top_level_groups(prereq) {
            let outcome = evaluate(group, &view);
            match outcome.state {
                ReqState::Unmet => verdict.missing_prerequisites.extend(outcome.missing),
                ReqState::Pending => pending.extend(outcome.pending),
                ReqState::Met => {}
            }
        }
        let pending = dedup_preserving_order(pending);
        if !pending.is_empty() {
            verdict.warnings.push(format!(
                "Prerequisites planned but not completed: {}",
                pending.join(", ")
            ));
        }
    }

    if let Some(coreq) = &course.corequisites {
        let available: HashSet<String> = view.completed.union(&view.in_flight).cloned().collect();
        if !coreq_satisfied(coreq, &available) {
            verdict
                .warnings
                .push(format!("Corequisite not satisfied: {}", coreq.summary()));
        }
    }

    if let Some((year, season)) = target {
        if let Some(term) = plan.get_term(year, season) {
            if term.total_credits() + course.credits > term.max_credits {
                verdict.warnings.push(format!(
                    "Term {} exceeds {} credits",
                    term.id(),
                    term.max_credits
                ));
            }
        }
    }

    verdict.can_add = verdict.missing_prerequisites.is_empty();
    verdict
}

/// Validate an addition by course code, consulting the catalog
///
/// A catalog miss is treated as "prerequisite data unavailable" and the
/// verdict degrades to conservatively unsatisfied.
#[must_use]
pub fn check_addition_by_code(code: &str, catalog: &Catalog, plan: &PlanState) -> AdditionVerdict {
    if plan.contains(code) {
        return AdditionVerdict {
            can_add: false,
            missing_prerequisites: Vec::new(),
            warnings: vec!["Course is already planned".to_string()],
        };
    }
    catalog.get(code).map_or_else(
        || AdditionVerdict {
            can_add: false,
            missing_prerequisites: vec![format!("Prerequisite data unavailable for {code}")],
            warnings: Vec::new(),
        },
        |course| check_addition(course, plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PlannedCourse;

    fn plan_with(entries: Vec<PlannedCourse>) -> PlanState {
        let mut plan = PlanState::new("Test".to_string(), "BSCS".to_string());
        plan.add_term(2025, Season::Fall, 18);
        for entry in entries {
            plan.add_course(2025, Season::Fall, entry);
        }
        plan
    }

    #[test]
    fn no_prerequisites_is_addable() {
        let course = Course::new("CS 1301", "Introduction to Computing", 3);
        let verdict = check_addition(&course, &plan_with(Vec::new()));

        assert!(verdict.can_add);
        assert!(!verdict.is_blocked());
    }

    #[test]
    fn and_group_all_completed_is_addable() {
        let course = Course::new("CS 1332", "Data Structures and Algorithms", 3)
            .with_prerequisites(Requisite::all(vec![
                Requisite::course("CS 1301"),
                Requisite::course("CS 1331"),
            ]));
        let plan = plan_with(vec![
            PlannedCourse::completed("CS 1301", 3, Grade::A),
            PlannedCourse::completed("CS 1331", 3, Grade::B),
        ]);

        let verdict = check_addition(&course, &plan);
        assert!(verdict.can_add);
        assert!(verdict.missing_prerequisites.is_empty());
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn pending_prerequisite_warns_but_allows() {
        let course = Course::new("CS 1332", "Data Structures and Algorithms", 3)
            .with_prerequisites(Requisite::all(vec![
                Requisite::course("CS 1301"),
                Requisite::course("CS 1331"),
            ]));
        let plan = plan_with(vec![
            PlannedCourse::completed("CS 1301", 3, Grade::A),
            PlannedCourse::new("CS 1331", 3),
        ]);

        let verdict = check_addition(&course, &plan);
        assert!(verdict.can_add);
        assert!(verdict.missing_prerequisites.is_empty());
        assert_eq!(
            verdict.warnings,
            vec!["Prerequisites planned but not completed: CS 1331"]
        );
        assert!(verdict.is_blocked());
    }

    #[test]
    fn unmet_and_group_reports_each_missing_leaf() {
        let course = Course::new("CS 1332", "Data Structures and Algorithms", 3)
            .with_prerequisites(Requisite::all(vec![
                Requisite::course("CS 1301"),
                Requisite::course("CS 1331"),
            ]));

        let verdict = check_addition(&course, &plan_with(Vec::new()));
        assert!(!verdict.can_add);
        assert_eq!(verdict.missing_prerequisites, vec!["CS 1301", "CS 1331"]);
    }

    #[test]
    fn or_group_reports_single_one_of_entry() {
        let course =
            Course::new("MATH 2551", "Multivariable Calculus", 4).with_prerequisites(
                Requisite::any(vec![
                    Requisite::course("MATH 1552"),
                    Requisite::course("MATH 1555"),
                ]),
            );

        let verdict = check_addition(&course, &plan_with(Vec::new()));
        assert!(!verdict.can_add);
        assert_eq!(
            verdict.missing_prerequisites,
            vec!["One of: MATH 1552, MATH 1555"]
        );
    }

    #[test]
    fn or_group_pending_member_warns() {
        let course =
            Course::new("MATH 2551", "Multivariable Calculus", 4).with_prerequisites(
                Requisite::any(vec![
                    Requisite::course("MATH 1552"),
                    Requisite::course("MATH 1555"),
                ]),
            );
        let plan = plan_with(vec![PlannedCourse::new("MATH 1552", 4)]);

        let verdict = check_addition(&course, &plan);
        assert!(verdict.can_add);
        assert_eq!(
            verdict.warnings,
            vec!["Prerequisites planned but not completed: MATH 1552"]
        );
    }

    #[test]
    fn already_planned_course_is_blocked() {
        let course = Course::new("CS 1331", "Object-Oriented Programming", 3);
        let plan = plan_with(vec![PlannedCourse::new("CS 1331", 3)]);

        let verdict = check_addition(&course, &plan);
        assert!(!verdict.can_add);
        assert!(verdict.missing_prerequisites.is_empty());
        assert_eq!(verdict.warnings, vec!["Course is already planned"]);
        assert!(verdict.is_blocked());
    }

    #[test]
    fn min_grade_below_threshold_blocks() {
        let course = Course::new("CS 2110", "Computer Organization", 4)
            .with_prerequisites(Requisite::course_with_min("CS 1331", Grade::C));
        let plan = plan_with(vec![PlannedCourse::completed("CS 1331", 3, Grade::D)]);

        let verdict = check_addition(&course, &plan);
        assert!(!verdict.can_add);
        assert_eq!(
            verdict.missing_prerequisites,
            vec!["CS 1331 (minimum grade C)"]
        );
    }

    #[test]
    fn min_grade_met_is_addable() {
        let course = Course::new("CS 2110", "Computer Organization", 4)
            .with_prerequisites(Requisite::course_with_min("CS 1331", Grade::C));
        let plan = plan_with(vec![PlannedCourse::completed("CS 1331", 3, Grade::C)]);

        assert!(check_addition(&course, &plan).can_add);
    }

    #[test]
    fn empty_group_degrades_to_unmet() {
        let course = Course::new("CS 4999", "Broken Catalog Entry", 3)
            .with_prerequisites(Requisite::all(Vec::new()));

        let verdict = check_addition(&course, &plan_with(Vec::new()));
        assert!(!verdict.can_add);
        assert_eq!(
            verdict.missing_prerequisites,
            vec!["(empty requirement group)"]
        );
    }

    #[test]
    fn blank_leaf_code_degrades_to_unmet() {
        let course =
            Course::new("CS 4998", "Broken Catalog Entry", 3).with_prerequisites(Requisite::all(
                vec![Requisite::course(""), Requisite::course("CS 1301")],
            ));
        let plan = plan_with(vec![PlannedCourse::completed("CS 1301", 3, Grade::A)]);

        let verdict = check_addition(&course, &plan);
        assert!(!verdict.can_add);
        assert_eq!(verdict.missing_prerequisites, vec!["(unspecified course)"]);
    }

    #[test]
    fn independent_groups_union_missing_lists() {
        // Top-level AND children are independent requirement groups
        let course = Course::new("CS 3510", "Design and Analysis of Algorithms", 3)
            .with_prerequisites(Requisite::all(vec![
                Requisite::any(vec![
                    Requisite::course("CS 1332"),
                    Requisite::course("CS 1372"),
                ]),
                Requisite::course("MATH 3012"),
            ]));

        let verdict = check_addition(&course, &plan_with(Vec::new()));
        assert_eq!(
            verdict.missing_prerequisites,
            vec!["One of: CS 1332, CS 1372", "MATH 3012"]
        );
    }

    #[test]
    fn coreq_planned_anywhere_passes() {
        let course = Course::new("PHYS 2211", "Introductory Physics I", 4)
            .with_corequisites(Requisite::course("MATH 1551"));
        let plan = plan_with(vec![PlannedCourse::new("MATH 1551", 2)]);

        let verdict = check_addition(&course, &plan);
        assert!(verdict.can_add);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn coreq_missing_warns_without_blocking() {
        let course = Course::new("PHYS 2211", "Introductory Physics I", 4)
            .with_corequisites(Requisite::course("MATH 1551"));

        let verdict = check_addition(&course, &plan_with(Vec::new()));
        assert!(verdict.can_add);
        assert_eq!(
            verdict.warnings,
            vec!["Corequisite not satisfied: MATH 1551"]
        );
        assert!(verdict.is_blocked());
    }

    #[test]
    fn overloaded_target_term_warns() {
        let course = Course::new("CS 1331", "Object-Oriented Programming", 3);
        let mut plan = PlanState::new("Test".to_string(), "BSCS".to_string());
        plan.add_term(2025, Season::Fall, 4);
        plan.add_course(2025, Season::Fall, PlannedCourse::new("MATH 1551", 2));

        let verdict = check_addition_in_term(&course, &plan, Some((2025, Season::Fall)));
        assert!(verdict.can_add);
        assert_eq!(verdict.warnings, vec!["Term 2025-fall exceeds 4 credits"]);
    }

    #[test]
    fn catalog_miss_degrades_conservatively() {
        let catalog = Catalog::new();
        let verdict = check_addition_by_code("CS 1331", &catalog, &plan_with(Vec::new()));

        assert!(!verdict.can_add);
        assert_eq!(
            verdict.missing_prerequisites,
            vec!["Prerequisite data unavailable for CS 1331"]
        );
    }
}
