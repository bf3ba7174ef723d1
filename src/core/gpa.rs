//! GPA computation at term and cumulative granularity
//!
//! Only completed entries with a known grade and positive credits enter the
//! aggregate. Ungraded or zero-credit entries are skipped entirely — never
//! counted as an F — so in-progress courses sharing a collection with
//! completed ones cannot distort the result.

use crate::core::models::{PlanState, PlannedCourse, Term};

/// Round to 2 decimal places using standard (half-up) rounding
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted grade-point aggregate over a sequence of entries
///
/// # Returns
/// `(quality_points, credit_hours)` over the included entries
fn aggregate<'a>(entries: impl Iterator<Item = &'a PlannedCourse>) -> (f64, u32) {
    let mut quality_points = 0.0;
    let mut credit_hours = 0u32;

    for entry in entries {
        if !entry.status.is_completed() || entry.credits == 0 {
            continue;
        }
        let Some(grade) = entry.grade else {
            continue;
        };
        quality_points += grade.points() * f64::from(entry.credits);
        credit_hours += entry.credits;
    }

    (quality_points, credit_hours)
}

fn gpa_from(quality_points: f64, credit_hours: u32) -> f64 {
    if credit_hours == 0 {
        return 0.0;
    }
    round2(quality_points / f64::from(credit_hours))
}

/// Compute the GPA for a single term
///
/// # Returns
/// The term GPA rounded to 2 decimal places; exactly `0.0` when no entry
/// contributes credits.
#[must_use]
pub fn term_gpa(term: &Term) -> f64 {
    let (points, credits) = aggregate(term.courses().iter());
    gpa_from(points, credits)
}

/// Compute the cumulative GPA across every term of a plan
///
/// # Returns
/// The cumulative GPA rounded to 2 decimal places; exactly `0.0` when no
/// entry contributes credits.
#[must_use]
pub fn cumulative_gpa(plan: &PlanState) -> f64 {
    let (points, credits) = aggregate(plan.all_courses());
    gpa_from(points, credits)
}
