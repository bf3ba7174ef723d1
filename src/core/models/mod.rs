//! Data models for `BuzzPlan`

pub mod catalog;
pub mod course;
pub mod grade;
pub mod plan;
pub mod program;
pub mod requisite;
pub mod term;

pub use catalog::Catalog;
pub use course::Course;
pub use grade::Grade;
pub use plan::PlanState;
pub use program::{CategoryRule, DegreeProgram, RequirementCategory, Threshold};
pub use requisite::Requisite;
pub use term::{CourseStatus, PlannedCourse, Season, Term};
