//! Academic terms and planned course entries

use super::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic season within a year
///
/// Chronological rank follows the academic-year convention: Fall opens the
/// year, then Spring, then Summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Fall semester (rank 0)
    Fall,
    /// Spring semester (rank 1)
    Spring,
    /// Summer session (rank 2)
    Summer,
}

impl Season {
    /// Chronological rank within an academic year (Fall=0, Spring=1, Summer=2)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Fall => 0,
            Self::Spring => 1,
            Self::Summer => 2,
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            other => Err(format!("Unknown season: '{other}'")),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        };
        write!(f, "{name}")
    }
}

/// Status of a planned course entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Finished with a grade on record
    Completed,
    /// Currently being taken
    InProgress,
    /// Scheduled for a future term
    Planned,
}

impl CourseStatus {
    /// Whether this status counts as completed
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether this status counts as in flight (in progress or planned)
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InProgress | Self::Planned)
    }
}

/// One course assigned to one term
///
/// `credits` starts as the catalog course's nominal credits and may be
/// overridden with the credits actually earned when a grade is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedCourse {
    /// Course code (e.g., "CS 1331")
    pub code: String,
    /// Credit hours (nominal until completion, then earned)
    pub credits: u32,
    /// Completion status
    pub status: CourseStatus,
    /// Letter grade, set when the course is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl PlannedCourse {
    /// Create a new planned (future) course entry
    #[must_use]
    pub fn new(code: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            credits,
            status: CourseStatus::Planned,
            grade: None,
        }
    }

    /// Create an entry with an explicit status
    #[must_use]
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    /// Create a completed entry with a grade
    #[must_use]
    pub fn completed(code: impl Into<String>, credits: u32, grade: Grade) -> Self {
        Self {
            code: code.into(),
            credits,
            status: CourseStatus::Completed,
            grade: Some(grade),
        }
    }
}

/// One academic period in a student's plan, owning its course entries
///
/// Course codes are unique within a term. `max_credits` drives an advisory
/// overload signal only, never a hard error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Calendar year of the term
    pub year: u16,
    /// Season within the year
    pub season: Season,
    /// Advisory credit cap for the term
    pub max_credits: u32,
    /// Course entries assigned to this term
    courses: Vec<PlannedCourse>,
}

impl Term {
    /// Create a new empty term
    #[must_use]
    pub const fn new(year: u16, season: Season, max_credits: u32) -> Self {
        Self {
            year,
            season,
            max_credits,
            courses: Vec::new(),
        }
    }

    /// Stable identifier, e.g. `"2026-fall"`
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.year, self.season.to_string().to_lowercase())
    }

    /// Chronological sort key: `(year, season rank)`
    #[must_use]
    pub const fn sort_key(&self) -> (u16, u8) {
        (self.year, self.season.rank())
    }

    /// Add a course entry to the term
    ///
    /// # Returns
    /// `true` if the entry was added, `false` if the code is already planned
    /// in this term
    pub fn add_course(&mut self, entry: PlannedCourse) -> bool {
        if self.courses.iter().any(|c| c.code == entry.code) {
            return false;
        }
        self.courses.push(entry);
        true
    }

    /// Remove a course entry by code
    ///
    /// # Returns
    /// The removed entry, or `None` if the code was not in this term
    pub fn remove_course(&mut self, code: &str) -> Option<PlannedCourse> {
        let pos = self.courses.iter().position(|c| c.code == code)?;
        Some(self.courses.remove(pos))
    }

    /// Get a course entry by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&PlannedCourse> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Get a mutable course entry by code
    pub fn get_course_mut(&mut self, code: &str) -> Option<&mut PlannedCourse> {
        self.courses.iter_mut().find(|c| c.code == code)
    }

    /// Course entries assigned to this term
    #[must_use]
    pub fn courses(&self) -> &[PlannedCourse] {
        &self.courses
    }

    /// Number of course entries in this term
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Total credit hours assigned to this term, all statuses included
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Whether the term exceeds its advisory credit cap
    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        self.total_credits() > self.max_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_rank_order() {
        assert!(Season::Fall.rank() < Season::Spring.rank());
        assert!(Season::Spring.rank() < Season::Summer.rank());
        assert!(Season::Fall < Season::Spring);
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("fall".parse::<Season>(), Ok(Season::Fall));
        assert_eq!("Spring".parse::<Season>(), Ok(Season::Spring));
        assert!("winter".parse::<Season>().is_err());
    }

    #[test]
    fn test_term_id() {
        let term = Term::new(2026, Season::Fall, 18);
        assert_eq!(term.id(), "2026-fall");
    }

    #[test]
    fn test_add_course() {
        let mut term = Term::new(2026, Season::Fall, 18);
        assert!(term.add_course(PlannedCourse::new("CS 1301", 3)));
        assert!(term.add_course(PlannedCourse::new("MATH 1551", 2)));

        assert_eq!(term.course_count(), 2);
        assert_eq!(term.total_credits(), 5);
    }

    #[test]
    fn test_duplicate_code_within_term_rejected() {
        let mut term = Term::new(2026, Season::Fall, 18);
        assert!(term.add_course(PlannedCourse::new("CS 1301", 3)));
        assert!(!term.add_course(PlannedCourse::new("CS 1301", 3)));
        assert_eq!(term.course_count(), 1);
    }

    #[test]
    fn test_remove_course() {
        let mut term = Term::new(2026, Season::Fall, 18);
        term.add_course(PlannedCourse::new("CS 1301", 3));

        let removed = term.remove_course("CS 1301").expect("entry removed");
        assert_eq!(removed.code, "CS 1301");
        assert!(term.remove_course("CS 1301").is_none());
    }

    #[test]
    fn test_overload_signal() {
        let mut term = Term::new(2026, Season::Fall, 6);
        term.add_course(PlannedCourse::new("CS 1301", 3));
        term.add_course(PlannedCourse::new("MATH 1551", 2));
        assert!(!term.is_overloaded());

        term.add_course(PlannedCourse::new("ENGL 1101", 3));
        assert!(term.is_overloaded());
    }
}
