//! In-memory course catalog

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Course catalog indexed by course code
///
/// This is the engine-facing face of the external catalog collaborator: a
/// lookup miss means "prerequisite data unavailable" and callers degrade to
/// the most conservative outcome instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses indexed by code
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: HashMap::new(),
        }
    }

    /// Add a course to the catalog (fails if the code already exists)
    ///
    /// # Arguments
    /// * `course` - The course to add
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with the same code
    /// already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.contains_key(&course.code) {
            return false;
        }
        self.courses.insert(course.code.clone(), course);
        true
    }

    /// Look up a course by code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Check whether a course code exists in the catalog
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Get the number of courses in the catalog
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Check whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All course codes, sorted for deterministic output
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.courses.keys().cloned().collect();
        codes.sort();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.course_count(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_and_get_course() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_course(Course::new("CS 1301", "Introduction to Computing", 3)));

        let course = catalog.get("CS 1301").expect("course exists");
        assert_eq!(course.title, "Introduction to Computing");
        assert!(catalog.contains("CS 1301"));
        assert!(!catalog.contains("CS 9999"));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_course(Course::new("CS 1301", "Introduction to Computing", 3)));
        assert!(!catalog.add_course(Course::new("CS 1301", "Different Title", 4)));

        assert_eq!(catalog.course_count(), 1);
        assert_eq!(
            catalog.get("CS 1301").map(|c| c.credits),
            Some(3),
            "first registration wins"
        );
    }

    #[test]
    fn test_codes_sorted() {
        let mut catalog = Catalog::new();
        catalog.add_course(Course::new("MATH 1551", "Differential Calculus", 2));
        catalog.add_course(Course::new("CS 1301", "Introduction to Computing", 3));

        assert_eq!(catalog.codes(), vec!["CS 1301", "MATH 1551"]);
    }
}
