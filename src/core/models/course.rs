//! Catalog course record

use super::Requisite;
use serde::{Deserialize, Serialize};

/// Represents one catalog course as referenced from a plan
///
/// Immutable once loaded from the catalog for the duration of a planning
/// session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within the catalog (e.g., "CS 1331")
    pub code: String,

    /// Course title (e.g., "Introduction to Object-Oriented Programming")
    pub title: String,

    /// Nominal credit hours
    pub credits: u32,

    /// Prerequisite expression, if the course has prerequisites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Requisite>,

    /// Corequisite expression, if the course has corequisites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corequisites: Option<Requisite>,
}

impl Course {
    /// Create a new course with no requisites
    ///
    /// # Arguments
    /// * `code` - Course code (e.g., "CS 1331")
    /// * `title` - Full course title
    /// * `credits` - Nominal credit hours
    #[must_use]
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            prerequisites: None,
            corequisites: None,
        }
    }

    /// Attach a prerequisite expression
    #[must_use]
    pub fn with_prerequisites(mut self, requisite: Requisite) -> Self {
        self.prerequisites = Some(requisite);
        self
    }

    /// Attach a corequisite expression
    #[must_use]
    pub fn with_corequisites(mut self, requisite: Requisite) -> Self {
        self.corequisites = Some(requisite);
        self
    }
}
