//! Prerequisite and corequisite expression trees
//!
//! A requisite is either a single course leaf (optionally with a minimum
//! letter grade) or an AND/OR group over child requisites. Expressions
//! reference other course codes only; evaluation walks the finite tree and
//! never chases plan state recursively.

use super::Grade;
use serde::{Deserialize, Serialize};

/// One node of a requisite expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Requisite {
    /// A single required course, optionally with a minimum letter grade
    Course {
        /// Required course code (e.g., "CS 1331")
        code: String,
        /// Minimum letter grade, if the requirement specifies one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_grade: Option<Grade>,
    },
    /// Every child requirement must hold
    All {
        /// Child requirements (empty groups evaluate as unmet)
        of: Vec<Requisite>,
    },
    /// At least one child requirement must hold
    Any {
        /// Child requirements (empty groups evaluate as unmet)
        of: Vec<Requisite>,
    },
}

impl Requisite {
    /// Create a course leaf with no minimum grade
    #[must_use]
    pub fn course(code: impl Into<String>) -> Self {
        Self::Course {
            code: code.into(),
            min_grade: None,
        }
    }

    /// Create a course leaf with a minimum grade
    #[must_use]
    pub fn course_with_min(code: impl Into<String>, min_grade: Grade) -> Self {
        Self::Course {
            code: code.into(),
            min_grade: Some(min_grade),
        }
    }

    /// Create an AND group
    #[must_use]
    pub const fn all(of: Vec<Self>) -> Self {
        Self::All { of }
    }

    /// Create an OR group
    #[must_use]
    pub const fn any(of: Vec<Self>) -> Self {
        Self::Any { of }
    }

    /// Collect every descendant leaf course code into `out`, in tree order
    pub fn collect_leaf_codes(&self, out: &mut Vec<String>) {
        match self {
            Self::Course { code, .. } => {
                if !code.trim().is_empty() {
                    out.push(code.clone());
                }
            }
            Self::All { of } | Self::Any { of } => {
                for child in of {
                    child.collect_leaf_codes(out);
                }
            }
        }
    }

    /// Human-readable label for a leaf requirement
    ///
    /// # Returns
    /// `"CS 1331"` or `"CS 1331 (minimum grade C)"`; falls back to a
    /// placeholder when the code is blank.
    #[must_use]
    pub fn leaf_label(code: &str, min_grade: Option<Grade>) -> String {
        let code = code.trim();
        if code.is_empty() {
            return "(unspecified course)".to_string();
        }
        min_grade.map_or_else(
            || code.to_string(),
            |g| format!("{code} (minimum grade {g})"),
        )
    }

    /// Short human-readable summary of this requirement subtree
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Course { code, min_grade } => Self::leaf_label(code, *min_grade),
            Self::All { of } => {
                if of.is_empty() {
                    return "(empty requirement group)".to_string();
                }
                let parts: Vec<String> = of.iter().map(Self::summary).collect();
                parts.join(" and ")
            }
            Self::Any { of } => {
                let mut codes = Vec::new();
                self.collect_leaf_codes(&mut codes);
                if codes.is_empty() {
                    "(empty requirement group)".to_string()
                } else {
                    format!("one of {}", codes.join(", "))
                }
            }
        }
    }
}
