//! Degree programs and requirement categories

use serde::{Deserialize, Serialize};

/// Threshold for a choose-N requirement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Threshold {
    /// At least this many credits from the option set
    Credits(u32),
    /// At least this many courses from the option set
    Courses(u32),
}

/// Rule deciding when a requirement category is satisfied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CategoryRule {
    /// Every listed course code is required
    FixedList {
        /// Required course codes
        courses: Vec<String>,
    },
    /// Meet a credit or course-count threshold from an option set
    ChooseN {
        /// Eligible course codes
        options: Vec<String>,
        /// Required credit or course-count threshold
        threshold: Threshold,
    },
}

/// One named bucket of a degree program's requirement tree
///
/// Read-only reference data sourced from the degree-program collaborator;
/// the engine never mutates categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCategory {
    /// Category name (e.g., "Foundation", "Intelligence Thread")
    pub name: String,
    /// Satisfaction rule
    #[serde(flatten)]
    pub rule: CategoryRule,
}

/// A degree program: an ordered list of requirement categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeProgram {
    /// Program identifier (e.g., "BSCS")
    pub id: String,
    /// Program name (e.g., "BS Computer Science")
    pub name: String,
    /// Requirement categories in catalog order
    #[serde(default)]
    pub categories: Vec<RequirementCategory>,
}

impl DegreeProgram {
    /// Create a new program with no categories
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// Append a requirement category
    pub fn add_category(&mut self, category: RequirementCategory) {
        self.categories.push(category);
    }

    /// Number of requirement categories
    #[must_use]
    pub const fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_creation() {
        let mut program = DegreeProgram::new("BSCS", "BS Computer Science");
        assert_eq!(program.category_count(), 0);

        program.add_category(RequirementCategory {
            name: "Foundation".to_string(),
            rule: CategoryRule::FixedList {
                courses: vec!["CS 1301".to_string(), "CS 1331".to_string()],
            },
        });

        assert_eq!(program.category_count(), 1);
        assert_eq!(program.categories[0].name, "Foundation");
    }

    #[test]
    fn test_category_toml_fixed_list() {
        let toml_str = r#"
name = "Foundation"
kind = "fixed-list"
courses = ["CS 1301", "CS 1331"]
"#;

        let category: RequirementCategory = toml::from_str(toml_str).expect("parse category");
        assert_eq!(
            category.rule,
            CategoryRule::FixedList {
                courses: vec!["CS 1301".to_string(), "CS 1331".to_string()],
            }
        );
    }

    #[test]
    fn test_category_toml_choose_n() {
        let toml_str = r#"
name = "Intelligence Thread"
kind = "choose-n"
options = ["CS 3600", "CS 4641"]
threshold = { credits = 6 }
"#;

        let category: RequirementCategory = toml::from_str(toml_str).expect("parse category");
        assert_eq!(
            category.rule,
            CategoryRule::ChooseN {
                options: vec!["CS 3600".to_string(), "CS 4641".to_string()],
                threshold: Threshold::Credits(6),
            }
        );
    }
}
