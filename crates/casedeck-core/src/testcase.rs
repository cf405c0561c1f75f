use serde::{Deserialize, Serialize};

/// Test types the server classifies as non-functional.
///
/// Everything outside this fixed set counts as functional, including types
/// the server invents that we have never seen.
pub const NON_FUNCTIONAL_TYPES: [&str; 6] = [
    "Performance",
    "Security",
    "Usability",
    "Reliability",
    "Compatibility",
    "Maintainability",
];

/// Priority values offered when editing a test case.
pub const PRIORITY_CHOICES: [&str; 3] = ["High", "Medium", "Low"];

/// Test-type values offered when editing, and used for filtering.
pub const TEST_TYPE_CHOICES: [&str; 7] = [
    "Functional",
    "Performance",
    "Security",
    "Usability",
    "Reliability",
    "Compatibility",
    "Maintainability",
];

/// A single test case as returned by the server.
///
/// The client holds a transient copy only: records are never created or
/// mutated locally. `priority` and `test_type` stay as the server sent them
/// so the original casing is displayed verbatim; classification helpers
/// normalize case where the UI needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Server-assigned identifier, stable for the record's lifetime.
    pub id: i64,
    pub test_case_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preconditions: Option<String>,
    pub test_steps: String,
    pub expected_result: String,
    pub priority: String,
    pub test_type: String,
    /// Name of the requirement document this case was generated from.
    #[serde(default)]
    pub requirement_file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TestCase {
    /// Classifies this case as functional or non-functional.
    pub fn classification(&self) -> Classification {
        if NON_FUNCTIONAL_TYPES.contains(&self.test_type.as_str()) {
            Classification::NonFunctional
        } else {
            Classification::Functional
        }
    }

    /// Parses the priority for badge styling. Unknown values get no badge
    /// style but are still displayed as-is.
    pub fn priority_level(&self) -> Option<PriorityLevel> {
        PriorityLevel::parse(&self.priority)
    }

    /// True when the description section should be rendered at all.
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// True when the preconditions section should be rendered at all.
    pub fn has_preconditions(&self) -> bool {
        self.preconditions.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Builds the full-record update payload from this case.
    ///
    /// Absent optional fields become empty text, matching how the edit form
    /// populates them.
    pub fn to_draft(&self) -> TestCaseDraft {
        TestCaseDraft {
            test_case_name: self.test_case_name.clone(),
            description: self.description.clone().unwrap_or_default(),
            preconditions: self.preconditions.clone().unwrap_or_default(),
            test_steps: self.test_steps.clone(),
            expected_result: self.expected_result.clone(),
            priority: self.priority.clone(),
            test_type: self.test_type.clone(),
        }
    }
}

/// Functional / non-functional split used by the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Functional,
    NonFunctional,
}

/// Known priority levels, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Case-insensitive parse; `None` for anything outside the known set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// The editable fields of a test case, sent wholesale on update.
///
/// Updates are full-record replacement, not a diff: the server receives
/// every field with whatever the form holds, and no id in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseDraft {
    pub test_case_name: String,
    pub description: String,
    pub preconditions: String,
    pub test_steps: String,
    pub expected_result: String,
    pub priority: String,
    pub test_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(test_type: &str, priority: &str) -> TestCase {
        TestCase {
            id: 1,
            test_case_name: "Verify login".to_string(),
            description: None,
            preconditions: None,
            test_steps: "1. Open login page".to_string(),
            expected_result: "User is logged in".to_string(),
            priority: priority.to_string(),
            test_type: test_type.to_string(),
            requirement_file: None,
            created_at: None,
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            case("Functional", "High").classification(),
            Classification::Functional
        );
        assert_eq!(
            case("Security", "High").classification(),
            Classification::NonFunctional
        );
        // Unknown types count as functional
        assert_eq!(
            case("Exploratory", "High").classification(),
            Classification::Functional
        );
        // Classification is case-sensitive, like the original lookup
        assert_eq!(
            case("security", "High").classification(),
            Classification::Functional
        );
    }

    #[test]
    fn test_priority_level_is_case_insensitive() {
        assert_eq!(case("Functional", "High").priority_level(), Some(PriorityLevel::High));
        assert_eq!(case("Functional", "high").priority_level(), Some(PriorityLevel::High));
        assert_eq!(case("Functional", "LOW").priority_level(), Some(PriorityLevel::Low));
        assert_eq!(case("Functional", "Critical").priority_level(), None);
    }

    #[test]
    fn test_optional_sections_omitted_when_empty() {
        let mut tc = case("Functional", "High");
        assert!(!tc.has_description());

        tc.description = Some(String::new());
        assert!(!tc.has_description());

        tc.description = Some("Checks the happy path".to_string());
        assert!(tc.has_description());
    }

    #[test]
    fn test_to_draft_fills_missing_optionals_with_empty_text() {
        let tc = case("Functional", "High");
        let draft = tc.to_draft();
        assert_eq!(draft.test_case_name, "Verify login");
        assert_eq!(draft.description, "");
        assert_eq!(draft.preconditions, "");
        assert_eq!(draft.priority, "High");
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let json = r#"{
            "id": 3,
            "test_case_name": "Verify export",
            "test_steps": "1. Click export",
            "expected_result": "File downloads",
            "priority": "Medium",
            "test_type": "Functional"
        }"#;
        let tc: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(tc.id, 3);
        assert!(tc.description.is_none());
        assert!(tc.requirement_file.is_none());
    }
}
