//! Client session state.
//!
//! One `Session` replaces the original client's page-wide globals: the last
//! fetched case list, the active filter, the filename scope, and the id of
//! the record open in the edit form. It lives for the process lifetime and
//! is reset on restart.

use crate::stats::Stats;
use crate::testcase::TestCase;

/// The active list filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show everything.
    #[default]
    All,
    /// Show cases whose `test_type` matches exactly.
    Type(String),
}

impl Filter {
    /// The wire/display value: "all" or the type name.
    pub fn label(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Type(t) => t,
        }
    }

    /// Builds a filter from its label.
    pub fn from_label(label: &str) -> Self {
        if label == "all" {
            Filter::All
        } else {
            Filter::Type(label.to_string())
        }
    }

    fn matches(&self, case: &TestCase) -> bool {
        match self {
            Filter::All => true,
            Filter::Type(t) => case.test_type == *t,
        }
    }
}

/// In-memory client state, mirroring exactly what the last successful
/// list fetch returned.
///
/// No case is ever created, mutated, or removed here directly: every
/// mutation round-trips the server and shows up via a subsequent re-fetch,
/// with two exceptions that substitute the list wholesale (upload response
/// handling and clear-all).
#[derive(Debug, Default)]
pub struct Session {
    cases: Vec<TestCase>,
    /// Record currently open in the edit form, if any.
    pub editing_id: Option<i64>,
    pub filter: Filter,
    /// Name of the last uploaded document; scopes the next list fetch.
    pub filename: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full, unfiltered list.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Replaces the list wholesale with a fetch result.
    pub fn replace(&mut self, cases: Vec<TestCase>) {
        self.cases = cases;
    }

    /// Empties the list after a successful clear-all (no re-fetch happens).
    pub fn clear(&mut self) {
        self.cases.clear();
    }

    /// Records the document scope for subsequent list fetches.
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }

    /// Looks up a case by id. `None` means the caller no-ops silently.
    pub fn find(&self, id: i64) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// The subset the grid renders: the list under the active filter.
    pub fn visible(&self) -> Vec<&TestCase> {
        self.cases.iter().filter(|c| self.filter.matches(c)).collect()
    }

    /// Statistics over the unfiltered list, independent of the filter.
    pub fn stats(&self) -> Stats {
        Stats::compute(&self.cases)
    }
}
