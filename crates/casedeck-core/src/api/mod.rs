//! HTTP client for the test-case management server.
//!
//! The server owns document parsing, generation, persistence, and export
//! rendering; this module only speaks the REST contract. Requests are never
//! retried or batched, and no client-side timeout is applied.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::intake::SelectedFile;
use crate::testcase::{TestCase, TestCaseDraft};

/// Response to a successful document upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Server-side name of the stored document; scopes follow-up fetches.
    pub filename: String,
    /// The freshly generated cases. The interactive client re-fetches
    /// instead of trusting these, so ordering matches the list endpoint.
    pub test_cases: Vec<TestCase>,
    /// True when previous cases for the same document were replaced.
    #[serde(default)]
    pub replaced: bool,
}

/// Operations the server exposes.
///
/// This is the seam between the UI and the transport: the interactive
/// client only sees this trait, so tests can swap in a stub without a
/// running server.
#[async_trait]
pub trait TestCaseApi: Send + Sync {
    /// Uploads a requirement document and triggers generation.
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ApiError>;

    /// Fetches the case list, optionally scoped to one document.
    async fn list(&self, filename: Option<&str>) -> Result<Vec<TestCase>, ApiError>;

    /// Replaces every editable field of one case.
    async fn update(&self, id: i64, draft: &TestCaseDraft) -> Result<(), ApiError>;

    /// Deletes one case.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Deletes every case. Returns the server's confirmation message.
    async fn clear_all(&self) -> Result<String, ApiError>;

    /// Downloads the exported spreadsheet into `dest_dir` and returns the
    /// written path.
    async fn export(&self, dest_dir: &Path) -> Result<PathBuf, ApiError>;
}
