//! Default values for casedeck configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Server Defaults
// ============================================================================

/// Default base URL of the test-case management server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

// ============================================================================
// Upload Defaults
// ============================================================================

/// Maximum accepted requirement-document size (16 MiB), matching the
/// server's request-size cap so rejections happen before any bytes move.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

// ============================================================================
// Export Defaults
// ============================================================================

/// Default directory for exported spreadsheets.
pub const DEFAULT_EXPORT_DIR: &str = ".";

/// Fallback export file stem when the server sends no filename.
pub const DEFAULT_EXPORT_STEM: &str = "test_cases_export";

// ============================================================================
// Startup Defaults
// ============================================================================

/// Whether to wipe all server-side test cases on startup. On by default to
/// match the original product behavior of starting every session from a
/// clean slate.
pub const DEFAULT_CLEAR_ON_START: bool = true;
