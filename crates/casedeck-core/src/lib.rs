pub mod api;
pub mod config;
pub mod intake;
pub mod session;
pub mod stats;
pub mod testcase;
pub mod text;

pub use api::{ApiClient, ApiError, TestCaseApi, UploadResponse};
pub use config::{Config, ConfigError};
pub use intake::{DocumentKind, IntakeError, SelectedFile};
pub use session::{Filter, Session};
pub use stats::Stats;
pub use testcase::{Classification, PriorityLevel, TestCase, TestCaseDraft};
