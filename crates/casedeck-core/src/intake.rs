//! Client-side validation of the selected requirement document.
//!
//! Validation happens before any request is built: a rejected file never
//! reaches the network. Only the path, name, size, and inferred kind are
//! looked at; file content is never parsed on the client.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::MAX_UPLOAD_BYTES;

/// Errors produced by intake validation. The display strings double as the
/// user-facing rejection messages.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid file type. Please upload PDF, DOCX, or TXT files.")]
    UnsupportedType,

    #[error("File size exceeds 16MB limit.")]
    TooLarge { size: u64 },

    #[error("Could not read file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Accepted document kinds, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Infers the kind from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// MIME type sent with the multipart upload part.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::PlainText => "text/plain",
        }
    }
}

/// A validated local file, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Display name, also used as the multipart file name.
    pub name: String,
    pub size: u64,
    pub kind: DocumentKind,
}

impl SelectedFile {
    /// Validates a path and produces a selection.
    ///
    /// Rejections: unknown extension, size over [`MAX_UPLOAD_BYTES`], or an
    /// unreadable path. No request is issued for a rejected file.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, IntakeError> {
        let path = path.into();

        let kind = DocumentKind::from_path(&path).ok_or(IntakeError::UnsupportedType)?;

        let metadata = fs::metadata(&path).map_err(|source| IntakeError::Unreadable {
            path: path.clone(),
            source,
        })?;

        let size = metadata.len();
        if size > MAX_UPLOAD_BYTES {
            return Err(IntakeError::TooLarge { size });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        Ok(Self { path, name, size, kind })
    }
}
