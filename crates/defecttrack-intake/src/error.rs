//! Intake rejection kinds
//!
//! Every gate failure maps to exactly one kind; none are retried
//! automatically. All kinds are expected, user-facing outcomes carried as
//! plain data so the upload collaborator can render or log them.

use serde::Serialize;
use thiserror::Error;

/// Why an uploaded file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntakeError {
    /// The defect is not owned by the requesting supplier, or has no owning
    /// supplier at all.
    #[error("supplier does not own this defect")]
    OwnershipDenied,

    /// The declared content type is not in the attachment allow-list.
    #[error("unsupported content type: {content_type}")]
    UnsupportedType { content_type: String },

    /// The file exceeds the attachment size ceiling.
    #[error("file size {size_bytes} exceeds maximum of {max_bytes} bytes")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl IntakeError {
    /// Stable machine-readable kind for logging and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            IntakeError::OwnershipDenied => "ownership_denied",
            IntakeError::UnsupportedType { .. } => "unsupported_type",
            IntakeError::FileTooLarge { .. } => "file_too_large",
        }
    }
}
