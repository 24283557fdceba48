//! Types exchanged with the upload collaborator

use serde::{Deserialize, Serialize};

/// A file offered for upload, as declared by the client. Transient; exists
/// only for the duration of one intake decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Original file name, arbitrary encoding and characters.
    pub file_name: String,
    /// Declared MIME type. Matched exactly against the allow-list; never
    /// sniffed from content.
    pub content_type: String,
    /// Declared size in bytes.
    pub size_bytes: u64,
}

impl CandidateFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }
}

/// An accepted upload, ready to hand to the object-storage collaborator.
///
/// `storage_key` is the string contract under which the bytes will live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedAttachment {
    pub storage_key: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}
