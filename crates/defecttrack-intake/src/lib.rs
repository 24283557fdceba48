//! Supplier attachment intake
//!
//! Decides whether a file a supplier uploads against a defect record may be
//! accepted, and derives the storage key an accepted file will be persisted
//! under. Intake runs four ordered gates - ownership, content type, size,
//! key derivation - and the first failure short-circuits with a distinct,
//! stable error kind.
//!
//! The pipeline is a pure function of its inputs apart from the randomized
//! key disambiguator; persisting the bytes under the derived key is the
//! object-storage collaborator's job.

pub mod error;
pub mod keys;
pub mod policy;
pub mod types;
pub mod validate;

pub use error::IntakeError;
pub use keys::{attachment_key, sanitize_file_name};
pub use policy::AttachmentPolicy;
pub use types::{AcceptedAttachment, CandidateFile};
pub use validate::{validate_content_type, validate_file_size, verify_ownership};
