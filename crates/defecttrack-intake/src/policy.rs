//! Attachment intake pipeline
//!
//! Ordered gates: ownership -> content type -> size -> key derivation. The
//! first failing gate short-circuits with its error kind; only a fully
//! admitted file gets a storage key.

use defecttrack_core::constants::{ALLOWED_ATTACHMENT_CONTENT_TYPES, MAX_ATTACHMENT_SIZE_BYTES};
use defecttrack_core::models::{Actor, DefectRef};
use defecttrack_core::permissions;

use crate::error::IntakeError;
use crate::keys::attachment_key;
use crate::types::{AcceptedAttachment, CandidateFile};
use crate::validate::{validate_content_type, validate_file_size, verify_ownership};

/// Intake configuration: which content types are accepted and up to what
/// size. `Default` carries the application's fixed attachment rules.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    allowed_content_types: Vec<String>,
    max_file_size: u64,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            allowed_content_types: ALLOWED_ATTACHMENT_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: MAX_ATTACHMENT_SIZE_BYTES,
        }
    }
}

impl AttachmentPolicy {
    pub fn new(allowed_content_types: Vec<String>, max_file_size: u64) -> Self {
        Self {
            allowed_content_types,
            max_file_size,
        }
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Decide whether `file` may be attached to `defect` by `actor`.
    ///
    /// Admin actors bypass the ownership gate (same bypass semantics as the
    /// permission evaluator, queried for `defects`/`manage`); everyone else
    /// must be the defect's recorded supplier. Content type and size are
    /// checked for every actor, admins included.
    pub fn admit(
        &self,
        actor: &Actor,
        defect: &DefectRef,
        file: &CandidateFile,
    ) -> Result<AcceptedAttachment, IntakeError> {
        match self.decide(actor, defect, file) {
            Ok(accepted) => {
                tracing::debug!(
                    defect_id = defect.id,
                    storage_key = %accepted.storage_key,
                    "Accepted attachment upload"
                );
                Ok(accepted)
            }
            Err(err) => {
                tracing::warn!(
                    defect_id = defect.id,
                    file_name = %file.file_name,
                    content_type = %file.content_type,
                    size_bytes = file.size_bytes,
                    kind = err.kind(),
                    "Rejected attachment upload"
                );
                Err(err)
            }
        }
    }

    /// Ownership -> type -> size -> key, first failure wins.
    fn decide(
        &self,
        actor: &Actor,
        defect: &DefectRef,
        file: &CandidateFile,
    ) -> Result<AcceptedAttachment, IntakeError> {
        self.check_ownership(actor, defect)?;
        validate_content_type(&file.content_type, &self.allowed_content_types)?;
        validate_file_size(file.size_bytes, self.max_file_size)?;

        Ok(AcceptedAttachment {
            storage_key: attachment_key(defect.id, &file.file_name),
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
            size_bytes: file.size_bytes,
        })
    }

    fn check_ownership(&self, actor: &Actor, defect: &DefectRef) -> Result<(), IntakeError> {
        if permissions::evaluate(actor, "defects", "manage", true) {
            return Ok(());
        }

        let owns = actor
            .supplier
            .as_deref()
            .map(|supplier| verify_ownership(defect.supplier.as_deref(), supplier))
            .unwrap_or(false);

        if owns {
            Ok(())
        } else {
            Err(IntakeError::OwnershipDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defecttrack_core::models::{PermissionSet, UserRole};

    fn defect_owned_by(supplier: &str) -> DefectRef {
        DefectRef::new(123, Some(supplier.to_string()))
    }

    fn png(size_bytes: u64) -> CandidateFile {
        CandidateFile::new("photo 1.png", "image/png", size_bytes)
    }

    #[test]
    fn wrong_supplier_is_denied_ownership() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FOXCONN");
        let err = policy
            .admit(&actor, &defect_owned_by("FLEX"), &png(1024))
            .unwrap_err();
        assert_eq!(err, IntakeError::OwnershipDenied);
    }

    #[test]
    fn unowned_defect_denies_every_supplier() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FLEX");
        let defect = DefectRef::new(123, None);
        assert_eq!(
            policy.admit(&actor, &defect, &png(1024)).unwrap_err(),
            IntakeError::OwnershipDenied
        );
    }

    #[test]
    fn actor_without_supplier_identity_is_denied() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::new(UserRole::Viewer, PermissionSet::new());
        assert_eq!(
            policy
                .admit(&actor, &defect_owned_by("FLEX"), &png(1024))
                .unwrap_err(),
            IntakeError::OwnershipDenied
        );
    }

    #[test]
    fn owning_supplier_with_bad_type_hits_type_gate() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FLEX");
        let file = CandidateFile::new("payload.zip", "application/zip", 1024);
        let err = policy
            .admit(&actor, &defect_owned_by("FLEX"), &file)
            .unwrap_err();
        assert_eq!(err.kind(), "unsupported_type");
    }

    #[test]
    fn owning_supplier_with_oversized_pdf_hits_size_gate() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FLEX");
        let file = CandidateFile::new("report.pdf", "application/pdf", 11 * 1024 * 1024);
        let err = policy
            .admit(&actor, &defect_owned_by("FLEX"), &file)
            .unwrap_err();
        assert_eq!(err.kind(), "file_too_large");
    }

    #[test]
    fn ownership_gate_fires_before_type_gate() {
        // A file that would fail the type gate still reports ownership
        // first when the supplier does not own the defect.
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FOXCONN");
        let file = CandidateFile::new("payload.zip", "application/zip", 20 * 1024 * 1024);
        assert_eq!(
            policy
                .admit(&actor, &defect_owned_by("FLEX"), &file)
                .unwrap_err(),
            IntakeError::OwnershipDenied
        );
    }

    #[test]
    fn owning_supplier_upload_is_accepted_with_derived_key() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FLEX");
        let accepted = policy
            .admit(&actor, &defect_owned_by("FLEX"), &png(2 * 1024 * 1024))
            .unwrap();

        assert!(accepted
            .storage_key
            .starts_with("defects/123/supplier-attachments/"));
        assert!(accepted.storage_key.ends_with("-photo_1.png"));
        assert_eq!(accepted.file_name, "photo 1.png");
        assert_eq!(accepted.content_type, "image/png");
        assert_eq!(accepted.size_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn admin_bypasses_ownership_but_not_type_or_size() {
        let policy = AttachmentPolicy::default();
        let admin = Actor::new(UserRole::Admin, PermissionSet::new());

        assert!(policy
            .admit(&admin, &defect_owned_by("FLEX"), &png(1024))
            .is_ok());

        let zip = CandidateFile::new("a.zip", "application/zip", 1024);
        assert_eq!(
            policy
                .admit(&admin, &defect_owned_by("FLEX"), &zip)
                .unwrap_err()
                .kind(),
            "unsupported_type"
        );
    }

    #[test]
    fn admin_flag_without_admin_role_also_bypasses() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::with_admin_flag(UserRole::Sqa, true, PermissionSet::new());
        assert!(policy
            .admit(&actor, &defect_owned_by("FLEX"), &png(1024))
            .is_ok());
    }

    #[test]
    fn explicit_manage_grant_bypasses_ownership() {
        let policy = AttachmentPolicy::default();
        let mut permissions = PermissionSet::new();
        permissions.grant("defects", "manage");
        let actor = Actor::new(UserRole::Sqa, permissions);
        assert!(policy
            .admit(&actor, &defect_owned_by("FLEX"), &png(1024))
            .is_ok());
    }

    #[test]
    fn zero_byte_file_is_accepted() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("FLEX");
        assert!(policy
            .admit(&actor, &defect_owned_by("FLEX"), &png(0))
            .is_ok());
    }

    #[test]
    fn case_mismatched_supplier_is_denied() {
        let policy = AttachmentPolicy::default();
        let actor = Actor::supplier_account("flex");
        assert_eq!(
            policy
                .admit(&actor, &defect_owned_by("FLEX"), &png(1024))
                .unwrap_err(),
            IntakeError::OwnershipDenied
        );
    }
}
