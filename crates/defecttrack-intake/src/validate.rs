//! Gate checks for attachment intake

use crate::error::IntakeError;

/// Whether `requesting` is the supplier recorded on the defect.
///
/// Equality is exact and case-sensitive; a defect with no owning supplier
/// fails ownership for every requester.
pub fn verify_ownership(defect_supplier: Option<&str>, requesting: &str) -> bool {
    defect_supplier == Some(requesting)
}

/// Validate the declared content type against an allow-list.
///
/// Matching is exact and case-sensitive - no parameter stripping, no
/// wildcard or prefix matching. A spoofed `image/jpeg; charset=x` therefore
/// fails just like any unknown type.
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), IntakeError> {
    if !allowed_types.iter().any(|ct| ct == content_type) {
        return Err(IntakeError::UnsupportedType {
            content_type: content_type.to_string(),
        });
    }
    Ok(())
}

/// Validate the declared size against the ceiling. Equality is accepted;
/// zero-byte files pass.
pub fn validate_file_size(size_bytes: u64, max_bytes: u64) -> Result<(), IntakeError> {
    if size_bytes > max_bytes {
        return Err(IntakeError::FileTooLarge {
            size_bytes,
            max_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use defecttrack_core::constants::{
        ALLOWED_ATTACHMENT_CONTENT_TYPES, MAX_ATTACHMENT_SIZE_BYTES,
    };

    fn allowed() -> Vec<String> {
        ALLOWED_ATTACHMENT_CONTENT_TYPES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn ownership_is_exact_and_case_sensitive() {
        assert!(verify_ownership(Some("FLEX"), "FLEX"));
        assert!(!verify_ownership(Some("FLEX"), "flex"));
        assert!(!verify_ownership(Some("FLEX"), "FOXCONN"));
        assert!(!verify_ownership(None, "FLEX"));
    }

    #[test]
    fn every_allowed_type_is_accepted() {
        for ct in ALLOWED_ATTACHMENT_CONTENT_TYPES {
            assert!(validate_content_type(ct, &allowed()).is_ok(), "{ct}");
        }
    }

    #[test]
    fn executables_archives_and_scripts_are_rejected() {
        for ct in [
            "application/x-msdownload",
            "application/zip",
            "application/javascript",
            "",
            "text/html",
        ] {
            let err = validate_content_type(ct, &allowed()).unwrap_err();
            assert_eq!(err.kind(), "unsupported_type");
        }
    }

    #[test]
    fn matching_is_case_sensitive_with_no_parameter_stripping() {
        assert!(validate_content_type("Image/JPEG", &allowed()).is_err());
        assert!(validate_content_type("image/jpeg; charset=utf-8", &allowed()).is_err());
        assert!(validate_content_type("image/jpe", &allowed()).is_err());
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert!(validate_file_size(1024, MAX_ATTACHMENT_SIZE_BYTES).is_ok());
        assert!(validate_file_size(5 * 1024 * 1024, MAX_ATTACHMENT_SIZE_BYTES).is_ok());
        assert!(validate_file_size(MAX_ATTACHMENT_SIZE_BYTES, MAX_ATTACHMENT_SIZE_BYTES).is_ok());
        assert!(validate_file_size(0, MAX_ATTACHMENT_SIZE_BYTES).is_ok());

        let err = validate_file_size(11 * 1024 * 1024, MAX_ATTACHMENT_SIZE_BYTES).unwrap_err();
        assert_eq!(err.kind(), "file_too_large");
        assert_eq!(
            validate_file_size(MAX_ATTACHMENT_SIZE_BYTES + 1, MAX_ATTACHMENT_SIZE_BYTES)
                .unwrap_err()
                .kind(),
            "file_too_large"
        );
    }
}
