//! Storage key derivation for supplier attachments.
//!
//! Key format: `defects/{defect_id}/supplier-attachments/{millis}-{suffix}-{filename}`.
//! The external object store treats the key as an opaque path-like string.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use defecttrack_core::constants::ATTACHMENT_KEY_SUFFIX_LEN;

/// Replace every character outside `[A-Za-z0-9.-]` with an underscore.
///
/// Works per `char`, so a multi-byte character maps to exactly one
/// underscore and the character count of the name is preserved. Dots and
/// hyphens pass through verbatim.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the storage key for an accepted attachment on `defect_id`.
///
/// The millisecond timestamp plus a random alphanumeric suffix make
/// collisions between concurrent uploads to the same defect negligible.
pub fn attachment_key(defect_id: i64, file_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ATTACHMENT_KEY_SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!(
        "defects/{}/supplier-attachments/{}-{}-{}",
        defect_id,
        timestamp,
        suffix,
        sanitize_file_name(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_file_name("test file (1).pdf"), "test_file__1_.pdf");
        assert_eq!(sanitize_file_name("photo 1.png"), "photo_1.png");
    }

    #[test]
    fn sanitize_preserves_dots_and_hyphens() {
        assert_eq!(sanitize_file_name("document.v2.pdf"), "document.v2.pdf");
        assert_eq!(sanitize_file_name("my-file.v1.2.doc"), "my-file.v1.2.doc");
    }

    #[test]
    fn sanitize_maps_each_unicode_char_to_one_underscore() {
        let sanitized = sanitize_file_name("relatório_análise.pdf");
        assert_eq!(sanitized, "relat_rio_an_lise.pdf");
        assert_eq!(
            sanitized.chars().count(),
            "relatório_análise.pdf".chars().count()
        );
        assert!(sanitized.ends_with(".pdf"));
    }

    #[test]
    fn key_has_expected_prefix_and_shape() {
        let key = attachment_key(123, "photo 1.png");
        let rest = key
            .strip_prefix("defects/123/supplier-attachments/")
            .expect("key prefix");

        let mut parts = rest.splitn(3, '-');
        let timestamp = parts.next().unwrap();
        let suffix = parts.next().unwrap();
        let name = parts.next().unwrap();

        assert!(!timestamp.is_empty());
        assert!(timestamp.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(suffix.len(), ATTACHMENT_KEY_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| b.is_ascii_alphanumeric()));
        assert_eq!(name, "photo_1.png");
    }

    #[test]
    fn keys_differ_between_calls() {
        let a = attachment_key(7, "a.pdf");
        let b = attachment_key(7, "a.pdf");
        assert_ne!(a, b);
    }
}
