//! Shared constants for attachment intake and permission handling.

/// Content types a supplier may attach to a defect. The list is closed and
/// matched case-sensitively; anything else is rejected.
pub const ALLOWED_ATTACHMENT_CONTENT_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum accepted attachment size in bytes (10 MiB). Files exactly at the
/// ceiling are accepted.
pub const MAX_ATTACHMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Length of the random disambiguator in derived storage keys.
pub const ATTACHMENT_KEY_SUFFIX_LEN: usize = 6;
