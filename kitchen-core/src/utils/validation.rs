//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! reservation and contact forms.

use shared::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, party size
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Contact message body
pub const MAX_MESSAGE_LEN: usize = 2000;

// ── Validation helpers ──────────────────────────────────────────────

/// A field counts as present when it has non-whitespace content
#[inline]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate that a (trimmed) string is within the length limit.
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.trim().chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if !is_present(value) {
        return Err(AppError::required(field));
    }
    validate_max_len(value, field, max_len)
}

/// Parse a positive integer (party size); `None` for empty, zero, negative or junk
pub fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("Asha"));
        assert!(!is_present(""));
        assert!(!is_present("   \t"));
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Asha", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("  ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.contains("name is too long"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let name = "ल".repeat(MAX_NAME_LEN);
        assert!(validate_max_len(&name, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("4"), Some(4));
        assert_eq!(parse_positive(" 12 "), Some(12));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-2"), None);
        assert_eq!(parse_positive("two"), None);
        assert_eq!(parse_positive(""), None);
    }
}
