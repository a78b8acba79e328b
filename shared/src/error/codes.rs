//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart / reservation errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors (storage)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the browser binding can
/// surface them to page scripts unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Cart ====================
    /// No cart line under the given key
    CartLineNotFound = 4001,
    /// Line key is neither a menu id nor `special-<id>`
    InvalidLineKey = 4002,
    /// Reservation date/time lies in the past
    ReservationInPast = 4101,
    /// Reservation date/time could not be parsed
    ReservationInvalidDateTime = 4102,

    // ==================== 6xxx: Catalog ====================
    /// Menu item id not in the catalog
    MenuItemNotFound = 6001,
    /// Special id not in the catalog
    SpecialNotFound = 6002,
    /// Unknown category name
    CategoryNotFound = 6101,

    // ==================== 94xx: Storage ====================
    StorageUnavailable = 9401,
    StorageWriteFailed = 9402,
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Cart
            ErrorCode::CartLineNotFound => "Cart line not found",
            ErrorCode::InvalidLineKey => "Invalid cart line key",
            ErrorCode::ReservationInPast => "Reservation time is in the past",
            ErrorCode::ReservationInvalidDateTime => "Reservation date/time is invalid",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::SpecialNotFound => "Special not found",
            ErrorCode::CategoryNotFound => "Category not found",

            // Storage
            ErrorCode::StorageUnavailable => "Local storage is unavailable",
            ErrorCode::StorageWriteFailed => "Failed to write local storage",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Cart
            4001 => Ok(ErrorCode::CartLineNotFound),
            4002 => Ok(ErrorCode::InvalidLineKey),
            4101 => Ok(ErrorCode::ReservationInPast),
            4102 => Ok(ErrorCode::ReservationInvalidDateTime),

            // Catalog
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::SpecialNotFound),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // Storage
            9401 => Ok(ErrorCode::StorageUnavailable),
            9402 => Ok(ErrorCode::StorageWriteFailed),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        assert_eq!(ErrorCode::CartLineNotFound.code(), 4001);
        assert_eq!(ErrorCode::ReservationInPast.code(), 4101);

        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 6101);

        assert_eq!(ErrorCode::StorageWriteFailed.code(), 9402);
    }

    #[test]
    fn test_try_from_roundtrips_every_code() {
        let all = [
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::CartLineNotFound,
            ErrorCode::InvalidLineKey,
            ErrorCode::ReservationInPast,
            ErrorCode::ReservationInvalidDateTime,
            ErrorCode::MenuItemNotFound,
            ErrorCode::SpecialNotFound,
            ErrorCode::CategoryNotFound,
            ErrorCode::StorageUnavailable,
            ErrorCode::StorageWriteFailed,
            ErrorCode::StorageCorrupted,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::StorageCorrupted).unwrap();
        assert_eq!(json, "9403");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::CartLineNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
