//! Mobile Number Value Object
//!
//! Iranian mobile numbers as accepted by the identity backend:
//! exactly 11 ASCII digits, starting with `09`. Input is trimmed before
//! validation; no other normalization is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length in digits
pub const MOBILE_LENGTH: usize = 11;

/// Required prefix
pub const MOBILE_PREFIX: &str = "09";

/// Error returned when mobile number validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MobileError {
    #[error("Mobile number must be {MOBILE_LENGTH} digits (got {0})")]
    WrongLength(usize),

    #[error("Mobile number must start with {MOBILE_PREFIX}")]
    WrongPrefix,

    #[error("Mobile number must contain only digits")]
    NonDigit,
}

/// Validated mobile number
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mobile(String);

impl Mobile {
    /// Create a new Mobile from raw input (trims surrounding whitespace)
    pub fn new(input: impl AsRef<str>) -> Result<Self, MobileError> {
        let trimmed = input.as_ref().trim();

        let length = trimmed.chars().count();
        if length != MOBILE_LENGTH {
            return Err(MobileError::WrongLength(length));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(MobileError::NonDigit);
        }
        if !trimmed.starts_with(MOBILE_PREFIX) {
            return Err(MobileError::WrongPrefix);
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mobile").field(&self.0).finish()
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Mobile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Mobile {
    type Error = MobileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mobile> for String {
    fn from(mobile: Mobile) -> Self {
        mobile.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mobile() {
        let mobile = Mobile::new("09123456789").unwrap();
        assert_eq!(mobile.as_str(), "09123456789");
    }

    #[test]
    fn test_trims_whitespace() {
        let mobile = Mobile::new("  09123456789  ").unwrap();
        assert_eq!(mobile.as_str(), "09123456789");
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            Mobile::new("0912345678"),
            Err(MobileError::WrongLength(10))
        ));
        assert!(matches!(
            Mobile::new("091234567890"),
            Err(MobileError::WrongLength(12))
        ));
        assert!(matches!(Mobile::new(""), Err(MobileError::WrongLength(0))));
    }

    #[test]
    fn test_wrong_prefix() {
        assert!(matches!(
            Mobile::new("19123456789"),
            Err(MobileError::WrongPrefix)
        ));
        assert!(matches!(
            Mobile::new("00123456789"),
            Err(MobileError::WrongPrefix)
        ));
    }

    #[test]
    fn test_non_digit() {
        assert!(matches!(
            Mobile::new("0912345678a"),
            Err(MobileError::NonDigit)
        ));
        assert!(matches!(
            Mobile::new("0912 345678"),
            Err(MobileError::NonDigit)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mobile = Mobile::new("09123456789").unwrap();
        let json = serde_json::to_string(&mobile).unwrap();
        assert_eq!(json, "\"09123456789\"");

        let parsed: Mobile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mobile);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<Mobile, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
