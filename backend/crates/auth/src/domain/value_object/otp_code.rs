//! OTP Code Value Object
//!
//! One-time verification codes: exactly 6 ASCII digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length in digits
pub const OTP_CODE_LENGTH: usize = 6;

/// Error returned when verification code validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpCodeError {
    #[error("Verification code must be {OTP_CODE_LENGTH} digits (got {0})")]
    WrongLength(usize),

    #[error("Verification code must contain only digits")]
    NonDigit,
}

/// Validated one-time verification code
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtpCode(String);

impl OtpCode {
    /// Create a new OtpCode from raw input (trims surrounding whitespace)
    pub fn new(input: impl AsRef<str>) -> Result<Self, OtpCodeError> {
        let trimmed = input.as_ref().trim();

        let length = trimmed.chars().count();
        if length != OTP_CODE_LENGTH {
            return Err(OtpCodeError::WrongLength(length));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(OtpCodeError::NonDigit);
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the code itself
        f.write_str("OtpCode(******)")
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OtpCode {
    type Error = OtpCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OtpCode> for String {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}
