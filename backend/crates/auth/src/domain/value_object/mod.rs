//! Value Objects
//!
//! Validated input primitives for the OTP flow.

pub mod mobile;
pub mod otp_code;

pub use mobile::{Mobile, MobileError};
pub use otp_code::{OtpCode, OtpCodeError};
