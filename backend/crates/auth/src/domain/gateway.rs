//! Identity Gateway Trait
//!
//! Interface to the external identity backend. Implementation is in the
//! infrastructure layer; tests substitute a mock.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{Mobile, OtpCode};
use crate::error::AuthResult;

/// Backend response to a successful OTP verification or token refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedUser {
    /// Bearer token for the backend API (JWT-shaped, claims decoded locally)
    pub access_token: String,
    /// Opaque session id for refresh and sign-out
    pub session_id: String,
    /// Refresh-eligibility expiry, epoch **seconds**
    pub session_expiry: i64,
}

/// Backend response to a code send/resend request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeDelivery {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Backend acknowledgement of a sign-out request
#[derive(Debug, Clone, Deserialize)]
pub struct SignOutAck {
    pub success: bool,
}

/// Identity backend gateway
#[trait_variant::make(IdentityGateway: Send)]
pub trait LocalIdentityGateway {
    /// Request an OTP for the given mobile number (`POST /auth/login`)
    async fn send_code(&self, mobile: &Mobile) -> AuthResult<CodeDelivery>;

    /// Verify an OTP and obtain a token bundle (`POST /auth/otp/verify`)
    async fn verify_code(
        &self,
        mobile: &Mobile,
        code: &OtpCode,
        user_agent: &str,
    ) -> AuthResult<VerifiedUser>;

    /// Resend the OTP (`POST /auth/otp/send`)
    async fn resend_code(&self, mobile: &Mobile, user_agent: &str) -> AuthResult<CodeDelivery>;

    /// Invalidate the backend session (`POST /auth/signout`)
    async fn sign_out(&self, session_id: &str) -> AuthResult<SignOutAck>;

    /// Exchange the session id for a fresh access-token bundle
    /// (`POST <identity-host>/refresh-token`)
    async fn refresh_token(&self, session_id: &str) -> AuthResult<VerifiedUser>;
}
