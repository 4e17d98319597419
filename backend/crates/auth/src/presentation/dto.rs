//! Request/Response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::session::UserSession;

/// POST /api/auth/login request
#[derive(Debug, Deserialize)]
pub struct SendCodeRequest {
    pub mobile: String,
}

/// POST /api/auth/otp/verify request
#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub mobile: String,
    pub code: String,
}

/// POST /api/auth/otp/send request
#[derive(Debug, Deserialize)]
pub struct ResendCodeRequest {
    pub mobile: String,
}

/// Outcome of a code send/resend request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDeliveryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of a code verification
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<UserSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of a sign-out request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
