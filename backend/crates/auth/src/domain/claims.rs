//! Bearer Token Claims
//!
//! Claims consumed from the backend-issued access token. The payload is
//! decoded without signature verification: the *session* token is the
//! signed artifact, the bearer token is verified by the backend itself.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::{AuthError, AuthResult};

/// Claims carried in the backend-issued bearer token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenClaims {
    pub user_name: String,
    pub full_name: String,
    #[serde(default)]
    pub pic: String,
    /// Expiry in epoch **seconds**, as issued
    pub exp: i64,
}

/// Decode the claims segment of a JWT-shaped bearer token.
///
/// Only the payload segment is parsed; the signature is not checked.
pub fn decode_claims(token: &str) -> AuthResult<AccessTokenClaims> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::InvalidAccessToken);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| AuthError::InvalidAccessToken)?;

    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidAccessToken)
}
