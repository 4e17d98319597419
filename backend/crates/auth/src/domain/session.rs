//! User Session Record
//!
//! The authenticated identity carried between requests inside the signed
//! session cookie. Immutable once issued: a refresh produces a new record,
//! never an in-place mutation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::claims::AccessTokenClaims;
use crate::domain::gateway::VerifiedUser;

/// Session record, serialized camelCase into the token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// User identifier (mobile-derived handle)
    pub user_name: String,
    /// Display name
    pub full_name: String,
    /// Profile picture URL
    pub pic: String,
    /// Access-token expiry, epoch milliseconds
    pub exp: i64,
    /// Opaque bearer token for the backend API
    pub access_token: String,
    /// Backend-issued opaque session id (refresh / sign-out handle)
    pub session_id: String,
    /// Refresh-eligibility expiry, epoch milliseconds. Independent of `exp`.
    pub session_expiry: i64,
}

impl UserSession {
    /// Build a session record from a backend verification/refresh response.
    ///
    /// Backend timestamps arrive in epoch seconds and are converted to
    /// milliseconds on ingestion.
    pub fn from_verified(user: &VerifiedUser, claims: AccessTokenClaims) -> Self {
        Self {
            user_name: claims.user_name,
            full_name: claims.full_name,
            pic: claims.pic,
            exp: claims.exp * 1000,
            access_token: user.access_token.clone(),
            session_id: user.session_id.clone(),
            session_expiry: user.session_expiry * 1000,
        }
    }

    /// Whether the access token has expired at `now_ms`.
    ///
    /// Strict comparison: a token expiring at exactly the current
    /// millisecond is not yet expired.
    pub fn access_expired(&self, now_ms: i64) -> bool {
        now_ms > self.exp
    }

    /// Whether the refresh-eligibility window has closed at `now_ms`
    pub fn refresh_expired(&self, now_ms: i64) -> bool {
        now_ms > self.session_expiry
    }

    /// Current time in epoch milliseconds
    pub fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }
}
