//! Verify Code Use Case
//!
//! Exchanges a mobile number and one-time code for a token bundle, then
//! materializes the session record and signs it for the cookie.

use std::sync::Arc;

use crate::application::codec::SessionCodec;
use crate::domain::claims::decode_claims;
use crate::domain::gateway::IdentityGateway;
use crate::domain::session::UserSession;
use crate::domain::value_object::{Mobile, OtpCode};
use crate::error::AuthResult;

/// Verify code output
pub struct VerifyCodeOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    /// Decoded session record
    pub session: UserSession,
}

/// Verify code use case
pub struct VerifyCodeUseCase<G: IdentityGateway> {
    gateway: Arc<G>,
    codec: Arc<SessionCodec>,
}

impl<G: IdentityGateway> VerifyCodeUseCase<G> {
    pub fn new(gateway: Arc<G>, codec: Arc<SessionCodec>) -> Self {
        Self { gateway, codec }
    }

    pub async fn execute(
        &self,
        mobile: Mobile,
        code: OtpCode,
        user_agent: &str,
    ) -> AuthResult<VerifyCodeOutput> {
        let verified = self.gateway.verify_code(&mobile, &code, user_agent).await?;

        let claims = decode_claims(&verified.access_token)?;
        let session = UserSession::from_verified(&verified, claims);
        let session_token = self.codec.encode(&session)?;

        tracing::info!(
            user_name = %session.user_name,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(VerifyCodeOutput {
            session_token,
            session,
        })
    }
}
