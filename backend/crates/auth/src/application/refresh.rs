//! Refresh Session Use Case
//!
//! Exchanges the opaque session id for a fresh access-token bundle and
//! re-signs the session record.

use std::sync::Arc;

use crate::application::codec::SessionCodec;
use crate::domain::claims::decode_claims;
use crate::domain::gateway::IdentityGateway;
use crate::domain::session::UserSession;
use crate::error::AuthResult;

/// Refresh session output
pub struct RefreshOutput {
    /// Signed token for the replacement cookie
    pub session_token: String,
    /// Refreshed session record
    pub session: UserSession,
}

/// Refresh session use case
pub struct RefreshSessionUseCase<G: IdentityGateway> {
    gateway: Arc<G>,
    codec: Arc<SessionCodec>,
}

impl<G: IdentityGateway> RefreshSessionUseCase<G> {
    pub fn new(gateway: Arc<G>, codec: Arc<SessionCodec>) -> Self {
        Self { gateway, codec }
    }

    pub async fn execute(&self, current: &UserSession) -> AuthResult<RefreshOutput> {
        let verified = self.gateway.refresh_token(&current.session_id).await?;

        let claims = decode_claims(&verified.access_token)?;
        let session = UserSession::from_verified(&verified, claims);
        let session_token = self.codec.encode(&session)?;

        tracing::debug!(
            session_id = %session.session_id,
            exp = session.exp,
            "Access token refreshed"
        );

        Ok(RefreshOutput {
            session_token,
            session,
        })
    }
}
