//! Sign Out Use Case
//!
//! Invalidates the backend session. The caller clears the cookie only when
//! the backend acknowledges; a failed sign-out leaves the session in place
//! so the user can retry.

use std::sync::Arc;

use crate::domain::gateway::IdentityGateway;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<G: IdentityGateway> {
    gateway: Arc<G>,
}

impl<G: IdentityGateway> SignOutUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session_id: &str) -> AuthResult<()> {
        let ack = self.gateway.sign_out(session_id).await?;
        if !ack.success {
            tracing::warn!(session_id = %session_id, "Backend did not acknowledge sign-out");
            return Err(AuthError::BackendRejected);
        }

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
