//! Resend Code Use Case
//!
//! Asks the identity backend to resend the one-time code.

use std::sync::Arc;

use crate::domain::gateway::{CodeDelivery, IdentityGateway};
use crate::domain::value_object::Mobile;
use crate::error::{AuthError, AuthResult};

/// Resend code use case
pub struct ResendCodeUseCase<G: IdentityGateway> {
    gateway: Arc<G>,
}

impl<G: IdentityGateway> ResendCodeUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, mobile: Mobile, user_agent: &str) -> AuthResult<CodeDelivery> {
        let delivery = self.gateway.resend_code(&mobile, user_agent).await?;
        if !delivery.success {
            tracing::warn!(mobile = %mobile, "Code resend rejected by identity backend");
            return Err(AuthError::BackendRejected);
        }

        tracing::info!(mobile = %mobile, "Verification code resent");
        Ok(delivery)
    }
}
