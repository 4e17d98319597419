//! Request Code Use Case
//!
//! Asks the identity backend to send a one-time code to a mobile number.

use std::sync::Arc;

use crate::domain::gateway::{CodeDelivery, IdentityGateway};
use crate::domain::value_object::Mobile;
use crate::error::{AuthError, AuthResult};

/// Request code use case
pub struct RequestCodeUseCase<G: IdentityGateway> {
    gateway: Arc<G>,
}

impl<G: IdentityGateway> RequestCodeUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, mobile: Mobile) -> AuthResult<CodeDelivery> {
        let delivery = self.gateway.send_code(&mobile).await?;
        if !delivery.success {
            tracing::warn!(mobile = %mobile, "Code delivery rejected by identity backend");
            return Err(AuthError::BackendRejected);
        }

        tracing::info!(mobile = %mobile, "Verification code requested");
        Ok(delivery)
    }
}
