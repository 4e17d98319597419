//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::codec::SessionCodec;
use crate::application::config::AuthConfig;
use crate::domain::gateway::IdentityGateway;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router, mounted under `/api/auth`
pub fn auth_router<G>(
    gateway: Arc<G>,
    codec: Arc<SessionCodec>,
    config: Arc<AuthConfig>,
) -> Router
where
    G: IdentityGateway + Sync + 'static,
{
    let state = AuthAppState {
        gateway,
        codec,
        config,
    };

    Router::new()
        .route("/login", post(handlers::send_code::<G>))
        .route("/otp/verify", post(handlers::verify_code::<G>))
        .route("/otp/send", post(handlers::resend_code::<G>))
        .route("/signout", post(handlers::sign_out::<G>))
        .route("/session", get(handlers::session::<G>))
        .with_state(state)
}
