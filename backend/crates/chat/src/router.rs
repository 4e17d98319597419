//! Chat Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::codec::SessionCodec;
use auth::application::config::AuthConfig;

use crate::gateway::ChatGateway;
use crate::handlers::{self, ChatAppState};

/// Create the chat router, mounted under `/api`
pub fn chat_router<G>(gateway: Arc<G>, codec: Arc<SessionCodec>, config: Arc<AuthConfig>) -> Router
where
    G: ChatGateway + Sync + 'static,
{
    let state = ChatAppState {
        gateway,
        codec,
        config,
    };

    Router::new()
        .route("/chat/ask", post(handlers::ask::<G>))
        .route(
            "/conversations",
            get(handlers::list_conversations::<G>).post(handlers::create_conversation::<G>),
        )
        .with_state(state)
}
