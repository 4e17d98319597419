//! HTTP Handlers
//!
//! Proxies to the RAG backend. The bearer token comes from the session
//! cookie when one decodes; anonymous asks are forwarded without one.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use auth::application::codec::SessionCodec;
use auth::application::config::AuthConfig;
use platform::cookie::extract_cookie;
use platform::http::ApiClientError;

use crate::dto::{AskRequest, AskResponse, ConversationResponse, CreateConversationRequest};
use crate::error::{ChatError, ChatResult};
use crate::gateway::ChatGateway;

/// Shared state for chat handlers
pub struct ChatAppState<G> {
    pub gateway: Arc<G>,
    pub codec: Arc<SessionCodec>,
    pub config: Arc<AuthConfig>,
}

impl<G> Clone for ChatAppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            codec: self.codec.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G> ChatAppState<G> {
    /// Bearer token from the session cookie, if a valid one is present
    fn bearer(&self, headers: &HeaderMap) -> Option<String> {
        let token = extract_cookie(headers, &self.config.cookie.name)?;
        let session = self.codec.decode(&token).ok()?;
        Some(session.access_token)
    }
}

/// POST /api/chat/ask
///
/// Backend failures degrade to a fallback answer payload with a 200 status;
/// the client renders the failure, it does not handle transport errors.
pub async fn ask<G>(
    State(state): State<ChatAppState<G>>,
    headers: HeaderMap,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse>
where
    G: ChatGateway + Sync + 'static,
{
    let bearer = state.bearer(&headers);

    match state
        .gateway
        .ask(&req.question, req.conversation_id.as_deref(), bearer.as_deref())
        .await
    {
        Ok(answer) => Json(answer),
        Err(error) => {
            tracing::error!(%error, "RAG ask failed, returning fallback answer");
            Json(AskResponse::fallback())
        }
    }
}

/// GET /api/conversations
///
/// A 401 from the backend means the user is not signed in there; that and
/// any other failure degrade to an empty list.
pub async fn list_conversations<G>(
    State(state): State<ChatAppState<G>>,
    headers: HeaderMap,
) -> Json<Vec<ConversationResponse>>
where
    G: ChatGateway + Sync + 'static,
{
    let bearer = state.bearer(&headers);

    match state.gateway.list_conversations(bearer.as_deref()).await {
        Ok(conversations) => Json(conversations),
        Err(ChatError::Backend(ApiClientError::Status(401))) => Json(Vec::new()),
        Err(error) => {
            tracing::error!(%error, "Conversation list failed");
            Json(Vec::new())
        }
    }
}

/// POST /api/conversations
pub async fn create_conversation<G>(
    State(state): State<ChatAppState<G>>,
    headers: HeaderMap,
    Json(req): Json<CreateConversationRequest>,
) -> ChatResult<Json<ConversationResponse>>
where
    G: ChatGateway + Sync + 'static,
{
    let bearer = state.bearer(&headers);

    let conversation = state
        .gateway
        .create_conversation(&req.title, bearer.as_deref())
        .await?;

    tracing::info!(conversation_id = %conversation.id, "Conversation created");
    Ok(Json(conversation))
}
