//! Integration tests for the chat crate
//!
//! Exercises the degradation contract end to end against a mock RAG
//! gateway: asks fall back to a canned answer, an unauthenticated
//! conversation list comes back empty, and only creation surfaces errors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use platform::http::ApiClientError;
use serde_json::json;
use tower::ServiceExt;

use auth::application::codec::SessionCodec;
use auth::application::config::AuthConfig;

use crate::dto::{AskResponse, ConversationResponse};
use crate::error::{ChatError, ChatResult};
use crate::gateway::ChatGateway;
use crate::router::chat_router;

/// Mock RAG gateway with scripted outcomes and call recording
#[derive(Default)]
struct MockRagGateway {
    fail_ask: bool,
    fail_create: bool,
    list_error: Option<u16>,
    ask_calls: AtomicUsize,
    seen_bearer: Mutex<Option<String>>,
}

impl MockRagGateway {
    fn answer() -> AskResponse {
        AskResponse {
            answer: "Tenancy deposits are capped by statute.".to_string(),
            sources: vec!["Housing Act, s.5".to_string()],
            response_time_seconds: 0.42,
            citation_count: 1,
            citation_accuracy: 0.97,
            domain: "tenancy".to_string(),
            domain_label: "Tenancy law".to_string(),
            domain_confidence: 0.91,
        }
    }

    fn conversation() -> ConversationResponse {
        ConversationResponse {
            id: "conv-1".to_string(),
            title: "Deposit dispute".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
            message_count: 0,
        }
    }
}

impl ChatGateway for MockRagGateway {
    async fn ask(
        &self,
        _question: &str,
        _conversation_id: Option<&str>,
        bearer: Option<&str>,
    ) -> ChatResult<AskResponse> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_bearer.lock().unwrap() = bearer.map(str::to_string);
        if self.fail_ask {
            return Err(ChatError::Backend(ApiClientError::Timeout));
        }
        Ok(Self::answer())
    }

    async fn list_conversations(
        &self,
        _bearer: Option<&str>,
    ) -> ChatResult<Vec<ConversationResponse>> {
        if let Some(status) = self.list_error {
            return Err(ChatError::Backend(ApiClientError::Status(status)));
        }
        Ok(vec![Self::conversation()])
    }

    async fn create_conversation(
        &self,
        title: &str,
        _bearer: Option<&str>,
    ) -> ChatResult<ConversationResponse> {
        if self.fail_create {
            return Err(ChatError::Backend(ApiClientError::Status(502)));
        }
        Ok(ConversationResponse {
            title: title.to_string(),
            ..Self::conversation()
        })
    }
}

fn chat_app(gateway: Arc<MockRagGateway>) -> (Router, Arc<SessionCodec>, Arc<AuthConfig>) {
    let config = Arc::new(AuthConfig::development());
    let codec = Arc::new(SessionCodec::new(config.session_secret));
    let app = chat_router(gateway, codec.clone(), config.clone());
    (app, codec, config)
}

fn post_json(uri: &str, body: serde_json::Value, cookie: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ask_passes_the_answer_through() {
    let gateway = Arc::new(MockRagGateway::default());
    let (app, _, _) = chat_app(gateway.clone());

    let response = app
        .oneshot(post_json(
            "/chat/ask",
            json!({"question": "Is my deposit capped?"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answer"], json!("Tenancy deposits are capped by statute."));
    assert_eq!(body["citation_count"], json!(1));
    assert_eq!(gateway.ask_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn ask_backend_failure_degrades_to_fallback_answer() {
    let gateway = Arc::new(MockRagGateway {
        fail_ask: true,
        ..Default::default()
    });
    let (app, _, _) = chat_app(gateway.clone());

    let response = app
        .oneshot(post_json(
            "/chat/ask",
            json!({"question": "Is my deposit capped?"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answer"], json!(AskResponse::fallback().answer));
    assert_eq!(body["sources"], json!([]));
    assert_eq!(gateway.ask_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn ask_forwards_bearer_from_session_cookie() {
    let gateway = Arc::new(MockRagGateway::default());
    let (app, codec, config) = chat_app(gateway.clone());

    let now_ms = auth::domain::session::UserSession::now_ms();
    let session = auth::domain::session::UserSession {
        user_name: "09123456789".to_string(),
        full_name: "Test User".to_string(),
        pic: String::new(),
        exp: now_ms + 3_600_000,
        access_token: "bearer-abc".to_string(),
        session_id: "sess-1".to_string(),
        session_expiry: now_ms + 86_400_000,
    };
    let token = codec.encode(&session).unwrap();
    let cookie = format!("{}={}", config.cookie.name, token);

    let response = app
        .oneshot(post_json(
            "/chat/ask",
            json!({"question": "q"}),
            Some(cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        gateway.seen_bearer.lock().unwrap().as_deref(),
        Some("bearer-abc")
    );
}

#[tokio::test]
async fn unauthenticated_conversation_list_is_empty() {
    let gateway = Arc::new(MockRagGateway {
        list_error: Some(401),
        ..Default::default()
    });
    let (app, _, _) = chat_app(gateway);

    let response = app.oneshot(get_request("/conversations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn conversation_list_failure_degrades_to_empty() {
    let gateway = Arc::new(MockRagGateway {
        list_error: Some(502),
        ..Default::default()
    });
    let (app, _, _) = chat_app(gateway);

    let response = app.oneshot(get_request("/conversations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn conversation_list_passes_through_on_success() {
    let gateway = Arc::new(MockRagGateway::default());
    let (app, _, _) = chat_app(gateway);

    let response = app.oneshot(get_request("/conversations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], json!("conv-1"));
}

#[tokio::test]
async fn create_conversation_returns_the_record() {
    let gateway = Arc::new(MockRagGateway::default());
    let (app, _, _) = chat_app(gateway);

    let response = app
        .oneshot(post_json(
            "/conversations",
            json!({"title": "New matter"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], json!("New matter"));
}

#[tokio::test]
async fn create_conversation_surfaces_backend_failure() {
    let gateway = Arc::new(MockRagGateway {
        fail_create: true,
        ..Default::default()
    });
    let (app, _, _) = chat_app(gateway);

    let response = app
        .oneshot(post_json(
            "/conversations",
            json!({"title": "New matter"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
