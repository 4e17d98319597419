//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::application::config::{AuthConfig, DEFAULT_REFRESH_URL};
use auth::infra::identity::HttpIdentityGateway;
use auth::presentation::middleware::{AuthGateState, auth_gate};
use auth::presentation::routes::RoutePolicy;
use auth::{SessionCodec, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use base64::Engine;
use base64::engine::general_purpose;
use chat::{HttpChatGateway, chat_router};
use platform::http::ApiClient;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,chat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    let refresh_url =
        env::var("REFRESH_TOKEN_URL").unwrap_or_else(|_| DEFAULT_REFRESH_URL.to_string());
    let auth_config = Arc::new(AuthConfig {
        refresh_url,
        ..auth_config
    });

    // Backend API client; missing API_URL degrades outbound calls, it does
    // not prevent startup
    let api = ApiClient::new(env::var("API_URL").ok());

    let codec = Arc::new(SessionCodec::new(auth_config.session_secret));
    let gateway = Arc::new(HttpIdentityGateway::new(
        api.clone(),
        auth_config.refresh_url.clone(),
    ));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let gate_state = AuthGateState {
        gateway: gateway.clone(),
        codec: codec.clone(),
        config: auth_config.clone(),
        routes: Arc::new(RoutePolicy::default()),
    };

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(gateway, codec.clone(), auth_config.clone()),
        )
        .nest(
            "/api",
            chat_router(Arc::new(HttpChatGateway::new(api)), codec, auth_config),
        )
        .layer(middleware::from_fn_with_state(
            gate_state,
            auth_gate::<HttpIdentityGateway>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
