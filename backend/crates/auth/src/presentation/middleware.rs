//! Auth Gate Middleware
//!
//! Per-request session gate for page routes. The decision is recomputed on
//! every request from the cookie alone; nothing is cached across requests.
//!
//! Branches, first match wins:
//! 1. no token, protected route  -> sign-in redirect with `callbackUrl`
//! 2. no token, not protected    -> pass through
//! 3. token fails to decode      -> sign-in redirect (no callback)
//! 4. fresh token on auth route  -> dashboard redirect
//! 5. refresh window over        -> delete cookie, sign-in redirect
//! 6. access expired, refreshable-> silent refresh, re-issue cookie, continue
//! 7. otherwise                  -> pass through

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use platform::client::extract_client_ip;
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::codec::SessionCodec;
use crate::application::config::AuthConfig;
use crate::application::refresh::RefreshSessionUseCase;
use crate::domain::gateway::IdentityGateway;
use crate::domain::session::UserSession;
use crate::presentation::routes::RoutePolicy;

/// State for the auth gate middleware
pub struct AuthGateState<G> {
    pub gateway: Arc<G>,
    pub codec: Arc<SessionCodec>,
    pub config: Arc<AuthConfig>,
    pub routes: Arc<RoutePolicy>,
}

impl<G> Clone for AuthGateState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            codec: self.codec.clone(),
            config: self.config.clone(),
            routes: self.routes.clone(),
        }
    }
}

/// Gate middleware, mounted with `axum::middleware::from_fn_with_state`
pub async fn auth_gate<G>(
    State(state): State<AuthGateState<G>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    G: IdentityGateway + Sync + 'static,
{
    let path = req.uri().path().to_string();

    if state.routes.is_exempt(&path) {
        return next.run(req).await;
    }

    let token = extract_cookie(req.headers(), &state.config.cookie.name);

    let Some(token) = token else {
        // Branches 1 and 2
        if state.routes.is_protected(&path) {
            let original = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or(path);
            return redirect_to_sign_in(&state.config, Some(&original));
        }
        return next.run(req).await;
    };

    // Branch 3: forged, malformed, or inconsistent token means no session
    let Ok(session) = state.codec.decode(&token) else {
        return redirect_to_sign_in(&state.config, None);
    };

    let now = UserSession::now_ms();
    let access_expired = session.access_expired(now);
    let refresh_expired = session.refresh_expired(now);

    // Branch 4
    if !access_expired && !refresh_expired && state.routes.is_auth_route(&path) {
        return Redirect::temporary(&state.config.dashboard_path).into_response();
    }

    // Branch 5: the refresh window is over, nothing left to renew
    if refresh_expired {
        tracing::info!(
            session_id = %session.session_id,
            client_ip = ?client_ip_of(&req),
            "Refresh window expired, forcing sign-in"
        );
        let mut response = redirect_to_sign_in(&state.config, None);
        response
            .headers_mut()
            .append(header::SET_COOKIE, delete_cookie_header(&state.config.cookie));
        return response;
    }

    // Branch 6
    if access_expired {
        let refresh = RefreshSessionUseCase::new(state.gateway.clone(), state.codec.clone());
        match refresh.execute(&session).await {
            Ok(output) => {
                // Cookie must be on the response before it is emitted
                let mut response = next.run(req).await;
                response.headers_mut().append(
                    header::SET_COOKIE,
                    set_cookie_header(&state.config.cookie, &output.session_token),
                );
                return response;
            }
            Err(error) => {
                tracing::warn!(
                    session_id = %session.session_id,
                    client_ip = ?client_ip_of(&req),
                    %error,
                    "Silent refresh failed, redirecting to sign-in"
                );
                // Drop the stale cookie so the next request does not retry
                let mut response = redirect_to_sign_in(&state.config, None);
                response.headers_mut().append(
                    header::SET_COOKIE,
                    delete_cookie_header(&state.config.cookie),
                );
                return response;
            }
        }
    }

    // Branch 7
    next.run(req).await
}

/// Client IP for gate logs: X-Forwarded-For first, then the peer address
fn client_ip_of(req: &Request<Body>) -> Option<IpAddr> {
    let direct = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    extract_client_ip(req.headers(), direct)
}

fn redirect_to_sign_in(config: &AuthConfig, callback: Option<&str>) -> Response {
    let location = match callback {
        Some(original) => {
            let encoded: String =
                url::form_urlencoded::byte_serialize(original.as_bytes()).collect();
            format!("{}?callbackUrl={}", config.login_path, encoded)
        }
        None => config.login_path.clone(),
    };
    Redirect::temporary(&location).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_redirect_encodes_callback() {
        let config = AuthConfig::default();
        let response = redirect_to_sign_in(&config, Some("/dashboard/settings?tab=2"));

        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(
            location.to_str().unwrap(),
            "/login?callbackUrl=%2Fdashboard%2Fsettings%3Ftab%3D2"
        );
    }

    #[test]
    fn test_sign_in_redirect_without_callback() {
        let config = AuthConfig::default();
        let response = redirect_to_sign_in(&config, None);

        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/login");
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header_over_peer() {
        let peer: SocketAddr = "10.0.0.9:4242".parse().unwrap();
        let mut req = Request::builder()
            .uri("/dashboard")
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));

        assert_eq!(client_ip_of(&req), Some("203.0.113.7".parse().unwrap()));

        let mut req = Request::builder()
            .uri("/dashboard")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));

        assert_eq!(client_ip_of(&req), Some(peer.ip()));
    }
}
