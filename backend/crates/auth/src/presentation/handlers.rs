//! HTTP Handlers
//!
//! Handlers for the OTP sign-in flow and the session endpoint. Backend
//! failures on the code send/verify paths are converted into a generic
//! in-payload failure instead of an error status, so backend detail never
//! reaches the client.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use platform::client::extract_user_agent;
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::codec::SessionCodec;
use crate::application::config::AuthConfig;
use crate::application::{
    RequestCodeUseCase, ResendCodeUseCase, SignOutUseCase, VerifyCodeUseCase,
};
use crate::domain::gateway::IdentityGateway;
use crate::domain::value_object::{Mobile, OtpCode};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CodeDeliveryResponse, ResendCodeRequest, SendCodeRequest, SignOutResponse,
    VerifyCodeRequest, VerifyCodeResponse,
};

/// Generic failure shown when the identity backend cannot deliver a code
const SEND_CODE_FAILED: &str = "Unable to send the verification code. Please try again.";
/// Generic failure shown when verification does not go through
const VERIFY_FAILED: &str = "Verification failed. Please check the code and try again.";
/// Generic failure shown when sign-out does not go through
const SIGN_OUT_FAILED: &str = "Sign-out failed. Please try again.";

/// Shared state for auth handlers
pub struct AuthAppState<G> {
    pub gateway: Arc<G>,
    pub codec: Arc<SessionCodec>,
    pub config: Arc<AuthConfig>,
}

impl<G> Clone for AuthAppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            codec: self.codec.clone(),
            config: self.config.clone(),
        }
    }
}

fn swallows_backend_detail(error: &AuthError) -> bool {
    matches!(error, AuthError::Backend(_) | AuthError::BackendRejected)
}

/// The verify path additionally swallows an undecodable bearer token: the
/// backend answered 200 but the bundle is unusable, which the client sees
/// as a failed verification, not a server fault.
fn verify_swallows(error: &AuthError) -> bool {
    swallows_backend_detail(error) || matches!(error, AuthError::InvalidAccessToken)
}

/// POST /api/auth/login
pub async fn send_code<G>(
    State(state): State<AuthAppState<G>>,
    Json(req): Json<SendCodeRequest>,
) -> AuthResult<Json<CodeDeliveryResponse>>
where
    G: IdentityGateway + Sync + 'static,
{
    let mobile = Mobile::new(&req.mobile)?;

    let use_case = RequestCodeUseCase::new(state.gateway.clone());
    match use_case.execute(mobile).await {
        Ok(delivery) => Ok(Json(CodeDeliveryResponse {
            success: true,
            message: delivery.message,
        })),
        Err(error) if swallows_backend_detail(&error) => Ok(Json(CodeDeliveryResponse {
            success: false,
            message: Some(SEND_CODE_FAILED.to_string()),
        })),
        Err(error) => Err(error),
    }
}

/// POST /api/auth/otp/verify
pub async fn verify_code<G>(
    State(state): State<AuthAppState<G>>,
    headers: HeaderMap,
    Json(req): Json<VerifyCodeRequest>,
) -> AuthResult<impl IntoResponse>
where
    G: IdentityGateway + Sync + 'static,
{
    let mobile = Mobile::new(&req.mobile)?;
    let code = OtpCode::new(&req.code)?;
    let user_agent = extract_user_agent(&headers);

    let use_case = VerifyCodeUseCase::new(state.gateway.clone(), state.codec.clone());
    match use_case.execute(mobile, code, &user_agent).await {
        Ok(output) => {
            let cookie = set_cookie_header(&state.config.cookie, &output.session_token);
            Ok((
                StatusCode::OK,
                [(header::SET_COOKIE, cookie)],
                Json(VerifyCodeResponse {
                    success: true,
                    session: Some(output.session),
                    message: None,
                }),
            )
                .into_response())
        }
        Err(error) if verify_swallows(&error) => {
            tracing::warn!(%error, "Code verification failed");
            Ok((
                StatusCode::OK,
                Json(VerifyCodeResponse {
                    success: false,
                    session: None,
                    message: Some(VERIFY_FAILED.to_string()),
                }),
            )
                .into_response())
        }
        Err(error) => Err(error),
    }
}

/// POST /api/auth/otp/send
pub async fn resend_code<G>(
    State(state): State<AuthAppState<G>>,
    headers: HeaderMap,
    Json(req): Json<ResendCodeRequest>,
) -> AuthResult<Json<CodeDeliveryResponse>>
where
    G: IdentityGateway + Sync + 'static,
{
    let mobile = Mobile::new(&req.mobile)?;
    let user_agent = extract_user_agent(&headers);

    let use_case = ResendCodeUseCase::new(state.gateway.clone());
    match use_case.execute(mobile, &user_agent).await {
        Ok(delivery) => Ok(Json(CodeDeliveryResponse {
            success: true,
            message: delivery.message,
        })),
        Err(error) if swallows_backend_detail(&error) => Ok(Json(CodeDeliveryResponse {
            success: false,
            message: Some(SEND_CODE_FAILED.to_string()),
        })),
        Err(error) => Err(error),
    }
}

/// POST /api/auth/signout
///
/// No-op success when no session cookie is present. The cookie is deleted
/// only after the backend acknowledges the sign-out; on failure it stays in
/// place so the user can retry. An undecodable cookie is an absent session
/// and is simply dropped.
pub async fn sign_out<G>(
    State(state): State<AuthAppState<G>>,
    headers: HeaderMap,
) -> axum::response::Response
where
    G: IdentityGateway + Sync + 'static,
{
    let Some(token) = extract_cookie(&headers, &state.config.cookie.name) else {
        return Json(SignOutResponse {
            success: true,
            message: None,
        })
        .into_response();
    };

    let delete = delete_cookie_header(&state.config.cookie);

    let Ok(session) = state.codec.decode(&token) else {
        return (
            [(header::SET_COOKIE, delete)],
            Json(SignOutResponse {
                success: true,
                message: None,
            }),
        )
            .into_response();
    };

    let use_case = SignOutUseCase::new(state.gateway.clone());
    match use_case.execute(&session.session_id).await {
        Ok(()) => (
            [(header::SET_COOKIE, delete)],
            Json(SignOutResponse {
                success: true,
                message: None,
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::warn!(session_id = %session.session_id, %error, "Sign-out failed");
            Json(SignOutResponse {
                success: false,
                message: Some(SIGN_OUT_FAILED.to_string()),
            })
            .into_response()
        }
    }
}

/// GET /api/auth/session
///
/// Returns the decoded session record, or 401 with an empty body when no
/// valid session cookie exists.
pub async fn session<G>(
    State(state): State<AuthAppState<G>>,
    headers: HeaderMap,
) -> axum::response::Response
where
    G: IdentityGateway + Sync + 'static,
{
    let Some(token) = extract_cookie(&headers, &state.config.cookie.name) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state.codec.decode(&token) {
        Ok(session) => Json(session).into_response(),
        Err(_) => StatusCode::UNAUTHORIZED.into_response(),
    }
}
