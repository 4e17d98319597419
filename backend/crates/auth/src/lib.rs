//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session record, bearer-token claims, gateway trait
//! - `application/` - Use cases, session codec, configuration
//! - `infra/` - HTTP implementation of the identity gateway
//! - `presentation/` - HTTP handlers, DTOs, router, auth-gate middleware
//!
//! ## Features
//! - Mobile-number + OTP authentication against the external identity API
//! - Stateless sessions: a signed token in a single HttpOnly cookie
//! - Per-request auth gate: redirect, silent refresh, or pass-through
//! - Silent access-token refresh within the refresh-eligibility window
//!
//! ## Security Model
//! - Session tokens signed with HMAC-SHA256 under a single server secret
//! - A token that fails verification is treated as an absent session
//! - Refresh-eligibility expiry is terminal: cookie cleared, forced sign-in

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::codec::SessionCodec;
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::identity::HttpIdentityGateway;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::claims::*;
    pub use crate::domain::session::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
