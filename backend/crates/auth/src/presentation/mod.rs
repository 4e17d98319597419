//! Presentation Layer
//!
//! HTTP surface: route policy, the auth gate middleware, handlers.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;

pub use middleware::{AuthGateState, auth_gate};
pub use router::auth_router;
pub use routes::RoutePolicy;
