//! Domain Layer
//!
//! Session record, bearer-token claims, value objects, and the identity
//! gateway trait. No I/O lives here; implementations are in `infra/`.

pub mod claims;
pub mod gateway;
pub mod session;
pub mod value_object;
