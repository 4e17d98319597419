//! Infrastructure Layer
//!
//! HTTP implementation of the identity gateway.

pub mod identity;

pub use identity::HttpIdentityGateway;
