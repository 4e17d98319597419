//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie management (build, extract, delete)
//! - Client identification (User-Agent, client IP)
//! - Outbound HTTP client for the external backend API

pub mod client;
pub mod cookie;
pub mod http;
