//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers. The backend
//! identity API binds OTP sessions to the requesting device, so the
//! User-Agent string is forwarded on verify/resend calls.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Extract the User-Agent string from request headers
///
/// Returns an empty string when the header is missing or not valid UTF-8;
/// the backend accepts an empty userAgent and the value is informational.
pub fn extract_user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP. Used for logging only.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // Check X-Forwarded-For header (first IP in the list)
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}
