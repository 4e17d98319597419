//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session cookie settings
    pub cookie: CookieConfig,
    /// Path unauthenticated users are redirected to
    pub login_path: String,
    /// Path authenticated users land on after sign-in
    pub dashboard_path: String,
    /// Absolute URL of the identity refresh-token endpoint
    pub refresh_url: String,
}

/// Default refresh-token endpoint on the identity host
pub const DEFAULT_REFRESH_URL: &str =
    "https://general-api.classbon.com/api/identity/refresh-token";

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            cookie: CookieConfig::default(),
            login_path: "/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
            refresh_url: DEFAULT_REFRESH_URL.to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }
}
