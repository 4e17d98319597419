//! Outbound HTTP client for the external backend API
//!
//! Wraps a shared `reqwest::Client` with the backend base URL, a fixed
//! 30-second timeout and request/response logging. Calls never retry;
//! callers decide what a failure means.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed timeout for all outbound calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error from an outbound backend call
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// Backend base URL is not configured (API_URL unset)
    #[error("Backend API base URL is not configured")]
    NotConfigured,

    /// Request exceeded the fixed timeout
    #[error("Backend request timed out")]
    Timeout,

    /// Transport-level failure (DNS, connect, TLS, ...)
    #[error("Backend request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Backend response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiClientError {
    /// HTTP status of the backend response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Shared client for the external backend API
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL
    ///
    /// `base_url` is optional: when absent every call fails with
    /// [`ApiClientError::NotConfigured`] instead of panicking, so the
    /// service starts and degrades per endpoint.
    pub fn new(base_url: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        let base_url = base_url.map(|url| url.trim_end_matches('/').to_string());

        if base_url.is_none() {
            tracing::warn!("API_URL is not set, backend calls will fail");
        }

        Self { base_url, http }
    }

    /// Whether a base URL is configured
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// POST a JSON body to a backend path and decode a JSON response
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.join(path)?;
        let mut request = self.http.post(&url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        self.execute("POST", &url, request).await
    }

    /// POST a JSON body to an absolute URL (used for the identity host)
    pub async fn post_json_url<B, T>(&self, url: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(url).json(body);
        self.execute("POST", url, request).await
    }

    /// GET a backend path and decode a JSON response
    pub async fn get_json<T>(&self, path: &str, bearer: Option<&str>) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.join(path)?;
        let mut request = self.http.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        self.execute("GET", &url, request).await
    }

    fn join(&self, path: &str) -> Result<String, ApiClientError> {
        let base = self.base_url.as_deref().ok_or(ApiClientError::NotConfigured)?;
        Ok(format!("{base}{path}"))
    }

    async fn execute<T>(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = method, url = url, "Backend request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(method = method, url = url, "Backend request timed out");
                ApiClientError::Timeout
            } else {
                tracing::error!(method = method, url = url, error = %e, "Backend request failed");
                ApiClientError::Network(e)
            }
        })?;

        let status = response.status();
        tracing::debug!(method = method, url = url, status = %status, "Backend response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                method = method,
                url = url,
                status = %status,
                body = %body,
                "Backend returned error status"
            );
            return Err(ApiClientError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(method = method, url = url, error = %e, "Backend response decode failed");
            ApiClientError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client() {
        let client = ApiClient::new(None);
        assert!(!client.is_configured());
        assert!(matches!(
            client.join("/auth/login"),
            Err(ApiClientError::NotConfigured)
        ));
    }

    #[test]
    fn test_join_trims_trailing_slash() {
        let client = ApiClient::new(Some("https://api.example.com/".to_string()));
        assert!(client.is_configured());
        assert_eq!(
            client.join("/auth/login").unwrap(),
            "https://api.example.com/auth/login"
        );
    }

    #[test]
    fn test_error_status_accessor() {
        assert_eq!(ApiClientError::Status(502).status(), Some(502));
        assert_eq!(ApiClientError::Timeout.status(), None);
        assert_eq!(ApiClientError::NotConfigured.status(), None);
    }
}
