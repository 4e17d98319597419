//! HTTP Identity Gateway
//!
//! Talks to the external identity backend over JSON. Auth endpoints live
//! under the configured API base URL; token refresh goes to an absolute
//! URL on the identity host.

use platform::http::ApiClient;
use serde::Serialize;

use crate::domain::gateway::{CodeDelivery, IdentityGateway, SignOutAck, VerifiedUser};
use crate::domain::value_object::{Mobile, OtpCode};
use crate::error::AuthResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeBody<'a> {
    mobile: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyCodeBody<'a> {
    mobile: &'a str,
    code: &'a str,
    user_agent: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResendCodeBody<'a> {
    mobile: &'a str,
    user_agent: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionIdBody<'a> {
    session_id: &'a str,
}

/// Identity gateway backed by the external HTTP API
#[derive(Debug, Clone)]
pub struct HttpIdentityGateway {
    api: ApiClient,
    refresh_url: String,
}

impl HttpIdentityGateway {
    pub fn new(api: ApiClient, refresh_url: impl Into<String>) -> Self {
        Self {
            api,
            refresh_url: refresh_url.into(),
        }
    }
}

impl IdentityGateway for HttpIdentityGateway {
    async fn send_code(&self, mobile: &Mobile) -> AuthResult<CodeDelivery> {
        let body = SendCodeBody {
            mobile: mobile.as_str(),
        };
        Ok(self.api.post_json("/auth/login", &body, None).await?)
    }

    async fn verify_code(
        &self,
        mobile: &Mobile,
        code: &OtpCode,
        user_agent: &str,
    ) -> AuthResult<VerifiedUser> {
        let body = VerifyCodeBody {
            mobile: mobile.as_str(),
            code: code.as_str(),
            user_agent,
        };
        Ok(self.api.post_json("/auth/otp/verify", &body, None).await?)
    }

    async fn resend_code(&self, mobile: &Mobile, user_agent: &str) -> AuthResult<CodeDelivery> {
        let body = ResendCodeBody {
            mobile: mobile.as_str(),
            user_agent,
        };
        Ok(self.api.post_json("/auth/otp/send", &body, None).await?)
    }

    async fn sign_out(&self, session_id: &str) -> AuthResult<SignOutAck> {
        let body = SessionIdBody { session_id };
        Ok(self.api.post_json("/auth/signout", &body, None).await?)
    }

    async fn refresh_token(&self, session_id: &str) -> AuthResult<VerifiedUser> {
        let body = SessionIdBody { session_id };
        Ok(self.api.post_json_url(&self.refresh_url, &body).await?)
    }
}
