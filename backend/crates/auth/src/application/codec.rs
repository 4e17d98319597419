//! Session Codec
//!
//! Encodes the session record into a compact signed token suitable for a
//! cookie value, and decodes it back with signature verification. The wire
//! form is `base64url(json).base64url(hmac-sha256)`, both unpadded.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::session::UserSession;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct SessionCodec {
    secret: [u8; 32],
}

impl SessionCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Serialize and sign a session record
    pub fn encode(&self, session: &UserSession) -> AuthResult<String> {
        let json = serde_json::to_vec(session)
            .map_err(|e| AuthError::Internal(format!("session serialization: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(&json);

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{payload}.{}", URL_SAFE_NO_PAD.encode(signature)))
    }

    /// Verify the signature and deserialize the session record.
    ///
    /// Rejects tokens whose refresh window ends before the access token
    /// expires; such a record cannot have been produced by `encode`.
    pub fn decode(&self, token: &str) -> AuthResult<UserSession> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;
        if signature.contains('.') {
            return Err(AuthError::SessionInvalid);
        }

        let signature_bytes = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::SessionInvalid)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature_bytes)
            .map_err(|_| AuthError::SessionInvalid)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AuthError::SessionInvalid)?;
        let session: UserSession =
            serde_json::from_slice(&json).map_err(|_| AuthError::SessionInvalid)?;

        if session.session_expiry < session.exp {
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCodec(..)")
    }
}
