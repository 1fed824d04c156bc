//! # Auth Endpoints
//!
//! Login and registration, plus the client-side peek at the token's admin
//! claim.
//!
//! ## Authentication Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Authentication Flow                                │
//! │                                                                         │
//! │  ┌────────────────┐          ┌─────────────────┐                       │
//! │  │  Rideline app  │          │  REST backend   │                       │
//! │  └───────┬────────┘          └────────┬────────┘                       │
//! │          │  1. GET /login             │                                │
//! │          │     Basic user:pass        │                                │
//! │          │───────────────────────────►│  verify password hash          │
//! │          │  2. { token, username }    │                                │
//! │          │◄───────────────────────────│                                │
//! │          │                            │                                │
//! │          │  3. decode JWT payload locally → is_admin hint              │
//! │          │     (display gating only; the backend re-checks             │
//! │          │      every admin route; no signature verification          │
//! │          │      happens client-side)                                   │
//! │          │                            │                                │
//! │          │  4. Bearer <token> on every authenticated call              │
//! │          │───────────────────────────►│                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use tracing::debug;

use rideline_core::Session;

use crate::client::{ApiClient, AuthMode};
use crate::error::ApiResult;

/// What `GET /login` returns.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    username: String,
}

/// Auth endpoint group.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        AuthApi { client }
    }

    /// Exchanges credentials for a session.
    ///
    /// The admin flag is a display hint read from the token payload; the
    /// backend remains the authority on every admin route.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        debug!(%username, "Logging in");

        let client = self.client.with_auth(AuthMode::Basic {
            username: username.to_string(),
            password: password.to_string(),
        });
        let response: LoginResponse = client.get("login", &[]).await?;

        let is_admin = admin_claim(&response.token);
        Ok(Session {
            token: response.token,
            username: response.username,
            is_admin,
        })
    }

    /// Registers a new account. The username must be an email; the caller
    /// validates the shape before getting here.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        debug!(%username, "Registering");

        let client = self.client.with_auth(AuthMode::Basic {
            username: username.to_string(),
            password: password.to_string(),
        });
        let _: serde_json::Value = client.post_empty("register").await?;
        Ok(())
    }
}

/// Reads the `is_admin` claim out of a JWT payload segment.
///
/// Not a verification, just the base64url-decoded middle segment. Opaque
/// non-JWT tokens (the backend issued those in an earlier stage) yield
/// false.
pub fn admin_claim(token: &str) -> bool {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return false,
    };

    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let claims: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(_) => return false,
    };

    claims
        .get("is_admin")
        .or_else(|| claims.get("isAdmin"))
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_admin_claim_true() {
        let token = token_with_payload(r#"{"username":"root@ride.com","is_admin":true}"#);
        assert!(admin_claim(&token));
    }

    #[test]
    fn test_admin_claim_camel_case_fallback() {
        let token = token_with_payload(r#"{"username":"root@ride.com","isAdmin":true}"#);
        assert!(admin_claim(&token));
    }

    #[test]
    fn test_admin_claim_absent_or_false() {
        let token = token_with_payload(r#"{"username":"yu@yu.com"}"#);
        assert!(!admin_claim(&token));
        let token = token_with_payload(r#"{"is_admin":false}"#);
        assert!(!admin_claim(&token));
    }

    #[test]
    fn test_opaque_token_is_not_admin() {
        assert!(!admin_claim("basic_auth_token"));
        assert!(!admin_claim(""));
        assert!(!admin_claim("a.b"));
        assert!(!admin_claim("not!!base64.not!!base64.sig"));
    }
}
