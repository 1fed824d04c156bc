//! # API Client
//!
//! The shared HTTP plumbing every endpoint group builds on.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Flow                                     │
//! │                                                                         │
//! │  CarsApi::list(query)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::get("cars", query)                                         │
//! │       │  join path onto base URL                                       │
//! │       │  attach Authorization header (Bearer / Basic)                  │
//! │       ▼                                                                 │
//! │  reqwest ──► backend                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2xx?  ── yes ──► deserialize JSON body ──► typed value                │
//! │       │                                                                 │
//! │       └── no ───► read {"error": ...} if present ──► ApiError          │
//! │                   (401/403/404 get dedicated variants)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use rideline_core::Session;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Auth Mode
// =============================================================================

/// How requests authenticate themselves.
///
/// The backend grew through two stages: Basic credentials on the auth
/// endpoints, bearer tokens everywhere else. Both survive here.
#[derive(Debug, Clone, Default)]
pub enum AuthMode {
    /// Anonymous request (public catalog, sales).
    #[default]
    None,
    /// `Authorization: Bearer <token>` from the signed-in session.
    Bearer(String),
    /// `Authorization: Basic base64(username:password)` for login/register.
    Basic { username: String, password: String },
}

impl AuthMode {
    /// The `Authorization` header value, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AuthMode::None => None,
            AuthMode::Bearer(token) => Some(format!("Bearer {token}")),
            AuthMode::Basic { username, password } => {
                let credentials = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {credentials}"))
            }
        }
    }
}

// =============================================================================
// Api Client
// =============================================================================

/// Shared HTTP client: connection pool, base URL and auth mode.
///
/// Cloning is cheap (the pool is reference-counted); endpoint groups each
/// hold their own clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    auth: AuthMode,
}

impl ApiClient {
    /// Builds a client from configuration. Anonymous until an auth mode is
    /// attached.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        // Joining relative paths replaces the last segment unless the base
        // path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base,
            auth: AuthMode::None,
        })
    }

    /// A copy of this client with a different auth mode.
    pub fn with_auth(&self, auth: AuthMode) -> Self {
        ApiClient {
            http: self.http.clone(),
            base: self.base.clone(),
            auth,
        }
    }

    /// A copy carrying the session's bearer token, or anonymous when no
    /// session exists.
    pub fn for_session(&self, session: Option<&Session>) -> Self {
        match session {
            Some(s) => self.with_auth(AuthMode::Bearer(s.token.clone())),
            None => self.with_auth(AuthMode::None),
        }
    }

    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }

    /// Joins an endpoint path (no leading slash) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    // =========================================================================
    // Verb Helpers
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let request = self.http.get(self.url(path)?).query(query);
        self.execute(request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.http.post(self.url(path)?).json(body);
        self.execute(request).await
    }

    /// POST with no body (the favorite-add mutation sends only headers).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.http.post(self.url(path)?);
        self.execute(request).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.http.put(self.url(path)?).json(body);
        self.execute(request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.http.delete(self.url(path)?);
        self.execute(request).await
    }

    // =========================================================================
    // Response Handling
    // =========================================================================

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = match self.auth.header_value() {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = backend_message(response.text().await.ok())
                .unwrap_or_else(|| default_reason(status));
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Pulls the backend's human-readable message out of an error body.
///
/// Flask responds with `{"error": "..."}` on rejections; some legacy paths
/// use `{"message": "..."}`.
fn backend_message(body: Option<String>) -> Option<String> {
    let body = body?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

fn default_reason(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_basic_header_encodes_credentials() {
        let auth = AuthMode::Basic {
            username: "user".into(),
            password: "pass".into(),
        };
        // base64("user:pass")
        assert_eq!(auth.header_value().unwrap(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_bearer_header() {
        let auth = AuthMode::Bearer("abc.def.ghi".into());
        assert_eq!(auth.header_value().unwrap(), "Bearer abc.def.ghi");
        assert!(AuthMode::None.header_value().is_none());
    }

    #[test]
    fn test_url_join_keeps_base_path() {
        let c = client("http://localhost:5000");
        assert_eq!(c.url("cars").unwrap().as_str(), "http://localhost:5000/cars");

        // A base with a path prefix must keep it.
        let c = client("http://gateway.local/rental");
        assert_eq!(
            c.url("cars").unwrap().as_str(),
            "http://gateway.local/rental/cars"
        );
    }

    #[test]
    fn test_url_join_nested_path() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.url("favorites/yu@yu.com/add/3").unwrap().path(),
            "/favorites/yu@yu.com/add/3"
        );
    }

    #[test]
    fn test_backend_message_extraction() {
        assert_eq!(
            backend_message(Some(r#"{"error": "Car not found"}"#.into())),
            Some("Car not found".into())
        );
        assert_eq!(
            backend_message(Some(r#"{"message": "removed", "success": true}"#.into())),
            Some("removed".into())
        );
        assert_eq!(backend_message(Some("<html>oops</html>".into())), None);
        assert_eq!(backend_message(None), None);
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "not a url".into(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
