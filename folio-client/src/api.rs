//! Gallery API trait, wire DTOs, and the HTTP implementation.
//!
//! The `GalleryApi` trait abstracts over the backend so the store and
//! session can be exercised against an in-memory fake in tests. `HttpApi`
//! is the real thing: reqwest over the REST endpoints, bearer token on
//! every call that has one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use folio_core::domain::taxonomy;
use folio_core::{Like, User};

/// Structured error types for API operations.
///
/// Deliberately small: there is no rate-limit or retry machinery to report
/// on. A failure means the action did not happen and local state is as it
/// was.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or an unexpected non-2xx response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected a submission as malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing/expired token or rejected credentials.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The response body did not parse as expected.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The client-local token file could not be written.
    #[error("token storage error: {0}")]
    Storage(String),
}

/// A portfolio entry as the backend actually sends it.
///
/// `ogp_data` and `comments` arrive either as structured JSON or as
/// JSON-encoded strings depending on the backend code path, so they are
/// kept as raw values here and normalized exactly once (see
/// [`crate::normalize`]).
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub comments: Value,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub ogp_data: Value,
}

/// Fields of a new submission. Validated client-side against the taxonomy
/// before the round trip; the server remains authoritative.
#[derive(Debug, Clone, Serialize)]
pub struct NewEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub industry: String,
    pub experience: String,
    pub color: String,
}

impl NewEntry {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".into()));
        }
        if self.url.trim().is_empty() {
            return Err(ApiError::Validation("url must not be empty".into()));
        }
        if !taxonomy::is_known_industry(&self.industry) {
            return Err(ApiError::Validation(format!(
                "unknown industry: {}",
                self.industry
            )));
        }
        if !taxonomy::is_known_experience(&self.experience) {
            return Err(ApiError::Validation(format!(
                "unknown experience bracket: {}",
                self.experience
            )));
        }
        if !taxonomy::is_known_color(&self.color) {
            return Err(ApiError::Validation(format!("unknown color: {}", self.color)));
        }
        Ok(())
    }
}

/// Successful `/login` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Error payload shape the backend uses. Either field may carry the text.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn text(self, fallback: &str) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// The remote gallery API.
///
/// One method per endpoint; implementations hold the bearer token so
/// callers never thread it through. Swap in a fake for tests.
pub trait GalleryApi {
    /// GET /portfolios — the full entry list.
    fn fetch_portfolios(&self) -> Result<Vec<RawEntry>, ApiError>;

    /// POST /portfolios — create an entry.
    fn create_portfolio(&self, entry: &NewEntry) -> Result<(), ApiError>;

    /// POST /portfolios/{id}/like — record a like for the current user.
    fn like(&self, entry_id: u64) -> Result<(), ApiError>;

    /// POST /portfolios/{id}/comments — append a comment.
    fn comment(&self, entry_id: u64, content: &str) -> Result<(), ApiError>;

    /// POST /login — returns the user and a bearer token.
    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// POST /logout — invalidate the server-side session.
    fn logout(&self) -> Result<(), ApiError>;

    /// GET /user — session restore.
    fn current_user(&self) -> Result<User, ApiError>;

    /// Install or discard the bearer token used by subsequent calls.
    fn set_token(&mut self, token: Option<String>);
}

/// `GalleryApi` over HTTP.
pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        self.authorize(req)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Extract the server's message from an error response body.
    fn error_text(resp: reqwest::blocking::Response, fallback: &str) -> String {
        resp.json::<ErrorBody>()
            .map(|body| body.text(fallback))
            .unwrap_or_else(|_| fallback.to_string())
    }
}

impl GalleryApi for HttpApi {
    fn fetch_portfolios(&self) -> Result<Vec<RawEntry>, ApiError> {
        let resp = self.send(self.client.get(self.url("/portfolios")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Network(format!("HTTP {status} fetching portfolios")));
        }
        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn create_portfolio(&self, entry: &NewEntry) -> Result<(), ApiError> {
        let resp = self.send(self.client.post(self.url("/portfolios")).json(entry))?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            return Err(ApiError::Validation(Self::error_text(
                resp,
                "submission rejected",
            )));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth("login required to submit".into()));
        }
        if !status.is_success() {
            return Err(ApiError::Network(format!("HTTP {status} creating entry")));
        }
        Ok(())
    }

    fn like(&self, entry_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("/portfolios/{entry_id}/like"));
        let resp = self.send(self.client.post(url))?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth("login required to like".into()));
        }
        if !status.is_success() {
            return Err(ApiError::Network(format!("HTTP {status} liking entry {entry_id}")));
        }
        Ok(())
    }

    fn comment(&self, entry_id: u64, content: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/portfolios/{entry_id}/comments"));
        let body = serde_json::json!({ "content": content });
        let resp = self.send(self.client.post(url).json(&body))?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth("login required to comment".into()));
        }
        if !status.is_success() {
            return Err(ApiError::Network(format!(
                "HTTP {status} commenting on entry {entry_id}"
            )));
        }
        Ok(())
    }

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = self.send(self.client.post(self.url("/login")).json(&body))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Auth(Self::error_text(resp, "login rejected")));
        }
        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn logout(&self) -> Result<(), ApiError> {
        let resp = self.send(self.client.post(self.url("/logout")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Auth(format!("HTTP {status} on logout")));
        }
        Ok(())
    }

    fn current_user(&self) -> Result<User, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::Auth("no stored token".into()));
        }
        let resp = self.send(self.client.get(self.url("/user")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Auth(format!("HTTP {status} restoring session")));
        }
        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
