//! API client types and trait definitions
//!
//! This module defines the API contract that is implemented
//! by both native (reqwest) and WASM (gloo-net) HTTP clients.

use serde::{Deserialize, Serialize};

pub use crate::{LoginRequest, LoginResponse, PageRequest, Share, SharePage};

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
    /// Credentials rejected or login payload missing
    #[error("Auth error: {0}")]
    Auth(String),
}

impl ApiError {
    /// Whether the failure came from the transport rather than the server's answer
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// API endpoint definitions
pub mod endpoints {
    use crate::PageRequest;

    pub const LOGIN: &str = "/login";
    pub const SHARES: &str = "/shares";

    pub fn shares_page(req: &PageRequest) -> String {
        format!("{}?page={}&pageSize={}", SHARES, req.page, req.page_size)
    }
}

/// Trait defining the market API
///
/// Implemented by both native and WASM HTTP clients.
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait MarketApi {
    /// Exchange credentials for a session token.
    ///
    /// Any non-200 answer or a payload without a token is an `ApiError::Auth`.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Fetch one page of shares, in server order
    async fn fetch_shares(&self, req: PageRequest) -> Result<Vec<Share>, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
    /// Optional auth token for authenticated requests
    pub auth_token: Option<String>,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Value for the `Authorization` header, if a token is configured
    pub fn bearer(&self) -> Option<String> {
        self.auth_token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(format!("{}", err), "Server error (500): boom");

        let err = ApiError::Auth("login rejected with status 401".to_string());
        assert_eq!(
            format!("{}", err),
            "Auth error: login rejected with status 401"
        );
        assert!(!err.is_transport());
        assert!(ApiError::Network("offline".to_string()).is_transport());
    }

    #[test]
    fn shares_page_url() {
        let config = ApiClientConfig::new("http://localhost:3000/");
        let url = config.url(&endpoints::shares_page(&PageRequest::new(2, 17)));
        assert_eq!(url, "http://localhost:3000/shares?page=2&pageSize=17");
    }

    #[test]
    fn bearer_only_with_token() {
        let config = ApiClientConfig::new("http://api");
        assert_eq!(config.bearer(), None);
        let config = config.with_token("abc");
        assert_eq!(config.bearer().as_deref(), Some("Bearer abc"));
    }
}
