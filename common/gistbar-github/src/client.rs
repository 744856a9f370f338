//! GitHub client implementation

use anyhow::{Result, anyhow};
use reqwest::{RequestBuilder, Response};

pub(crate) const API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub(crate) const USER_AGENT: &str = concat!("gistbar/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    /// If no token is provided, will try to read from GH_TOKEN environment variable
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.or_else(|| std::env::var("GH_TOKEN").ok()),
        }
    }

    /// Build a GET request for an API path with the standard headers applied
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.apply_headers(self.client.get(format!("{API_BASE}{path}")))
    }

    /// Build a PATCH request for an API path with the standard headers applied
    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.apply_headers(self.client.patch(format!("{API_BASE}{path}")))
    }

    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");

        match &self.token {
            Some(token) => request.header("Authorization", format!("token {}", token)),
            None => request,
        }
    }

    /// Turn a non-success response into a descriptive error naming the
    /// operation that failed
    pub(crate) fn fail_for_status(&self, operation: &str, response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_msg = if status.as_u16() == 403 {
            if self.token.is_none() {
                "Access forbidden. Set the GH_TOKEN environment variable."
            } else {
                "Access forbidden. Check your GH_TOKEN permissions."
            }
        } else {
            status.canonical_reason().unwrap_or("Unknown error")
        };

        Err(anyhow!(
            "{} failed ({} {})",
            operation,
            status.as_u16(),
            error_msg
        ))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
