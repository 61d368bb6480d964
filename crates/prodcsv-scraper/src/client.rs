//! HTTP client for the product catalog endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;

/// HTTP client that retrieves the catalog document in a single request.
///
/// There is no retry policy: a non-2xx status, a transport failure, or a body
/// that is not JSON is returned to the caller as a typed error on the first
/// attempt.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the catalog at `url` and returns the body decoded as JSON.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` is not an absolute http(s) URL.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    /// - [`ScraperError::Deserialize`]: response body is not valid JSON.
    pub async fn fetch_catalog(&self, url: &str) -> Result<Value, ScraperError> {
        let url = Self::catalog_url(url)?;
        tracing::info!(%url, "fetching catalog");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "catalog response received");

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "catalog body read");

        serde_json::from_str::<Value>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("catalog from {url}"),
            source: e,
        })
    }

    /// Validates that `url` is an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] otherwise.
    fn catalog_url(url: &str) -> Result<Url, ScraperError> {
        let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(ScraperError::InvalidUrl {
                url: url.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
