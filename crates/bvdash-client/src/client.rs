//! HTTP client for the two dashboard API endpoints.
//!
//! Wraps `reqwest` with typed error handling and lenient row
//! deserialization. Both endpoints return plain JSON arrays; a `null` or
//! empty body is treated as an empty collection rather than an error.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use bvdash_core::{AppConfig, BrandSummary, VideoRecord};

use crate::error::ClientError;

const STATS_PATH: &str = "dashboard/stats";
const VIDEOS_PATH: &str = "videos";

/// Client for the dashboard API.
///
/// Holds the HTTP client and base URL. Use [`DashboardClient::new`] with the
/// application config, or [`DashboardClient::with_base_url`] to point at a
/// mock server in tests.
#[derive(Debug)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
    video_fetch_limit: u32,
}

impl DashboardClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.video_fetch_limit,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        video_fetch_limit: u32,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends endpoint paths instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            video_fetch_limit,
        })
    }

    /// Fetches the per-brand summary rows from `GET /dashboard/stats`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   brand rows.
    pub async fn fetch_brand_stats(&self) -> Result<Vec<BrandSummary>, ClientError> {
        let url = self.endpoint_url(STATS_PATH, &[])?;
        let rows: Vec<BrandSummary> = self.request_rows(url).await?;
        tracing::debug!(rows = rows.len(), "fetched brand stats");
        Ok(rows)
    }

    /// Fetches the raw video list from `GET /videos?skip=0&limit=<N>`.
    ///
    /// `N` is the configured fetch limit, sized to retrieve the full working
    /// set in a single request; there is no pagination loop.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   video rows.
    pub async fn fetch_videos(&self) -> Result<Vec<VideoRecord>, ClientError> {
        let limit = self.video_fetch_limit.to_string();
        let url = self.endpoint_url(VIDEOS_PATH, &[("skip", "0"), ("limit", &limit)])?;
        let rows: Vec<VideoRecord> = self.request_rows(url).await?;
        tracing::debug!(rows = rows.len(), "fetched video list");
        Ok(rows)
    }

    /// Builds the full request URL for an endpoint path plus query parameters.
    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as a
    /// JSON array of rows. An empty or `null` body yields an empty vec.
    async fn request_rows<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Option<Vec<T>> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(rows.unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
