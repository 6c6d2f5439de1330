use thiserror::Error;

/// Errors returned by the dashboard API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected rows.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// A failed load cycle, tagged with which of the two retrievals broke.
///
/// Either failure aborts the whole cycle: no partial KPI computation runs
/// and no partial data is exposed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("brand stats retrieval failed: {0}")]
    Stats(#[source] ClientError),

    #[error("video list retrieval failed: {0}")]
    Videos(#[source] ClientError),
}
