use thiserror::Error;

/// Failures talking to the food bank directory.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Base URL or endpoint path could not be turned into a URL
    #[error("Invalid data source URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Directory answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the JSON we expected
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
