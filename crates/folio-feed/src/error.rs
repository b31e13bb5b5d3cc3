//! Error type for news feed ingestion.

/// Errors from fetching or decoding the news feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Feed endpoint answered with a non-success status.
    #[error("News fetch failed ({status})")]
    Unavailable { status: u16 },
    /// Request could not be completed (DNS, TLS, timeout, task failure).
    #[error("News transport error: {0}")]
    Transport(String),
    /// Response body is not wrapped in the expected `setResponse(...)` envelope.
    #[error("Unexpected spreadsheet response format")]
    Format,
    /// Envelope payload is not valid JSON.
    #[error("Invalid spreadsheet payload: {0}")]
    Payload(#[from] serde_json::Error),
}
