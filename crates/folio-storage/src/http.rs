//! HTTP storage implementation.
//!
//! Provides [`HttpStorage`] for reading content resources from a published
//! site root, the same way a browser would fetch them.

use std::time::Duration;

use async_trait::async_trait;
use ureq::Agent;

use crate::storage::{Storage, StorageError, StorageErrorKind, validate_path};

/// Backend identifier for error messages.
const BACKEND: &str = "Http";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Storage that reads resources relative to a remote base URL.
pub struct HttpStorage {
    agent: Agent,
    base_url: String,
}

impl HttpStorage {
    /// Create storage for a site published at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create storage with a custom request timeout.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for a resource path.
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Fetch a URL on the blocking pool.
fn get_text(agent: &Agent, url: &str, path: &str) -> Result<String, StorageError> {
    let response = agent.get(url).header("Cache-Control", "no-store").call().map_err(|e| {
        StorageError::new(StorageErrorKind::Unavailable)
            .with_path(path)
            .with_source(e)
    })?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(StorageError::http_status(status, path));
    }

    let mut body = response.into_body();
    body.read_to_string().map_err(|e| {
        StorageError::new(StorageErrorKind::Other)
            .with_path(path)
            .with_source(e)
    })
}

#[async_trait]
impl Storage for HttpStorage {
    async fn read(&self, path: &str) -> Result<String, StorageError> {
        validate_path(path).map_err(|e| e.with_backend(BACKEND))?;
        let url = self.url_for(path);
        let agent = self.agent.clone();
        let owned_path = path.to_owned();

        tracing::info!(%url, "fetching content");
        tokio::task::spawn_blocking(move || get_text(&agent, &url, &owned_path))
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Other)
                    .with_path(path)
                    .with_source(e)
            })?
            .map_err(|e| e.with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let storage = HttpStorage::new("https://example.org/");

        assert_eq!(
            storage.url_for("content/i18n/bg.json"),
            "https://example.org/content/i18n/bg.json"
        );
    }

    #[tokio::test]
    async fn test_read_rejects_invalid_path_before_request() {
        let storage = HttpStorage::new("https://example.invalid");

        let err = storage.read("/absolute").await.unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::InvalidPath);
        assert_eq!(err.backend, Some("Http"));
    }
}
