//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem or network
//! access, including artificial latency for ordering tests.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores content in memory. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_content("content/pages/bg/home.md", "# Home")
///     .with_delay("content/pages/bg/home.md", Duration::from_millis(50));
///
/// let content = storage.read("content/pages/bg/home.md").await.unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    contents: RwLock<HashMap<String, String>>,
    delays: RwLock<HashMap<String, Duration>>,
    failures: RwLock<HashMap<String, StorageErrorKind>>,
    reads: AtomicUsize,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content for a path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_content(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.contents
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Delay reads of a path by `delay` (uses tokio time, so paused clocks apply).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_delay(self, path: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(path.into(), delay);
        self
    }

    /// Make reads of a path fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, path: impl Into<String>, kind: StorageErrorKind) -> Self {
        self.failures.write().unwrap().insert(path.into(), kind);
        self
    }

    /// Replace content for a path after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_content(&self, path: impl Into<String>, content: impl Into<String>) {
        self.contents
            .write()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Number of `read` calls served so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn read(&self, path: &str) -> Result<String, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.read().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(kind) = self.failures.read().unwrap().get(path).copied() {
            return Err(StorageError::new(kind)
                .with_path(path)
                .with_backend(BACKEND));
        }

        self.contents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_content() {
        let storage = MockStorage::new().with_content("content/pages/bg/a.md", "A");

        assert_eq!(storage.read("content/pages/bg/a.md").await.unwrap(), "A");
        assert_eq!(storage.read_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_missing_is_not_found() {
        let storage = MockStorage::new();

        let err = storage.read("nope").await.unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_mock_configured_failure() {
        let storage = MockStorage::new()
            .with_content("a", "A")
            .with_failure("a", StorageErrorKind::Unavailable);

        let err = storage.read("a").await.unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::Unavailable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_delay_uses_tokio_clock() {
        let storage = MockStorage::new()
            .with_content("slow", "S")
            .with_delay("slow", Duration::from_secs(5));
        let start = tokio::time::Instant::now();

        storage.read("slow").await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
