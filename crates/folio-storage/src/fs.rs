//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content resources from a local site
//! root directory.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::storage::{Storage, StorageError, validate_path};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at the directory that contains `content/`.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("site"));
/// let bundle = storage.read("content/i18n/bg.json").await?;
/// ```
pub struct FsStorage {
    /// Site root directory.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory containing the `content/` tree
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Storage for FsStorage {
    async fn read(&self, path: &str) -> Result<String, StorageError> {
        validate_path(path).map_err(|e| e.with_backend(BACKEND))?;
        let full_path = self.root.join(path);
        tracing::debug!(path = %full_path.display(), "reading content");
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|e| StorageError::io(e, Some(full_path)).with_backend(BACKEND))
    }
}
