//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for reading content resources,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Path Convention
//!
//! All path parameters are **site-relative resource paths** using `/` as
//! separator, exactly as a browser would request them relative to the site
//! root:
//! - `"content/i18n/bg.json"` - locale bundle
//! - `"content/pages/en/about.md"` - markdown page
//! - `"content/galleries/bg/field-day.json"` - gallery index
//!
//! Paths must not be absolute and must not contain `..` segments.

use std::path::PathBuf;

use async_trait::async_trait;

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (absolute or escaping the site root).
    InvalidPath,
    /// Backend is temporarily unavailable or answered with an error status.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Http", "Mock").
    pub backend: Option<&'static str>,
    /// HTTP status code for HTTP-backed failures.
    pub status: Option<u16>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            status: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach an HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => StorageErrorKind::Timeout,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Create an error from a non-success HTTP status.
    #[must_use]
    pub fn http_status(status: u16, path: impl Into<PathBuf>) -> Self {
        let kind = match status {
            404 | 410 => StorageErrorKind::NotFound,
            401 | 403 => StorageErrorKind::PermissionDenied,
            408 | 504 => StorageErrorKind::Timeout,
            _ => StorageErrorKind::Unavailable,
        };
        Self::new(kind).with_status(status).with_path(path)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind (status): message (path: content/pages/bg/x.md)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Unavailable => "Unavailable",
            StorageErrorKind::Timeout => "Timeout",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(status) = self.status {
            write!(f, " ({status})")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Check that a resource path stays inside the site root.
///
/// # Errors
///
/// Returns [`StorageErrorKind::InvalidPath`] for absolute paths, empty paths,
/// or paths containing `..` segments.
pub fn validate_path(path: &str) -> Result<(), StorageError> {
    let escapes = path.split('/').any(|segment| segment == "..");
    if path.is_empty() || path.starts_with('/') || path.contains('\\') || escapes {
        return Err(StorageError::new(StorageErrorKind::InvalidPath).with_path(path));
    }
    Ok(())
}

/// Storage abstraction for content resource retrieval.
///
/// Provides a unified interface for reading site resources regardless of
/// backend (local directory, remote site root, in-memory mock).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a resource as UTF-8 text.
    ///
    /// # Arguments
    ///
    /// * `path` - Site-relative resource path (e.g., `"content/pages/bg/home.md"`)
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the resource doesn't exist or can't be read.
    async fn read(&self, path: &str) -> Result<String, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_backend_status_and_path() {
        let err = StorageError::http_status(500, "content/pages/bg/home.md").with_backend("Http");

        assert_eq!(
            err.to_string(),
            "[Http] Unavailable (500) (path: content/pages/bg/home.md)"
        );
    }

    #[test]
    fn test_http_status_maps_not_found() {
        let err = StorageError::http_status(404, "x");

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn test_io_error_maps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = StorageError::io(io, Some(PathBuf::from("a")));

        assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validate_path_accepts_relative() {
        assert!(validate_path("content/pages/bg/home.md").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_escape() {
        for bad in ["", "/etc/passwd", "content/../../secret", "..", "a\\b"] {
            let err = validate_path(bad).unwrap_err();
            assert_eq!(err.kind(), StorageErrorKind::InvalidPath, "path {bad:?}");
        }
    }
}
