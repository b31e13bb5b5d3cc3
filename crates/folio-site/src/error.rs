//! Error types for site sessions, content dispatch and contact submission.

use folio_feed::FeedError;
use folio_storage::StorageError;

/// Fatal errors while starting a locale session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Locale bundle has no navigation entries.
    #[error("i18n.nav is empty or missing")]
    EmptyNavigation,
    /// Two navigation entries share an id.
    #[error("Duplicate navigation id: {0}")]
    DuplicateId(String),
    /// Locale bundle could not be read.
    #[error("Cannot load locale bundle: {0}")]
    Storage(#[from] StorageError),
    /// Locale bundle is not valid JSON.
    #[error("Invalid locale bundle: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while loading content for a route.
///
/// These never escape the router; they become an error card.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Cannot load: {0}")]
    Storage(#[from] StorageError),
    #[error("Invalid content document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Errors from posting the contact form.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Form endpoint answered with a non-success status.
    #[error("Send failed ({0})")]
    Status(u16),
    /// Request could not be completed.
    #[error("Send failed: {0}")]
    Transport(String),
}
