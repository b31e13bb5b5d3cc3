//! CLI error types.

use folio_config::ConfigError;
use folio_feed::FeedError;
use folio_site::SessionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
