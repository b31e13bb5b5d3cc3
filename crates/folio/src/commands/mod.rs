//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod news;
pub(crate) mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_feed::{FeedSource, HttpTransport, NewsFeed};
use folio_site::{HiddenIds, Router, SubnavGroups};
use folio_storage::{FsStorage, HttpStorage, Storage};

pub(crate) use nav::NavArgs;
pub(crate) use news::NewsArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root directory containing `content/` (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Read content from a published site instead of a directory (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// News spreadsheet id or URL (overrides config).
    #[arg(long, env = "NEWS_SHEET_ID")]
    sheet_id: Option<String>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration with these overrides and an optional locale.
    pub(crate) fn load_config(&self, locale: Option<&str>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            locale: locale.map(str::to_owned),
            base_url: self.base_url.clone(),
            sheet_id: self.sheet_id.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Content storage for the configured site.
pub(crate) fn storage(config: &Config) -> Arc<dyn Storage> {
    match &config.site_resolved.base_url {
        Some(base_url) => {
            tracing::info!(%base_url, "reading content over HTTP");
            Arc::new(HttpStorage::with_timeout(base_url, config.news.timeout()))
        }
        None => {
            tracing::info!(root = %config.site_resolved.root.display(), "reading content from directory");
            Arc::new(FsStorage::new(config.site_resolved.root.clone()))
        }
    }
}

/// News feed for the configured sheet.
pub(crate) fn news_feed(config: &Config) -> NewsFeed {
    let source = FeedSource::new(
        Some(&config.news.sheet_id),
        &config.news.gid,
        &config.news.endpoint,
    );
    NewsFeed::new(Arc::new(HttpTransport::new(config.news.timeout())), source)
}

/// Start a router for `locale`.
pub(crate) async fn start_router(config: &Config, locale: &str) -> Result<Router, CliError> {
    let router = Router::start(
        storage(config),
        Arc::new(news_feed(config)),
        locale,
        SubnavGroups::from_config(config.navigation.subnav.as_ref()),
        HiddenIds::from_config(config.navigation.hidden.as_deref()),
    )
    .await?;
    Ok(router.with_min_submit(config.contact.min_submit()))
}
