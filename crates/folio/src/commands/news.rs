//! `folio news` command implementation.

use clap::Args;

use crate::commands::{SiteArgs, news_feed};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the news command.
#[derive(Args)]
pub(crate) struct NewsArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl NewsArgs {
    /// Execute the news command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the feed cannot be fetched.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(None)?;

        let items = news_feed(&config).fetch_news().await?;
        tracing::info!(count = items.len(), "news fetched");
        output.print(&serde_json::to_string_pretty(items.as_ref())?);
        Ok(())
    }
}
