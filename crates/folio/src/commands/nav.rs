//! `folio nav` command implementation.

use clap::Args;

use crate::commands::{SiteArgs, start_router};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Locale to load (overrides config).
    #[arg(short, long)]
    lang: Option<String>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the locale session fails to load.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(self.lang.as_deref())?;
        let locale = &config.site_resolved.default_locale;

        let router = start_router(&config, locale).await?;
        output.muted(&router.header().site_title);
        for link in router.menu() {
            let line = format!("{}\t{}", link.href(), link.label);
            if link.active {
                output.highlight(&line);
            } else {
                output.print(&line);
            }
        }
        output.muted(&format!("locale: {locale}"));
        Ok(())
    }
}
