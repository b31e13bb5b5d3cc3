//! `folio render` command implementation.

use clap::{Args, ValueEnum};
use folio_site::layout::{render_page, render_startup_error};
use folio_site::{HeaderTexts, MenuLink, PageView, locale_from_url, url_with_locale};
use serde::Serialize;
use url::Url;

use crate::commands::{SiteArgs, start_router};
use crate::error::CliError;
use crate::output::Output;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Full HTML page document.
    #[default]
    Html,
    /// Page view, menu and header as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Route to render: `#id`, `id/detail`, or a site URL with `?lang=` and a fragment.
    target: Option<String>,

    /// Locale to load (overrides the URL and config).
    #[arg(short, long)]
    lang: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

/// Route and locale taken from the render target.
#[derive(Debug, PartialEq, Eq)]
struct Target {
    hash: String,
    locale: Option<String>,
    url: Option<Url>,
}

fn parse_target(raw: Option<&str>, lang: Option<&str>) -> Target {
    let raw = raw.unwrap_or_default();
    let url = Url::parse(raw)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"));

    match url {
        Some(url) => {
            let locale = lang.map_or_else(|| locale_from_url(&url), str::to_owned);
            Target {
                hash: url.fragment().unwrap_or_default().to_owned(),
                url: Some(url_with_locale(&url, &locale)),
                locale: Some(locale),
            }
        }
        None => Target {
            hash: raw.to_owned(),
            locale: lang.map(str::to_owned),
            url: None,
        },
    }
}

#[derive(Serialize)]
struct RenderJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    header: &'a HeaderTexts,
    menu: &'a [MenuLink],
    view: &'a PageView,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the locale session cannot
    /// start. In HTML mode the startup error page is printed first.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let target = parse_target(self.target.as_deref(), self.lang.as_deref());
        let config = self.site.load_config(target.locale.as_deref())?;
        let locale = config.site_resolved.default_locale.as_str();

        let router = match start_router(&config, locale).await {
            Ok(router) => router,
            Err(err) => {
                if self.format == Format::Html {
                    output.print(&render_startup_error(locale, &err.to_string()));
                }
                return Err(err);
            }
        };

        router.navigate_to(&target.hash).await;
        let view = router.view();
        let header = router.header();
        let menu = router.menu();

        match self.format {
            Format::Html => output.print(&render_page(&header, &menu, &view)),
            Format::Json => {
                let json = RenderJson {
                    url: target.url.as_ref().map(Url::as_str),
                    header: &header,
                    menu: &menu,
                    view: &view,
                };
                output.print(&serde_json::to_string_pretty(&json)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_target_hash() {
        let target = parse_target(Some("#news/a"), None);

        assert_eq!(
            target,
            Target {
                hash: "#news/a".to_owned(),
                locale: None,
                url: None,
            }
        );
    }

    #[test]
    fn test_parse_target_url_takes_locale_and_fragment() {
        let target = parse_target(Some("https://lz1kam.org/?lang=en#about"), None);

        assert_eq!(target.hash, "about");
        assert_eq!(target.locale.as_deref(), Some("en"));
        assert_eq!(
            target.url.as_ref().map(Url::as_str),
            Some("https://lz1kam.org/?lang=en#about")
        );
    }

    #[test]
    fn test_parse_target_lang_flag_wins() {
        let target = parse_target(Some("https://lz1kam.org/?lang=en#about"), Some("bg"));

        assert_eq!(target.locale.as_deref(), Some("bg"));
        assert_eq!(
            target.url.as_ref().map(Url::as_str),
            Some("https://lz1kam.org/?lang=bg#about")
        );
    }

    #[test]
    fn test_parse_target_empty() {
        let target = parse_target(None, None);

        assert_eq!(target.hash, "");
        assert_eq!(target.locale, None);
    }
}
