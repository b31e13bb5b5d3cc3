//! Locale session: bundle texts plus the navigation tree.

use folio_storage::Storage;
use serde::{Deserialize, Serialize};

use crate::entry::NavigationEntry;
use crate::error::SessionError;
use crate::paths;
use crate::tree::NavigationTree;
use crate::ui::UiText;

/// Default site title when the bundle has none.
pub const DEFAULT_SITE_TITLE: &str = "Радиолюбители";

/// Locale bundle (`content/i18n/<locale>.json`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    #[serde(default)]
    pub site_title: Option<String>,
    #[serde(default)]
    pub site_subtitle: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub loading: Option<String>,
    #[serde(default)]
    pub not_found: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavigationEntry>,
}

/// Header and footer texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderTexts {
    pub site_title: String,
    pub site_subtitle: String,
    pub footer_text: String,
}

/// Everything loaded for one locale.
///
/// A locale change builds a new session; nothing in it is mutated.
#[derive(Debug)]
pub struct Session {
    locale: String,
    header: HeaderTexts,
    loading: Option<String>,
    not_found: Option<String>,
    tree: NavigationTree,
    ui: &'static UiText,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl Session {
    /// Load the bundle for `locale` from storage.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the bundle is missing or invalid, or its
    /// navigation is empty or has duplicate ids.
    pub async fn load(storage: &dyn Storage, locale: &str) -> Result<Self, SessionError> {
        let path = paths::bundle(locale);
        let body = storage.read(&path).await?;
        let bundle: LocaleBundle = serde_json::from_str(&body)?;
        let session = Self::from_bundle(locale, bundle)?;
        tracing::info!(locale, entries = session.tree.len(), "session loaded");
        Ok(session)
    }

    /// Build a session from an already parsed bundle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the navigation is empty or has duplicate ids.
    pub fn from_bundle(locale: &str, bundle: LocaleBundle) -> Result<Self, SessionError> {
        let tree = NavigationTree::new(bundle.nav)?;
        Ok(Self {
            locale: locale.to_owned(),
            header: HeaderTexts {
                site_title: non_empty(bundle.site_title)
                    .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned()),
                site_subtitle: bundle.site_subtitle.unwrap_or_default(),
                footer_text: bundle.footer_text.unwrap_or_default(),
            },
            loading: non_empty(bundle.loading),
            not_found: non_empty(bundle.not_found),
            tree,
            ui: UiText::for_locale(locale),
        })
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    #[must_use]
    pub fn header(&self) -> &HeaderTexts {
        &self.header
    }

    #[must_use]
    pub fn ui(&self) -> &'static UiText {
        self.ui
    }

    /// Loading placeholder text: bundle value, else built-in.
    #[must_use]
    pub fn loading_text(&self) -> &str {
        self.loading.as_deref().unwrap_or(self.ui.loading)
    }

    /// Not-found text: bundle value, else built-in.
    #[must_use]
    pub fn not_found_text(&self) -> &str {
        self.not_found.as_deref().unwrap_or(self.ui.not_found)
    }
}
