//! Content loading per content kind.

use std::sync::Arc;

use folio_feed::NewsFeed;
use folio_renderer::{md_to_html, panels};
use folio_storage::Storage;

use crate::contact::ContactForm;
use crate::entry::{ContentKind, NavigationEntry};
use crate::error::DispatchError;
use crate::gallery::{GalleryDoc, MediaItem};
use crate::news;
use crate::paths;
use crate::session::Session;

/// Rendered content for the surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub html: String,
    /// Items for the lightbox when the content is a gallery.
    pub gallery: Option<Vec<MediaItem>>,
    /// Contact form found in the content, if any.
    pub contact_form: Option<ContactForm>,
}

impl Content {
    #[must_use]
    pub fn html(html: String) -> Self {
        Self {
            html,
            ..Self::default()
        }
    }
}

/// Loads and renders content for navigation entries.
pub struct ContentDispatcher {
    storage: Arc<dyn Storage>,
    news: Arc<NewsFeed>,
}

impl ContentDispatcher {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, news: Arc<NewsFeed>) -> Self {
        Self { storage, news }
    }

    /// Render `entry` for the session's locale.
    ///
    /// `detail` is the already decoded detail id of the location; only the
    /// news page uses it.
    pub async fn dispatch(
        &self,
        session: &Session,
        entry: &NavigationEntry,
        detail: Option<&str>,
    ) -> Result<Content, DispatchError> {
        let locale = session.locale();
        tracing::debug!(id = %entry.id, kind = ?entry.content, "dispatching content");

        match &entry.content {
            ContentKind::Markdown { src } => {
                let source = self.storage.read(&paths::page(locale, src)).await?;
                Ok(Content::html(md_to_html(&source)))
            }
            ContentKind::Gallery { src } => {
                let body = self.storage.read(&paths::gallery(locale, src)).await?;
                let doc = GalleryDoc::from_value(&serde_json::from_str(&body)?);
                Ok(Content {
                    html: doc.to_html(),
                    gallery: Some(doc.items),
                    contact_form: None,
                })
            }
            ContentKind::Archive { src } => {
                let body = self.storage.read(&paths::archive(locale, src)).await?;
                // Archives only need to be valid JSON; the view is a stub.
                let _: serde_json::Value = serde_json::from_str(&body)?;
                Ok(Content::html(panels::notice_card(session.ui().archive_label)))
            }
            ContentKind::News => {
                let items = self.news.fetch_news().await?;
                let html = match detail {
                    Some(slug) => {
                        news::render_detail(&items, slug, session.ui(), session.not_found_text())
                    }
                    None => news::render_list(&items, session.ui()),
                };
                Ok(Content::html(html))
            }
            ContentKind::Contact => self.contact(session).await,
            ContentKind::Unsupported => {
                Ok(Content::html(panels::not_found(session.not_found_text())))
            }
        }
    }

    /// Load the contact page fragment, injected as-is.
    pub async fn contact(&self, session: &Session) -> Result<Content, DispatchError> {
        let html = self.storage.read(&paths::contact(session.locale())).await?;
        let contact_form = ContactForm::from_fragment(&html);
        if contact_form.is_none() {
            tracing::warn!(locale = session.locale(), "contact page has no contact form");
        }
        Ok(Content {
            html,
            gallery: None,
            contact_form,
        })
    }
}
