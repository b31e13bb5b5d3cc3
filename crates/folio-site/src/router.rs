//! Hash router and content surface.
//!
//! # Ordering
//!
//! Every call to [`Router::navigate_to`] takes a new generation number from
//! an atomic counter before doing any I/O. The surface accepts a content
//! commit only from the latest generation, so a slow response for an older
//! location never overwrites a newer page. Locale resets also advance the
//! generation, discarding anything still in flight. The session snapshot
//! and the generation are taken under the same session lock, so a
//! navigation on a replaced session can never hold the latest generation.
//!
//! # Thread Safety
//!
//! - The session is an `RwLock<Arc<Session>>`; readers clone the `Arc`
//! - The surface is a `Mutex`, never held across an `.await`

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use folio_feed::NewsFeed;
use folio_renderer::panels;
use folio_storage::Storage;

use crate::contact::{DEFAULT_MIN_ELAPSED, ContactForm, FormTransport, SubmitOutcome, Submission};
use crate::dispatch::{Content, ContentDispatcher};
use crate::entry::{ContentKind, NavigationEntry};
use crate::error::SessionError;
use crate::lightbox::{LightboxController, LightboxEvent, LightboxView};
use crate::location::Location;
use crate::menu::{CONTACT_ID, MenuLink, build_display_menu};
use crate::session::{HeaderTexts, Session};
use crate::subnav::{HiddenIds, SubnavGroups};
use crate::view::PageView;

/// Whether a navigation's content reached the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Committed,
    /// A newer navigation or a locale reset started first.
    Stale,
}

#[derive(Clone, Copy)]
enum Route<'a> {
    Contact,
    Entry(&'a NavigationEntry),
}

struct Surface {
    view: PageView,
    lightbox: LightboxController,
    contact: Option<ContactForm>,
}

/// Routes hash locations to content and owns the content surface.
pub struct Router {
    storage: Arc<dyn Storage>,
    dispatcher: ContentDispatcher,
    session: RwLock<Arc<Session>>,
    subnav: SubnavGroups,
    hidden: HiddenIds,
    generation: AtomicU64,
    surface: Mutex<Surface>,
    min_submit: Duration,
}

impl Router {
    /// Create a router for an already loaded session.
    #[must_use]
    pub fn new(
        session: Session,
        storage: Arc<dyn Storage>,
        news: Arc<NewsFeed>,
        subnav: SubnavGroups,
        hidden: HiddenIds,
    ) -> Self {
        let surface = Surface {
            view: PageView::blank(session.locale()),
            lightbox: LightboxController::default(),
            contact: None,
        };
        Self {
            dispatcher: ContentDispatcher::new(Arc::clone(&storage), news),
            storage,
            session: RwLock::new(Arc::new(session)),
            subnav,
            hidden,
            generation: AtomicU64::new(0),
            surface: Mutex::new(surface),
            min_submit: DEFAULT_MIN_ELAPSED,
        }
    }

    /// Minimum time a contact form must be open before it may be sent.
    #[must_use]
    pub fn with_min_submit(mut self, min_submit: Duration) -> Self {
        self.min_submit = min_submit;
        self
    }

    /// Load the session for `locale` and create a router for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the locale bundle cannot be loaded.
    pub async fn start(
        storage: Arc<dyn Storage>,
        news: Arc<NewsFeed>,
        locale: &str,
        subnav: SubnavGroups,
        hidden: HiddenIds,
    ) -> Result<Self, SessionError> {
        let session = Session::load(storage.as_ref(), locale).await?;
        Ok(Self::new(session, storage, news, subnav, hidden))
    }

    /// Current session snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn session(&self) -> Arc<Session> {
        Arc::clone(&self.session.read().unwrap())
    }

    /// Session snapshot paired with a fresh generation number.
    fn snapshot(&self) -> (Arc<Session>, u64) {
        let session = self.session.read().unwrap();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        (Arc::clone(&session), generation)
    }

    /// Navigate to a raw hash such as `#news/some-slug`.
    ///
    /// Never fails: content errors are rendered as an error card.
    pub async fn navigate_to(&self, raw: &str) -> Navigation {
        let (session, generation) = self.snapshot();
        let tree = session.tree();
        let location = Location::parse(raw, &tree.home().id);

        let route = if location.base_id == CONTACT_ID {
            Route::Contact
        } else {
            Route::Entry(tree.resolve(&location.base_id))
        };
        tracing::debug!(raw, generation, base = %location.base_id, "navigating");

        let (current_id, title, breadcrumbs, subnav) = match route {
            Route::Contact => (CONTACT_ID, session.ui().contact_title, "", None),
            Route::Entry(entry) => (
                entry.id.as_str(),
                entry.display_title(),
                entry.breadcrumb_text(),
                self.subnav.compute(&entry.id, tree),
            ),
        };
        self.begin(PageView {
            locale: session.locale().to_owned(),
            location: location.clone(),
            current_id: current_id.to_owned(),
            title: title.to_owned(),
            breadcrumbs: breadcrumbs.to_owned(),
            subnav,
            html: panels::loading(session.loading_text()),
            loading: true,
            generation,
        });

        let (result, error_title) = match route {
            Route::Contact => (
                self.dispatcher.contact(&session).await,
                session.ui().contact_load_error,
            ),
            Route::Entry(entry) => {
                let detail = location.decoded_detail();
                (
                    self.dispatcher.dispatch(&session, entry, detail.as_deref()).await,
                    if matches!(entry.content, ContentKind::Contact) {
                        session.ui().contact_load_error
                    } else {
                        session.ui().load_error
                    },
                )
            }
        };

        let content = result.unwrap_or_else(|err| {
            tracing::error!(id = current_id, error = %err, "content load failed");
            Content::html(panels::error_card(error_title, &err.to_string()))
        });
        self.commit(generation, content)
    }

    fn begin(&self, view: PageView) {
        let mut surface = self.surface.lock().unwrap();
        if view.generation < surface.view.generation {
            return;
        }
        surface.view = view;
        surface.contact = None;
    }

    fn commit(&self, generation: u64, content: Content) -> Navigation {
        let mut surface = self.surface.lock().unwrap();
        let latest = self.generation.load(Ordering::SeqCst);
        if generation != latest || surface.view.generation != generation {
            tracing::debug!(generation, latest, "discarding stale content");
            return Navigation::Stale;
        }

        surface.view.html = content.html;
        surface.view.loading = false;
        surface.lightbox.set_items(content.gallery.unwrap_or_default());
        surface.contact = content.contact_form;
        Navigation::Committed
    }

    /// Replace the session with one for `locale`.
    ///
    /// In-flight navigations become stale. The surface keeps its old content
    /// until the next navigation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the new bundle cannot be loaded; the old
    /// session stays active.
    pub async fn reset(&self, locale: &str) -> Result<(), SessionError> {
        let session = Session::load(self.storage.as_ref(), locale).await?;
        {
            let mut current = self.session.write().unwrap();
            *current = Arc::new(session);
            self.generation.fetch_add(1, Ordering::SeqCst);
        }
        tracing::info!(locale, "locale session replaced");
        Ok(())
    }

    /// Snapshot of the surface.
    #[must_use]
    pub fn view(&self) -> PageView {
        self.surface.lock().unwrap().view.clone()
    }

    /// Primary menu with the current page marked active.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuLink> {
        let session = self.session();
        let current = self.surface.lock().unwrap().view.current_id.clone();
        build_display_menu(session.tree(), session.locale(), &self.hidden, &current)
    }

    #[must_use]
    pub fn header(&self) -> HeaderTexts {
        self.session().header().clone()
    }

    /// Feed an input event to the gallery lightbox.
    pub fn lightbox_event(&self, event: LightboxEvent) -> Option<LightboxView> {
        self.surface.lock().unwrap().lightbox.handle(event)
    }

    #[must_use]
    pub fn lightbox_view(&self) -> Option<LightboxView> {
        self.surface.lock().unwrap().lightbox.view()
    }

    /// Submit the contact form shown on the surface.
    ///
    /// Returns `None` when the surface shows no contact form. Submissions
    /// sooner than the configured minimum are refused. A successful
    /// send replaces the surface content with the success panel, unless the
    /// user navigated away meanwhile.
    pub async fn submit_contact(
        &self,
        transport: &dyn FormTransport,
        submission: &Submission,
    ) -> Option<SubmitOutcome> {
        let (form, generation) = {
            let surface = self.surface.lock().unwrap();
            (surface.contact.clone()?, surface.view.generation)
        };

        let outcome = form
            .submit(transport, submission, self.min_submit, self.session().ui())
            .await;

        if let SubmitOutcome::Sent(panel) = &outcome {
            let mut surface = self.surface.lock().unwrap();
            if surface.view.generation == generation {
                surface.view.html.clone_from(panel);
                surface.contact = None;
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use folio_feed::{FeedError, FeedSource, FeedTransport};
    use folio_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::error::ContactError;

    assert_impl_all!(Router: Send, Sync);

    const BG_BUNDLE: &str = r#"{
        "siteTitle": "LZ1KAM",
        "nav": [
            {"id": "home", "title": "Начало", "type": "md", "src": "home.md"},
            {"id": "about", "title": "За нас", "type": "md", "src": "about.md", "breadcrumbs": "Клуб / За нас"},
            {"id": "kvArchive", "title": "КВ - Архив", "type": "md", "src": "kv.md"},
            {"id": "kvDiplomas", "title": "Дипломи", "type": "gallery", "src": "diplomas.json"},
            {"id": "news", "title": "Новини", "type": "news"},
            {"id": "broken", "title": "Счупено", "type": "md", "src": "broken.md"},
            {"id": "reach", "title": "Пишете ни", "type": "contact"}
        ]
    }"#;

    const EN_BUNDLE: &str = r#"{"nav":[{"id":"home","title":"Home","type":"md","src":"home.md"}]}"#;

    struct NoFeed;

    #[async_trait]
    impl FeedTransport for NoFeed {
        async fn fetch(&self, _url: &str) -> Result<String, FeedError> {
            Err(FeedError::Unavailable { status: 503 })
        }
    }

    struct AcceptAll;

    #[async_trait]
    impl FormTransport for AcceptAll {
        async fn post(&self, _endpoint: &str, _fields: &[(String, String)]) -> Result<(), ContactError> {
            Ok(())
        }
    }

    fn storage() -> MockStorage {
        MockStorage::new()
            .with_content("content/i18n/bg.json", BG_BUNDLE)
            .with_content("content/i18n/en.json", EN_BUNDLE)
            .with_content("content/pages/bg/home.md", "# Начало")
            .with_content("content/pages/en/home.md", "# Home")
            .with_content("content/pages/bg/about.md", "За нас")
            .with_content("content/pages/bg/kv.md", "КВ")
            .with_content(
                "content/galleries/bg/diplomas.json",
                r#"{"items":[{"thumb":"a.jpg","full":"A.jpg","desc":"a"},{"thumb":"b.jpg"}]}"#,
            )
            .with_content(
                "content/pages/bg/contact.html",
                r#"<form id="contactForm" action="https://forms.example/x"><input name="_gotcha"></form>"#,
            )
            .with_failure("content/pages/bg/broken.md", StorageErrorKind::Unavailable)
    }

    async fn router_with(storage: MockStorage) -> Router {
        let news = NewsFeed::new(
            Arc::new(NoFeed),
            FeedSource::new(Some("sheet"), "0", "https://example.org/d"),
        );
        Router::start(
            Arc::new(storage),
            Arc::new(news),
            "bg",
            SubnavGroups::default(),
            HiddenIds::default(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_navigate_to_markdown_page() {
        let router = router_with(storage()).await;

        let outcome = router.navigate_to("#about").await;

        let view = router.view();
        assert_eq!(outcome, Navigation::Committed);
        assert_eq!(view.current_id, "about");
        assert_eq!(view.title, "За нас");
        assert_eq!(view.breadcrumbs, "Клуб / За нас");
        assert_eq!(view.html, "<p>За нас</p>");
        assert!(!view.loading);
        assert!(!view.has_sidebar());
    }

    #[tokio::test]
    async fn test_unknown_id_falls_back_to_home() {
        let router = router_with(storage()).await;

        router.navigate_to("#does-not-exist").await;

        let view = router.view();
        assert_eq!(view.current_id, "home");
        assert_eq!(view.location.base_id, "does-not-exist");
        assert_eq!(view.html, "<h1>Начало</h1>");
    }

    #[tokio::test]
    async fn test_empty_hash_is_home() {
        let router = router_with(storage()).await;

        router.navigate_to("").await;

        assert_eq!(router.view().current_id, "home");
    }

    #[tokio::test]
    async fn test_contact_pseudo_route() {
        let router = router_with(storage()).await;

        router.navigate_to("#contact").await;

        let view = router.view();
        assert_eq!(view.current_id, "contact");
        assert_eq!(view.title, "Контакти");
        assert!(view.html.starts_with("<form id=\"contactForm\""));
        assert!(!view.has_sidebar());
    }

    #[tokio::test]
    async fn test_subnav_member_shows_sidebar() {
        let router = router_with(storage()).await;

        router.navigate_to("#kvArchive").await;

        let subnav = router.view().subnav.unwrap();
        assert_eq!(subnav.root_id, "kvArchive");
        assert_eq!(subnav.members.len(), 1);
    }

    #[tokio::test]
    async fn test_content_error_renders_card_and_router_stays_usable() {
        let router = router_with(storage()).await;

        let outcome = router.navigate_to("#broken").await;

        assert_eq!(outcome, Navigation::Committed);
        assert!(router.view().html.contains("<h3>Грешка при зареждане</h3>"));

        router.navigate_to("#about").await;
        assert_eq!(router.view().html, "<p>За нас</p>");
    }

    #[tokio::test]
    async fn test_contact_entry_failure_uses_contact_title() {
        let failing = storage().with_failure("content/pages/bg/contact.html", StorageErrorKind::Unavailable);
        let router = router_with(failing).await;

        router.navigate_to("#reach").await;

        let view = router.view();
        assert_eq!(view.current_id, "reach");
        assert!(view.html.contains("<h3>Грешка при зареждане на Контакти</h3>"));
    }

    #[tokio::test]
    async fn test_news_feed_failure_renders_error_card() {
        let router = router_with(storage()).await;

        router.navigate_to("#news").await;

        assert!(router.view().html.contains("News fetch failed (503)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let slow = storage().with_delay("content/pages/bg/about.md", Duration::from_millis(500));
        let router = router_with(slow).await;

        let (first, second) = tokio::join!(router.navigate_to("#about"), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            router.navigate_to("#kvArchive").await
        });

        assert_eq!(first, Navigation::Stale);
        assert_eq!(second, Navigation::Committed);
        let view = router.view();
        assert_eq!(view.current_id, "kvArchive");
        assert_eq!(view.html, "<p>КВ</p>");
    }

    #[tokio::test]
    async fn test_gallery_commit_replaces_lightbox_items() {
        let router = router_with(storage()).await;
        router.navigate_to("#kvDiplomas").await;

        let view = router.lightbox_event(LightboxEvent::ThumbnailActivated(1)).unwrap();
        assert_eq!(view.src, "b.jpg");

        let view = router.lightbox_event(LightboxEvent::NextButton).unwrap();
        assert_eq!(view.src, "A.jpg");

        router.navigate_to("#about").await;
        assert_eq!(router.lightbox_view(), None);
        assert_eq!(router.lightbox_event(LightboxEvent::ThumbnailActivated(0)), None);
    }

    #[tokio::test]
    async fn test_menu_marks_current_page() {
        let router = router_with(storage()).await;
        router.navigate_to("#news").await;

        let menu = router.menu();

        let active: Vec<&str> = menu.iter().filter(|l| l.active).map(|l| l.id.as_str()).collect();
        assert_eq!(active, vec!["news"]);
        assert_eq!(menu.first().map(|l| l.id.as_str()), Some("home"));
        assert_eq!(menu.last().map(|l| l.id.as_str()), Some("contact"));
        assert!(menu.iter().all(|l| l.id != "kvDiplomas"));
    }

    #[tokio::test]
    async fn test_reset_switches_locale() {
        let router = router_with(storage()).await;

        router.reset("en").await.unwrap();
        router.navigate_to("").await;

        let view = router.view();
        assert_eq!(view.locale, "en");
        assert_eq!(view.html, "<h1>Home</h1>");
        assert_eq!(router.header().site_title, "Радиолюбители");
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_session() {
        let router = router_with(storage()).await;

        let err = router.reset("de").await.unwrap_err();

        assert!(matches!(err, SessionError::Storage(_)));
        assert_eq!(router.session().locale(), "bg");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_discards_in_flight_navigation() {
        let slow = storage().with_delay("content/pages/bg/about.md", Duration::from_millis(500));
        let router = router_with(slow).await;

        let (outcome, reset) = tokio::join!(router.navigate_to("#about"), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            router.reset("en").await
        });

        reset.unwrap();
        assert_eq!(outcome, Navigation::Stale);
        assert!(router.view().loading);
    }

    #[tokio::test]
    async fn test_submit_contact_replaces_form() {
        let router = router_with(storage()).await;
        router.navigate_to("#contact").await;
        let submission = Submission {
            fields: vec![("_gotcha".to_owned(), String::new())],
            elapsed: Duration::from_secs(3),
        };

        let outcome = router
            .submit_contact(&AcceptAll, &submission)
            .await
            .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Sent(_)));
        assert!(router.view().html.contains("contact-success"));
    }

    #[tokio::test]
    async fn test_submit_contact_honors_min_submit() {
        let router = router_with(storage()).await.with_min_submit(Duration::from_secs(10));
        router.navigate_to("#contact").await;
        let submission = Submission {
            fields: Vec::new(),
            elapsed: Duration::from_secs(3),
        };

        let outcome = router.submit_contact(&AcceptAll, &submission).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::TooFast(_)));
        assert!(!router.view().html.contains("contact-success"));
    }

    #[tokio::test]
    async fn test_snapshot_before_reset_is_never_latest() {
        let router = router_with(storage()).await;
        let (old, generation) = router.snapshot();

        router.reset("en").await.unwrap();
        let (new, latest) = router.snapshot();

        assert_eq!(old.locale(), "bg");
        assert_eq!(new.locale(), "en");
        assert!(generation < latest);
        assert_eq!(
            router.commit(generation, Content::html("<p>old</p>".to_owned())),
            Navigation::Stale
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reset_leaves_no_old_locale_commit() {
        let router = Arc::new(router_with(storage()).await);

        let navigations: Vec<_> = (0..32)
            .map(|_| {
                let router = Arc::clone(&router);
                tokio::spawn(async move { router.navigate_to("#home").await })
            })
            .collect();
        router.reset("en").await.unwrap();
        router.navigate_to("#home").await;
        for navigation in navigations {
            navigation.await.unwrap();
        }

        let view = router.view();
        assert!(!view.loading);
        assert_eq!(view.locale, "en");
        assert_eq!(view.html, "<h1>Home</h1>");
    }

    #[tokio::test]
    async fn test_submit_contact_without_form() {
        let router = router_with(storage()).await;
        router.navigate_to("#about").await;

        let outcome = router
            .submit_contact(&AcceptAll, &Submission::default())
            .await;

        assert_eq!(outcome, None);
    }
}
