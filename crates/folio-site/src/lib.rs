//! Navigation, routing and content dispatch for Folio sites.
//!
//! A site is a set of locale bundles (`content/i18n/<locale>.json`), each
//! listing navigation entries. The first entry is home. A [`Router`] takes
//! hash locations (`#<id>` or `#<id>/<detail>`), resolves them against the
//! locale's [`NavigationTree`], and fills a content surface through the
//! [`ContentDispatcher`]:
//!
//! - markdown pages, rendered with the limited markdown of `folio-renderer`
//! - photo galleries, whose items drive the [`LightboxController`]
//! - archive documents
//! - the news feed from `folio-feed`
//! - the contact page fragment and its [`ContactForm`]
//!
//! Sidebar groups ([`SubnavGroups`]) and menu title rules
//! ([`apply_menu_rules`]) shape the page chrome; [`layout`] renders the
//! whole page document.

mod contact;
mod dispatch;
mod entry;
mod error;
mod gallery;
pub mod layout;
mod lightbox;
mod locale;
mod location;
mod menu;
mod news;
mod paths;
mod router;
mod session;
mod subnav;
mod tree;
mod ui;
mod view;

pub use contact::{
    ContactForm, DEFAULT_MIN_ELAPSED, FormTransport, HONEYPOT_FIELD, HttpFormTransport,
    SubmitOutcome, Submission,
};
pub use dispatch::{Content, ContentDispatcher};
pub use entry::{ContentKind, NavigationEntry};
pub use error::{ContactError, DispatchError, SessionError};
pub use gallery::{GalleryDoc, MediaItem};
pub use lightbox::{Key, LightboxController, LightboxEvent, LightboxView};
pub use locale::{DEFAULT_LOCALE, locale_from_url, url_with_locale};
pub use location::Location;
pub use menu::{
    CONTACT_ID, MenuAction, MenuLink, MenuRule, MenuRuleSet, TitleMatch, apply_menu_rules,
    build_display_menu, normalize_title,
};
pub use news::NEWS_ID;
pub use router::{Navigation, Router};
pub use session::{DEFAULT_SITE_TITLE, HeaderTexts, LocaleBundle, Session};
pub use subnav::{HiddenIds, Subnav, SubnavGroups, SubnavLink};
pub use tree::NavigationTree;
pub use ui::UiText;
pub use view::PageView;
