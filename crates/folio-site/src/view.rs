use serde::Serialize;

use crate::location::Location;
use crate::subnav::Subnav;

/// Snapshot of what the content surface shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub locale: String,
    pub location: Location,
    /// Id of the page shown: the resolved entry, or `contact`.
    pub current_id: String,
    pub title: String,
    pub breadcrumbs: String,
    pub subnav: Option<Subnav>,
    pub html: String,
    /// True between the start of a navigation and its commit.
    pub loading: bool,
    /// Navigation generation that produced this view.
    pub generation: u64,
}

impl PageView {
    /// Empty view before the first navigation.
    #[must_use]
    pub fn blank(locale: &str) -> Self {
        Self {
            locale: locale.to_owned(),
            location: Location {
                base_id: String::new(),
                detail_id: None,
            },
            current_id: String::new(),
            title: String::new(),
            breadcrumbs: String::new(),
            subnav: None,
            html: String::new(),
            loading: false,
            generation: 0,
        }
    }

    /// Whether the page uses the sidebar layout.
    #[must_use]
    pub fn has_sidebar(&self) -> bool {
        self.subnav.is_some()
    }
}
