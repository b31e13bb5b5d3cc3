//! Navigation entry data model.

use serde::{Deserialize, Serialize};

/// Content type of a navigation entry, discriminated by the JSON `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentKind {
    /// Markdown page under `content/pages/<locale>/`.
    #[serde(rename = "md")]
    Markdown { src: String },
    /// Photo gallery index under `content/galleries/<locale>/`.
    Gallery { src: String },
    /// Archive document under `content/archives/<locale>/`.
    Archive { src: String },
    /// External news feed.
    News,
    /// Contact form fragment.
    Contact,
    /// Any other tag, or a source-backed tag without `src`.
    Unsupported,
}

/// One item of the locale navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct NavigationEntry {
    pub id: String,
    /// Display title; may be empty, in which case `id` is shown.
    pub title: String,
    #[serde(flatten)]
    pub content: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Wire shape of an entry as found in locale bundles.
#[derive(Deserialize)]
struct RawEntry {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    breadcrumbs: Option<String>,
    #[serde(default)]
    group: Option<String>,
}

impl From<RawEntry> for NavigationEntry {
    fn from(raw: RawEntry) -> Self {
        let content = match (raw.kind.as_deref(), raw.src) {
            (Some("md" | "markdown"), Some(src)) => ContentKind::Markdown { src },
            (Some("gallery"), Some(src)) => ContentKind::Gallery { src },
            (Some("archive"), Some(src)) => ContentKind::Archive { src },
            (Some("news"), _) => ContentKind::News,
            (Some("contact"), _) => ContentKind::Contact,
            _ => ContentKind::Unsupported,
        };
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            content,
            breadcrumbs: raw.breadcrumbs,
            group: raw.group,
        }
    }
}

impl NavigationEntry {
    /// Title to display: `title`, or `id` when the title is empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }

    /// Breadcrumb line: `breadcrumbs`, else `group`, else empty.
    #[must_use]
    pub fn breadcrumb_text(&self) -> &str {
        [&self.breadcrumbs, &self.group]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }
}
