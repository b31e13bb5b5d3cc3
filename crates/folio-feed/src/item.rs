use serde::{Deserialize, Serialize};

/// Normalized news post.
///
/// `date` keeps the text as it appeared in the sheet; ordering uses the
/// parsed form computed during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub slug: String,
    pub date: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
