//! Gallery documents and their thumbnail grid.

use folio_renderer::escape_html;
use serde::Serialize;
use serde_json::Value;

/// One gallery image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub thumb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl MediaItem {
    /// Read one item leniently. Null, empty and non-string fields count as
    /// absent; a non-object value gives an empty placeholder.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            thumb: text(value, "thumb").unwrap_or_default(),
            full: text(value, "full"),
            desc: text(value, "desc"),
        }
    }

    /// Image shown in the lightbox: the full image, else the thumbnail.
    #[must_use]
    pub fn src(&self) -> &str {
        self.full.as_deref().unwrap_or(&self.thumb)
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Gallery index (`content/galleries/<locale>/<src>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryDoc {
    pub title: Option<String>,
    pub intro: Option<String>,
    pub items: Vec<MediaItem>,
}

impl GalleryDoc {
    /// Read a gallery document leniently.
    ///
    /// A missing or non-array `items` gives an empty gallery; malformed
    /// items become empty placeholders so indices stay aligned.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let items = value
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(MediaItem::from_value).collect())
            .unwrap_or_default();

        Self {
            title: text(value, "title"),
            intro: text(value, "intro"),
            items,
        }
    }

    /// Header card followed by the thumbnail grid.
    ///
    /// Each thumbnail carries `data-index`, the position passed to the
    /// lightbox when activated.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="card gallery-header">"#);
        if let Some(title) = &self.title {
            html.push_str(&format!("<h2>{}</h2>", escape_html(title)));
        }
        if let Some(intro) = &self.intro {
            html.push_str(&format!(r#"<p class="muted">{}</p>"#, escape_html(intro)));
        }
        html.push_str(r#"</div><div class="gallery">"#);
        for (index, item) in self.items.iter().enumerate() {
            html.push_str(&format!(
                r#"<div class="thumb" data-index="{index}"><img src="{}" alt=""><div class="desc">{}</div></div>"#,
                escape_html(&item.thumb),
                escape_html(item.desc.as_deref().unwrap_or_default()),
            ));
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_items() {
        let doc = GalleryDoc::from_value(&json!({
            "title": "Полеви ден",
            "items": [
                {"thumb": "t1.jpg", "full": "f1.jpg", "desc": "Антена"},
                {"thumb": "t2.jpg"}
            ]
        }));

        assert_eq!(doc.title.as_deref(), Some("Полеви ден"));
        assert_eq!(doc.intro, None);
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[0].full.as_deref(), Some("f1.jpg"));
        assert_eq!(doc.items[1].desc, None);
    }

    #[test]
    fn test_non_array_items_is_empty() {
        assert!(GalleryDoc::from_value(&json!({"items": "nope"})).items.is_empty());
        assert!(GalleryDoc::from_value(&json!([1, 2])).items.is_empty());
        assert!(GalleryDoc::from_value(&json!(null)).items.is_empty());
    }

    #[test]
    fn test_malformed_item_keeps_position() {
        let doc = GalleryDoc::from_value(&json!({"items": [42, {"thumb": "b.jpg"}]}));

        assert_eq!(doc.items[0], MediaItem::default());
        assert_eq!(doc.items[1].thumb, "b.jpg");
    }

    #[test]
    fn test_empty_full_falls_back_to_thumb() {
        let doc = GalleryDoc::from_value(&json!({"items": [{"thumb": "t.jpg", "full": ""}]}));

        assert_eq!(doc.items[0].full, None);
        assert_eq!(doc.items[0].src(), "t.jpg");
    }

    #[test]
    fn test_null_field_keeps_the_rest_of_the_item() {
        let doc = GalleryDoc::from_value(&json!({
            "items": [{"thumb": null, "full": "F.jpg", "desc": "d"}, {"thumb": 7, "desc": ["x"]}]
        }));

        assert_eq!(
            doc.items[0],
            MediaItem {
                thumb: String::new(),
                full: Some("F.jpg".to_owned()),
                desc: Some("d".to_owned()),
            }
        );
        assert_eq!(doc.items[0].src(), "F.jpg");
        assert_eq!(doc.items[1], MediaItem::default());
    }

    #[test]
    fn test_to_html() {
        let doc = GalleryDoc {
            title: Some("A & B".to_owned()),
            intro: None,
            items: vec![MediaItem {
                thumb: "t.jpg".to_owned(),
                full: None,
                desc: Some("<x>".to_owned()),
            }],
        };

        assert_eq!(
            doc.to_html(),
            r#"<div class="card gallery-header"><h2>A &amp; B</h2></div><div class="gallery"><div class="thumb" data-index="0"><img src="t.jpg" alt=""><div class="desc">&lt;x&gt;</div></div></div>"#
        );
    }
}
