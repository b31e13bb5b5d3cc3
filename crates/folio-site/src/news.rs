//! News list and detail views.

use folio_feed::NewsItem;
use folio_renderer::{encode_component, escape_attr, escape_html, md_to_html, panels};

use crate::ui::UiText;

/// Route id of the news page.
pub const NEWS_ID: &str = "news";

/// Feed text is escaped before the markdown transform.
fn feed_markdown(text: &str) -> String {
    md_to_html(&escape_html(text))
}

fn back_link(ui: &UiText) -> String {
    format!(
        r##"<a class="news-back" href="#{NEWS_ID}">{}</a>"##,
        escape_html(ui.news_back)
    )
}

/// Cards for every post, or the empty-state card.
#[must_use]
pub fn render_list(items: &[NewsItem], ui: &UiText) -> String {
    if items.is_empty() {
        return panels::notice_card(ui.news_empty);
    }

    let mut html = String::from(r#"<div class="news-list">"#);
    for post in items {
        html.push_str(r#"<div class="card news-card">"#);
        if let Some(image) = &post.image {
            html.push_str(&format!(
                r#"<div class="news-thumb"><img src="{}" alt="{}" loading="lazy"></div>"#,
                escape_attr(image),
                escape_attr(&post.title)
            ));
        }
        html.push_str(&format!(
            r#"<div class="news-body"><div class="news-meta">{}</div><h3 class="news-title">{}</h3>"#,
            escape_html(&post.date),
            escape_html(&post.title)
        ));
        if !post.summary.is_empty() {
            html.push_str(&format!(
                r#"<div class="news-summary">{}</div>"#,
                feed_markdown(&post.summary)
            ));
        }
        html.push_str(&format!(
            r##"<a class="news-more" href="#{NEWS_ID}/{}">{}</a></div></div>"##,
            encode_component(&post.slug),
            escape_html(ui.news_read_more)
        ));
    }
    html.push_str("</div>");
    html
}

/// Full post for `slug`, or a not-found card with a link back to the list.
#[must_use]
pub fn render_detail(items: &[NewsItem], slug: &str, ui: &UiText, not_found: &str) -> String {
    let Some(post) = items.iter().find(|item| item.slug == slug) else {
        tracing::debug!(slug, "news post not found");
        return format!(
            r#"<div class="card"><p class="muted">{}</p><p>{}</p></div>"#,
            escape_html(not_found),
            back_link(ui)
        );
    };

    let image = post.image.as_ref().map_or_else(String::new, |image| {
        format!(
            r#"<img class="news-image" src="{}" alt="{}" loading="lazy">"#,
            escape_attr(image),
            escape_attr(&post.title)
        )
    });
    format!(
        r#"<div class="news-detail">{}<div class="card news-card news-card--detail">{image}<div class="news-body"><div class="news-meta">{}</div><h2 class="news-title">{}</h2><div class="news-content">{}</div></div></div></div>"#,
        back_link(ui),
        escape_html(&post.date),
        escape_html(&post.title),
        feed_markdown(&post.content)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::BG;

    fn post(slug: &str, title: &str) -> NewsItem {
        NewsItem {
            slug: slug.to_owned(),
            date: "09.02.2026".to_owned(),
            title: title.to_owned(),
            summary: "Кратко <b>".to_owned(),
            content: "# Заглавие\n\n- точка".to_owned(),
            image: None,
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            render_list(&[], &BG),
            r#"<div class="card"><p class="muted">Все още няма публикувани новини.</p></div>"#
        );
    }

    #[test]
    fn test_list_links_to_encoded_slug_and_escapes_summary() {
        let html = render_list(&[post("полеви ден", "Полеви ден")], &BG);

        assert!(html.contains(r##"href="#news/%D0%BF%D0%BE%D0%BB%D0%B5%D0%B2%D0%B8%20%D0%B4%D0%B5%D0%BD""##));
        assert!(html.contains("<p>Кратко &lt;b&gt;</p>"));
        assert!(!html.contains("news-thumb"));
    }

    #[test]
    fn test_list_with_image() {
        let mut item = post("a", "A \"quoted\"");
        item.image = Some("https://img/x.jpg".to_owned());

        let html = render_list(&[item], &BG);

        assert!(html.contains(r#"<img src="https://img/x.jpg" alt="A &quot;quoted&quot;" loading="lazy">"#));
    }

    #[test]
    fn test_detail_found() {
        let html = render_detail(&[post("a", "A"), post("b", "B")], "b", &BG, "missing");

        assert!(html.contains(r#"<h2 class="news-title">B</h2>"#));
        assert!(html.contains("<h1>Заглавие</h1><ul><li>точка</li></ul>"));
        assert!(html.contains(r##"href="#news""##));
    }

    #[test]
    fn test_detail_not_found() {
        let html = render_detail(&[post("a", "A")], "zzz", &BG, "Няма налично съдържание.");

        assert_eq!(
            html,
            r##"<div class="card"><p class="muted">Няма налично съдържание.</p><p><a class="news-back" href="#news">← Всички новини</a></p></div>"##
        );
    }
}
