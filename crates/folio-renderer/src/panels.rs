//! Generic content panels: loading placeholder, error cards and
//! informational cards.
//!
//! Every function escapes the text it is given; callers pass plain strings.

use crate::escape::escape_html;

/// Muted placeholder shown while content loads.
#[must_use]
pub fn loading(text: &str) -> String {
    format!(r#"<p class="muted">{}</p>"#, escape_html(text))
}

/// Paragraph shown for unsupported or missing content.
#[must_use]
pub fn not_found(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

/// Card with a heading and an escaped error message.
///
/// Used for content-load failures and for the startup error panel.
#[must_use]
pub fn error_card(title: &str, message: &str) -> String {
    format!(
        r#"<div class="card"><h3>{}</h3><p class="muted">{}</p></div>"#,
        escape_html(title),
        escape_html(message)
    )
}

/// Card holding a single muted line of text.
#[must_use]
pub fn notice_card(text: &str) -> String {
    format!(
        r#"<div class="card"><p class="muted">{}</p></div>"#,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_card_escapes_message() {
        let html = error_card("Грешка при зареждане", "<script>x</script>");

        assert_eq!(
            html,
            r#"<div class="card"><h3>Грешка при зареждане</h3><p class="muted">&lt;script&gt;x&lt;/script&gt;</p></div>"#
        );
    }

    #[test]
    fn test_loading_placeholder() {
        assert_eq!(loading("Зареждане..."), r#"<p class="muted">Зареждане...</p>"#);
    }

    #[test]
    fn test_not_found_escapes() {
        assert_eq!(not_found("a & b"), "<p>a &amp; b</p>");
    }

    #[test]
    fn test_notice_card() {
        assert_eq!(
            notice_card("Архив"),
            r#"<div class="card"><p class="muted">Архив</p></div>"#
        );
    }
}
