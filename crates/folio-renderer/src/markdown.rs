//! Limited markdown to HTML conversion.
//!
//! Supports exactly the subset used by site pages and feed text:
//!
//! - `#`, `##`, `###` line headings
//! - `- ` list items, one `<ul>` per contiguous run
//! - inline `[text](url)` links, opened in a new browsing context
//! - blank-line separated paragraphs, single newlines as `<br/>`
//!
//! The conversion performs no escaping. Callers that pass untrusted text
//! must run it through [`escape_html`](crate::escape_html) first.

use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Block-level element being accumulated inside a paragraph block.
enum Pending<'a> {
    None,
    Paragraph(Vec<&'a str>),
    List(Vec<&'a str>),
}

impl Pending<'_> {
    fn flush(&mut self, out: &mut String) {
        match std::mem::replace(self, Pending::None) {
            Pending::None => {}
            Pending::Paragraph(lines) => {
                out.push_str("<p>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str("<br/>");
                    }
                    out.push_str(&render_inline(line));
                }
                out.push_str("</p>");
            }
            Pending::List(items) => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    out.push_str(&render_inline(item));
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
        }
    }
}

/// Convert limited markdown to HTML.
///
/// The result always starts with a block-level element. Empty input
/// yields `<p></p>`.
///
/// # Example
///
/// ```
/// use folio_renderer::md_to_html;
///
/// assert_eq!(
///     md_to_html("# Hi\n\n- a\n- b"),
///     "<h1>Hi</h1><ul><li>a</li><li>b</li></ul>"
/// );
/// ```
#[must_use]
pub fn md_to_html(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return "<p></p>".to_owned();
    }

    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 2);
    let mut pending = Pending::None;

    for line in trimmed.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            pending.flush(&mut out);
            continue;
        }

        if let Some((level, text)) = heading(line) {
            pending.flush(&mut out);
            out.push_str(&format!("<h{level}>{}</h{level}>", render_inline(text)));
        } else if let Some(item) = line.strip_prefix("- ") {
            if !matches!(pending, Pending::List(_)) {
                pending.flush(&mut out);
                pending = Pending::List(Vec::new());
            }
            if let Pending::List(items) = &mut pending {
                items.push(item);
            }
        } else {
            if !matches!(pending, Pending::Paragraph(_)) {
                pending.flush(&mut out);
                pending = Pending::Paragraph(Vec::new());
            }
            if let Pending::Paragraph(lines) = &mut pending {
                lines.push(line);
            }
        }
    }
    pending.flush(&mut out);

    out
}

/// Match a `#`..`###` heading line.
fn heading(line: &str) -> Option<(u8, &str)> {
    if let Some(text) = line.strip_prefix("### ") {
        Some((3, text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some((2, text))
    } else {
        line.strip_prefix("# ").map(|text| (1, text))
    }
}

fn render_inline(text: &str) -> String {
    LINK_RE
        .replace_all(
            text,
            r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
        )
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_then_list() {
        assert_eq!(
            md_to_html("# Hi\n\n- a\n- b"),
            "<h1>Hi</h1><ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(md_to_html(""), "<p></p>");
        assert_eq!(md_to_html("  \n\n "), "<p></p>");
    }

    #[test]
    fn test_plain_text_is_wrapped_in_paragraph() {
        assert_eq!(md_to_html("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_single_newline_is_line_break() {
        assert_eq!(md_to_html("one\ntwo"), "<p>one<br/>two</p>");
    }

    #[test]
    fn test_blank_lines_separate_paragraphs() {
        assert_eq!(md_to_html("one\n\n\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            md_to_html("# A\n## B\n### C"),
            "<h1>A</h1><h2>B</h2><h3>C</h3>"
        );
    }

    #[test]
    fn test_hash_without_space_is_text() {
        assert_eq!(md_to_html("#tag"), "<p>#tag</p>");
    }

    #[test]
    fn test_separate_list_runs() {
        assert_eq!(
            md_to_html("- a\ntext\n- b"),
            "<ul><li>a</li></ul><p>text</p><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_link_opens_new_context() {
        assert_eq!(
            md_to_html("see [site](https://example.org)"),
            r#"<p>see <a href="https://example.org" target="_blank" rel="noopener noreferrer">site</a></p>"#
        );
    }

    #[test]
    fn test_link_inside_list_item() {
        assert_eq!(
            md_to_html("- [x](y)"),
            r#"<ul><li><a href="y" target="_blank" rel="noopener noreferrer">x</a></li></ul>"#
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(md_to_html("a\r\nb\r\n\r\nc"), "<p>a<br/>b</p><p>c</p>");
    }

    #[test]
    fn test_no_escaping_performed() {
        assert_eq!(md_to_html("<b>x</b>"), "<p><b>x</b></p>");
    }
}
