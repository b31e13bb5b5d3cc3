//! Full page document around the content surface.

use folio_renderer::{escape_attr, escape_html, panels};

use crate::menu::{CONTACT_ID, MenuLink};
use crate::session::HeaderTexts;
use crate::subnav::Subnav;
use crate::ui::UiText;
use crate::view::PageView;

fn document(locale: &str, title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html><html lang="{}"><head><meta charset="utf-8"><title>{}</title></head><body>{body}</body></html>"#,
        escape_attr(locale),
        escape_html(title)
    )
}

fn render_menu(menu: &[MenuLink]) -> String {
    let mut html = String::from(r#"<nav id="nav">"#);
    for link in menu {
        let class = match (link.is_home, link.active) {
            (true, true) => r#" class="home-link active""#,
            (true, false) => r#" class="home-link""#,
            (false, true) => r#" class="active""#,
            (false, false) => "",
        };
        let (label, aria) = if link.is_home {
            ("🏠".to_owned(), format!(r#" aria-label="{}""#, escape_attr(&link.label)))
        } else {
            (escape_html(&link.label), String::new())
        };
        html.push_str(&format!(
            r#"<a href="{}" data-id="{}"{class}{aria}>{label}</a>"#,
            escape_attr(&link.href()),
            escape_attr(&link.id)
        ));
    }
    html.push_str("</nav>");
    html
}

fn render_sidebar(subnav: Option<&Subnav>, current_id: &str) -> String {
    let Some(subnav) = subnav else {
        return r#"<aside id="sidebar" aria-hidden="true"></aside>"#.to_owned();
    };

    let mut html = format!(
        r#"<aside id="sidebar" aria-hidden="false"><div id="subnav"><div class="subnav-title">{}</div><ul class="subnav-list">"#,
        escape_html(subnav.title())
    );
    for link in subnav.links(current_id) {
        let class = if link.active { r#" class="active""# } else { "" };
        html.push_str(&format!(
            r##"<li><a href="#{}" data-id="{}"{class}>{}</a></li>"##,
            escape_attr(&link.id),
            escape_attr(&link.id),
            escape_html(&link.label)
        ));
    }
    html.push_str("</ul></div></aside>");
    html
}

/// Render the page: header with menu, optional sidebar, content surface
/// and footer.
#[must_use]
pub fn render_page(header: &HeaderTexts, menu: &[MenuLink], view: &PageView) -> String {
    let ui = UiText::for_locale(&view.locale);
    let grid_class = if view.has_sidebar() {
        "page-grid"
    } else {
        "page-grid no-sidebar"
    };

    let body = format!(
        concat!(
            r#"<header><h1 id="siteTitle">{title}</h1><p id="siteSubtitle">{subtitle}</p>{menu}</header>"#,
            r#"<main id="pageGrid" class="{grid}">{sidebar}<section class="maincol">"#,
            r#"<div id="breadcrumbs">{crumbs}</div><h2 id="pageTitle">{page_title}</h2>"#,
            r#"<div id="pageContent">{content}</div></section></main>"#,
            r##"<footer><span id="footerText">{footer}</span> <a id="footerContactLink" href="#{contact_id}">{contact}</a></footer>"##,
        ),
        title = escape_html(&header.site_title),
        subtitle = escape_html(&header.site_subtitle),
        menu = render_menu(menu),
        grid = grid_class,
        sidebar = render_sidebar(view.subnav.as_ref(), &view.current_id),
        crumbs = escape_html(&view.breadcrumbs),
        page_title = escape_html(&view.title),
        content = view.html,
        footer = escape_html(&header.footer_text),
        contact_id = CONTACT_ID,
        contact = escape_html(ui.contact_menu),
    );

    let doc_title = if view.title.is_empty() {
        header.site_title.clone()
    } else {
        format!("{} - {}", view.title, header.site_title)
    };
    document(&view.locale, &doc_title, &body)
}

/// Page shown when the locale session cannot start.
#[must_use]
pub fn render_startup_error(locale: &str, message: &str) -> String {
    let ui = UiText::for_locale(locale);
    let body = format!(
        r#"<main id="pageGrid" class="page-grid no-sidebar"><section class="maincol"><div id="pageContent">{}</div></section></main>"#,
        panels::error_card(ui.startup_error, message)
    );
    document(locale, ui.startup_error, &body)
}
