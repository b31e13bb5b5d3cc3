//! Site-relative resource paths.

pub fn bundle(locale: &str) -> String {
    format!("content/i18n/{locale}.json")
}

pub fn page(locale: &str, src: &str) -> String {
    format!("content/pages/{locale}/{src}")
}

pub fn gallery(locale: &str, src: &str) -> String {
    format!("content/galleries/{locale}/{src}")
}

pub fn archive(locale: &str, src: &str) -> String {
    format!("content/archives/{locale}/{src}")
}

pub fn contact(locale: &str) -> String {
    page(locale, "contact.html")
}
