//! Locale selection through the `lang` query parameter.

use url::Url;

/// Locale used when the URL does not name one.
pub const DEFAULT_LOCALE: &str = "bg";

const LANG_PARAM: &str = "lang";

/// Locale named by the `lang` query parameter, or [`DEFAULT_LOCALE`].
#[must_use]
pub fn locale_from_url(url: &Url) -> String {
    url.query_pairs()
        .find(|(key, value)| key == LANG_PARAM && !value.is_empty())
        .map_or_else(|| DEFAULT_LOCALE.to_owned(), |(_, value)| value.into_owned())
}

/// Copy of `url` with `lang` set to `locale`, other parameters and the
/// fragment preserved.
#[must_use]
pub fn url_with_locale(url: &Url, locale: &str) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LANG_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut updated = url.clone();
    updated
        .query_pairs_mut()
        .clear()
        .extend_pairs(others)
        .append_pair(LANG_PARAM, locale);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_locale_from_url() {
        assert_eq!(locale_from_url(&url("https://lz1kam.org/?lang=en#news")), "en");
        assert_eq!(locale_from_url(&url("https://lz1kam.org/#news")), "bg");
        assert_eq!(locale_from_url(&url("https://lz1kam.org/?lang=")), "bg");
    }

    #[test]
    fn test_url_with_locale_replaces_param() {
        let updated = url_with_locale(&url("https://lz1kam.org/?a=1&lang=bg#news/x"), "en");

        assert_eq!(updated.as_str(), "https://lz1kam.org/?a=1&lang=en#news/x");
    }

    #[test]
    fn test_url_with_locale_adds_param() {
        let updated = url_with_locale(&url("https://lz1kam.org/"), "en");

        assert_eq!(updated.as_str(), "https://lz1kam.org/?lang=en");
    }
}
