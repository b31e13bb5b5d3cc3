//! Row normalization, slug derivation and date ordering.

use std::cmp::Reverse;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::columns::{ColumnMap, ColumnStrategy, NewsField};
use crate::envelope::Table;
use crate::item::NewsItem;

static SLUG_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\u{0400}-\u{04FF}]+").unwrap());

static DOTTED_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})\.(\d{2})\.(\d{4})").unwrap());

static GVIZ_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Date\((\d+),\s*(\d+),\s*(\d+)(?:,\s*(\d+),\s*(\d+),\s*(\d+))?\)$").unwrap()
});

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Derive a URL slug from a title.
///
/// Lower-cases, replaces every run of characters outside `a-z`, `0-9` and
/// the Cyrillic block with `-`, and trims leading/trailing dashes.
///
/// ```
/// use folio_feed::slugify;
///
/// assert_eq!(slugify("  Полеви ден 2026! "), "полеви-ден-2026");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    SLUG_SEPARATOR_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_owned()
}

/// Parse a sheet date for ordering.
///
/// Accepts `DD.MM.YYYY` (rewritten to ISO first), ISO dates and date-times,
/// RFC 3339 timestamps and the query endpoint's `Date(y,m,d[,h,mi,s])`
/// literals with zero-based months.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(parsed) = parse_gviz_date(trimmed) {
        return Some(parsed);
    }

    let iso = DOTTED_DATE_RE.replacen(trimmed, 1, "$3-$2-$1");
    let iso = iso.as_ref();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return Some(parsed.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(iso, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn parse_gviz_date(raw: &str) -> Option<NaiveDateTime> {
    let caps = GVIZ_DATE_RE.captures(raw)?;
    let num = |i: usize| -> Option<u32> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    let year = caps.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, num(2)? + 1, num(3)?)?.and_hms_opt(num(4)?, num(5)?, num(6)?)
}

/// Turn a sheet table into ordered news items.
///
/// Rows without a title or without a slug (explicit or derived) are
/// dropped. The result is sorted newest first; rows whose date cannot be
/// parsed keep their relative order after all dated rows.
#[must_use]
pub fn normalize_table(table: &Table, strategies: &[&dyn ColumnStrategy]) -> Vec<NewsItem> {
    let map = ColumnMap::resolve(&table.labels(), strategies);

    let mut dated: Vec<(Option<NaiveDateTime>, NewsItem)> = table
        .rows
        .iter()
        .filter_map(|row| {
            let title = row.text(map.get(NewsField::Title));
            let explicit_slug = row.text(map.get(NewsField::Slug));
            let slug = if explicit_slug.is_empty() {
                slugify(&title)
            } else {
                explicit_slug
            };
            if title.is_empty() || slug.is_empty() {
                return None;
            }

            let image = row.text(map.get(NewsField::Image));
            let item = NewsItem {
                slug,
                date: row.text(map.get(NewsField::Date)),
                title,
                summary: row.text(map.get(NewsField::Summary)),
                content: row.text(map.get(NewsField::Content)),
                image: (!image.is_empty()).then_some(image),
            };
            Some((parse_date(&item.date), item))
        })
        .collect();

    dated.sort_by_key(|(date, _)| Reverse(*date));
    dated.into_iter().map(|(_, item)| item).collect()
}
