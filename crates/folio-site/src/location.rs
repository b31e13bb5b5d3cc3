//! Hash location parsing.

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Parsed `#<base>[/<detail>]` location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub base_id: String,
    pub detail_id: Option<String>,
}

impl Location {
    /// Parse a raw hash (with or without the leading `#`).
    ///
    /// The string is split on the first `/`. An empty base becomes
    /// `home_id`; an empty detail is treated as absent.
    #[must_use]
    pub fn parse(raw: &str, home_id: &str) -> Self {
        let trimmed = raw.strip_prefix('#').unwrap_or(raw);
        let (base, detail) = match trimmed.split_once('/') {
            Some((base, detail)) => (base, Some(detail)),
            None => (trimmed, None),
        };
        let base_id = if base.is_empty() { home_id } else { base };

        Self {
            base_id: base_id.to_owned(),
            detail_id: detail.filter(|d| !d.is_empty()).map(str::to_owned),
        }
    }

    /// Percent-decoded detail id; the raw value if it does not decode to UTF-8.
    #[must_use]
    pub fn decoded_detail(&self) -> Option<String> {
        self.detail_id.as_deref().map(|raw| {
            percent_decode_str(raw)
                .decode_utf8()
                .map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
        })
    }
}
