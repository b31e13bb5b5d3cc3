//! Feed transport and source addressing.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use ureq::Agent;

use crate::FeedError;

/// Sheet id placeholder shipped in unconfigured site templates.
pub const PLACEHOLDER_SHEET_ID: &str = "PUT_YOUR_SHEET_ID_HERE";

static SHEET_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spreadsheets/d/([a-zA-Z0-9_-]+)").unwrap());

/// Fetches the raw feed body.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// GET `url` and return the body of a success response.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Unavailable`] for non-success statuses and
    /// [`FeedError::Transport`] when the request itself fails.
    async fn fetch(&self, url: &str) -> Result<String, FeedError>;
}

/// Blocking HTTP transport run on the tokio blocking pool.
#[derive(Clone)]
pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

fn get_text(agent: &Agent, url: &str) -> Result<String, FeedError> {
    let response = agent
        .get(url)
        .header("Cache-Control", "no-store")
        .call()
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(FeedError::Unavailable { status });
    }

    let mut body = response.into_body();
    body.read_to_string()
        .map_err(|e| FeedError::Transport(e.to_string()))
}

#[async_trait]
impl FeedTransport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let agent = self.agent.clone();
        let url = url.to_owned();
        tokio::task::spawn_blocking(move || get_text(&agent, &url))
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?
    }
}

/// Where the news sheet lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    sheet_id: Option<String>,
    gid: String,
    endpoint: String,
}

impl FeedSource {
    /// Build a source from configuration values.
    ///
    /// `sheet_id` may be a bare id or a full spreadsheet URL. An empty or
    /// placeholder id leaves the source unconfigured.
    #[must_use]
    pub fn new(sheet_id: Option<&str>, gid: &str, endpoint: &str) -> Self {
        let sheet_id = sheet_id
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != PLACEHOLDER_SHEET_ID)
            .map(normalize_sheet_id);
        Self {
            sheet_id,
            gid: gid.to_owned(),
            endpoint: endpoint.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.sheet_id.is_some()
    }

    /// Visualization query URL, or `None` when no sheet is configured.
    #[must_use]
    pub fn query_url(&self) -> Option<String> {
        let id = self.sheet_id.as_deref()?;
        let gid = utf8_percent_encode(&self.gid, NON_ALPHANUMERIC);
        Some(format!(
            "{}/{id}/gviz/tq?tqx=out:json&gid={gid}&headers=1",
            self.endpoint
        ))
    }
}

/// Extract the sheet id from a spreadsheet URL, or return the value trimmed.
#[must_use]
pub fn normalize_sheet_id(value: &str) -> String {
    let value = value.trim();
    SHEET_URL_RE
        .captures(value)
        .and_then(|c| c.get(1))
        .map_or(value, |m| m.as_str())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://docs.google.com/spreadsheets/d";

    #[test]
    fn test_normalize_sheet_id_from_url() {
        assert_eq!(
            normalize_sheet_id("https://docs.google.com/spreadsheets/d/abc-DEF_123/edit#gid=0"),
            "abc-DEF_123"
        );
        assert_eq!(normalize_sheet_id("  abc  "), "abc");
    }

    #[test]
    fn test_query_url() {
        let source = FeedSource::new(Some("abc"), "0", ENDPOINT);

        assert_eq!(
            source.query_url().as_deref(),
            Some("https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:json&gid=0&headers=1")
        );
    }

    #[test]
    fn test_gid_is_encoded() {
        let source = FeedSource::new(Some("abc"), "1 2", ENDPOINT);

        assert!(source.query_url().unwrap().contains("gid=1%202&"));
    }

    #[test]
    fn test_unconfigured_sources() {
        for id in [None, Some(""), Some("  "), Some(PLACEHOLDER_SHEET_ID)] {
            let source = FeedSource::new(id, "0", ENDPOINT);
            assert!(!source.is_configured(), "{id:?}");
            assert_eq!(source.query_url(), None);
        }
    }
}
