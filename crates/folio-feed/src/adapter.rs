//! Memoized news feed.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::{FeedSource, FeedTransport};
use crate::columns::DEFAULT_STRATEGIES;
use crate::envelope::parse_envelope;
use crate::normalize::normalize_table;
use crate::{FeedError, NewsItem};

/// News feed backed by a published spreadsheet.
///
/// The first successful fetch is cached for the lifetime of the value.
/// Concurrent first callers share a single request; a failed fetch is not
/// cached, so the next call retries.
pub struct NewsFeed {
    transport: Arc<dyn FeedTransport>,
    source: FeedSource,
    cache: OnceCell<Arc<Vec<NewsItem>>>,
}

impl NewsFeed {
    #[must_use]
    pub fn new(transport: Arc<dyn FeedTransport>, source: FeedSource) -> Self {
        Self {
            transport,
            source,
            cache: OnceCell::new(),
        }
    }

    /// Normalized, newest-first news items.
    ///
    /// An unconfigured source yields an empty list without any request.
    pub async fn fetch_news(&self) -> Result<Arc<Vec<NewsItem>>, FeedError> {
        let items = self.cache.get_or_try_init(|| self.load()).await?;
        Ok(Arc::clone(items))
    }

    async fn load(&self) -> Result<Arc<Vec<NewsItem>>, FeedError> {
        let Some(url) = self.source.query_url() else {
            tracing::debug!("news sheet not configured");
            return Ok(Arc::new(Vec::new()));
        };

        tracing::info!(%url, "fetching news feed");
        let body = self.transport.fetch(&url).await?;
        let table = parse_envelope(&body)?;
        let items = normalize_table(&table, &DEFAULT_STRATEGIES);
        tracing::info!(count = items.len(), "news feed loaded");
        Ok(Arc::new(items))
    }

    /// Whether a successful fetch is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.initialized()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    const BODY: &str = r#"google.visualization.Query.setResponse({"table":{
        "cols":[{"label":"slug"},{"label":"date"},{"label":"title"}],
        "rows":[{"c":[{"v":"a"},{"v":"2026-01-01"},{"v":"A"}]}]}});"#;

    struct CountingTransport {
        calls: AtomicUsize,
        responses: std::sync::Mutex<Vec<Result<String, FeedError>>>,
    }

    impl CountingTransport {
        fn new(responses: Vec<Result<String, FeedError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses: std::sync::Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl FeedTransport for CountingTransport {
        async fn fetch(&self, _url: &str) -> Result<String, FeedError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn source() -> FeedSource {
        FeedSource::new(Some("sheet"), "0", "https://example.org/d")
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_first_fetch_is_single_flight() {
        let transport = Arc::new(CountingTransport::new(vec![Ok(BODY.to_owned())]));
        let feed = NewsFeed::new(Arc::clone(&transport) as Arc<dyn FeedTransport>, source());

        let (a, b) = tokio::join!(feed.fetch_news(), feed.fetch_news());

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_not_cached() {
        let transport = Arc::new(CountingTransport::new(vec![
            Err(FeedError::Unavailable { status: 500 }),
            Ok(BODY.to_owned()),
        ]));
        let feed = NewsFeed::new(Arc::clone(&transport) as Arc<dyn FeedTransport>, source());

        let first = feed.fetch_news().await;
        assert!(matches!(first, Err(FeedError::Unavailable { status: 500 })));
        assert!(!feed.is_cached());

        let second = feed.fetch_news().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].slug, "a");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_source_skips_transport() {
        let transport = Arc::new(CountingTransport::new(Vec::new()));
        let feed = NewsFeed::new(
            Arc::clone(&transport) as Arc<dyn FeedTransport>,
            FeedSource::new(None, "0", "https://example.org/d"),
        );

        let items = feed.fetch_news().await.unwrap();

        assert!(items.is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_format_error_propagates() {
        let transport = Arc::new(CountingTransport::new(vec![Ok("nope".to_owned())]));
        let feed = NewsFeed::new(transport, source());

        let err = feed.fetch_news().await.unwrap_err();

        assert!(matches!(err, FeedError::Format));
    }
}
