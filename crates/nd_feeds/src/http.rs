use async_trait::async_trait;
use feed_rs::model::Entry;
use nd_core::{Error, FeedEntry, FeedSource, Result};
use reqwest::Client;
use tracing::debug;

const USER_AGENT: &str = concat!("nd/", env!("CARGO_PKG_VERSION"));

/// Fetches feeds over HTTP and parses them with feed-rs (RSS, Atom, JSON Feed).
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_entries(&self, url: &str) -> Result<Vec<FeedEntry>> {
        debug!("🌐 GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("{} returned {}", url, status)));
        }

        let bytes = response.bytes().await?;
        parse_entries(&bytes)
    }
}

/// Parses a feed document into raw entries, keeping the document order.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = feed_rs::parser::parse(bytes)
        .map_err(|e| Error::Feed(format!("Failed to parse feed: {}", e)))?;
    Ok(feed.entries.into_iter().map(to_feed_entry).collect())
}

fn to_feed_entry(entry: Entry) -> FeedEntry {
    FeedEntry {
        title: entry.title.map(|t| t.content),
        link: entry.links.into_iter().next().map(|l| l.href),
        summary: entry.summary.map(|s| s.content),
        description: entry.content.and_then(|c| c.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example</title>
    <link>https://example.com</link>
    <description>Example feed</description>
    <item>
      <title>First</title>
      <link>https://example.com/1</link>
      <description>First description</description>
    </item>
    <item>
      <title>Second</title>
      <link>https://example.com/2</link>
      <content:encoded>Second body</content:encoded>
    </item>
    <item>
      <title>Third</title>
      <link>https://example.com/3</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example</title>
  <id>urn:example</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:example:1</id>
    <link href="https://example.com/atom/1"/>
    <updated>2024-01-01T00:00:00Z</updated>
    <summary>Atom summary</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_keeps_order_and_fields() {
        let entries = parse_entries(RSS.as_bytes()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title.as_deref(), Some("First"));
        assert_eq!(entries[0].link.as_deref(), Some("https://example.com/1"));
        assert_eq!(entries[0].summary.as_deref(), Some("First description"));
        assert_eq!(entries[1].title.as_deref(), Some("Second"));
        assert_eq!(entries[2].title.as_deref(), Some("Third"));
    }

    #[test]
    fn test_content_body_backs_a_missing_summary() {
        let entries = parse_entries(RSS.as_bytes()).unwrap();
        let article = entries[1].clone().into_article();
        assert_eq!(article.summary, "Second body");
    }

    #[test]
    fn test_entry_without_text_has_empty_summary() {
        let entries = parse_entries(RSS.as_bytes()).unwrap();
        let article = entries[2].clone().into_article();
        assert_eq!(article.summary, "");
    }

    #[test]
    fn test_parse_atom() {
        let entries = parse_entries(ATOM.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        let article = entries[0].clone().into_article();
        assert_eq!(article.title, "Atom entry");
        assert_eq!(article.link, "https://example.com/atom/1");
        assert_eq!(article.summary, "Atom summary");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = parse_entries(b"<html><body>not a feed</body></html>").unwrap_err();
        assert!(matches!(err, Error::Feed(_)));
    }

    #[tokio::test]
    async fn test_fetch_entries_over_http() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rss")
            .with_status(200)
            .with_header("content-type", "application/rss+xml")
            .with_body(RSS)
            .create_async()
            .await;

        let source = HttpFeedSource::new().unwrap();
        let entries = source
            .fetch_entries(&format!("{}/rss", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(entries.len(), 3);
    }

    #[tokio::test]
    async fn test_http_error_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpFeedSource::new().unwrap();
        let result = source
            .fetch_entries(&format!("{}/missing", server.url()))
            .await;

        assert!(matches!(result, Err(Error::Feed(_))));
    }

    #[tokio::test]
    async fn test_collector_swallows_http_failures() {
        let mut server = mockito::Server::new_async().await;
        let _ok = server
            .mock("GET", "/ok")
            .with_status(200)
            .with_body(RSS)
            .create_async()
            .await;
        let _down = server
            .mock("GET", "/down")
            .with_status(503)
            .create_async()
            .await;

        let source = HttpFeedSource::new().unwrap();
        let urls = [format!("{}/ok", server.url()), format!("{}/down", server.url())];
        let articles = nd_core::collect_all(&source, &urls, 2).await;

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[1].title, "Second");
    }
}
