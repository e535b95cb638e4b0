use tracing::{debug, warn};
use crate::models::FeedSource;
use crate::types::Article;

/// Collects up to `max_items` articles from one feed, in the feed's order.
///
/// A failing feed contributes nothing: the error is logged and an empty list
/// is returned so the rest of the run can proceed.
pub async fn collect_articles(source: &dyn FeedSource, url: &str, max_items: usize) -> Vec<Article> {
    match source.fetch_entries(url).await {
        Ok(entries) => {
            let articles: Vec<Article> = entries
                .into_iter()
                .take(max_items)
                .map(|entry| entry.into_article())
                .collect();
            debug!("📰 {} article(s) from {}", articles.len(), url);
            articles
        }
        Err(e) => {
            warn!("⚠️ Skipping feed {}: {}", url, e);
            Vec::new()
        }
    }
}

/// Collects every feed one after another and concatenates the results.
pub async fn collect_all<S: AsRef<str>>(source: &dyn FeedSource, urls: &[S], max_items: usize) -> Vec<Article> {
    let mut articles = Vec::new();
    for url in urls {
        articles.extend(collect_articles(source, url.as_ref(), max_items).await);
    }
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticFeeds;

    #[tokio::test]
    async fn test_truncates_to_max_items_in_order() {
        let feeds = StaticFeeds::new().with_feed("https://a.example/rss", 5);

        let articles = collect_articles(&feeds, "https://a.example/rss", 3).await;

        assert_eq!(articles.len(), 3);
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "https://a.example/rss #0",
                "https://a.example/rss #1",
                "https://a.example/rss #2"
            ]
        );
    }

    #[tokio::test]
    async fn test_short_feed_returns_everything() {
        let feeds = StaticFeeds::new().with_feed("https://a.example/rss", 2);
        let articles = collect_articles(&feeds, "https://a.example/rss", 10).await;
        assert_eq!(articles.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_max_items_yields_nothing() {
        let feeds = StaticFeeds::new().with_feed("https://a.example/rss", 2);
        assert!(collect_articles(&feeds, "https://a.example/rss", 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_failing_feed_is_swallowed() {
        let feeds = StaticFeeds::new().with_failing("https://down.example/rss");
        assert!(collect_articles(&feeds, "https://down.example/rss", 1).await.is_empty());
    }

    #[tokio::test]
    async fn test_collect_all_keeps_feed_order() {
        let feeds = StaticFeeds::new()
            .with_feed("https://a.example/rss", 2)
            .with_failing("https://b.example/rss")
            .with_feed("https://c.example/rss", 2);
        let urls = ["https://a.example/rss", "https://b.example/rss", "https://c.example/rss"];

        let articles = collect_all(&feeds, &urls, 1).await;

        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["https://a.example/rss/0", "https://c.example/rss/0"]);
    }
}
