/// Feeds polled when no `--feed` is given.
pub const DEFAULT_FEEDS: [&str; 10] = [
    // international
    "https://techcrunch.com/tag/artificial-intelligence/feed/",
    "https://venturebeat.com/category/ai/feed/",
    "https://www.technologyreview.com/feed/",
    "https://www.theverge.com/artificial-intelligence/rss/index.xml",
    "http://feeds.bbci.co.uk/news/technology/rss.xml",
    // japan
    "https://www.nikkei.com/rss/technology.rdf",
    "https://rss.itmedia.co.jp/rss/2.0/news_bursts.xml",
    "https://www.hrpro.co.jp/rss/",
    "https://jinjibu.jp/rss/news.xml",
    "https://ai-scholar.tech/feed",
];

pub fn default_feeds() -> Vec<String> {
    DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect()
}
