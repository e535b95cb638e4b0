use serde::{Deserialize, Serialize};

/// One normalized feed item used as summarization input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
}

/// A raw entry as delivered by a feed source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl FeedEntry {
    /// Missing titles and links become empty strings. The summary falls back
    /// to the description when it is absent or empty.
    pub fn into_article(self) -> Article {
        let summary = self
            .summary
            .filter(|s| !s.is_empty())
            .or(self.description)
            .unwrap_or_default();

        Article {
            title: self.title.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            summary,
        }
    }
}

/// Outcome of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub article_count: usize,
    pub summary: String,
}
