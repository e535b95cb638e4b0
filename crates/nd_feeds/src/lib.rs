pub mod http;
pub mod sources;

pub use http::{parse_entries, HttpFeedSource};
pub use sources::{default_feeds, DEFAULT_FEEDS};

pub mod prelude {
    pub use super::http::HttpFeedSource;
    pub use super::sources::DEFAULT_FEEDS;
    pub use nd_core::{Article, FeedEntry, FeedSource, Result, Error};
}
