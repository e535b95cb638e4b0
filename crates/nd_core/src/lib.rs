pub mod collector;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use collector::{collect_all, collect_articles};
pub use error::{Error, Stage};
pub use models::{FeedSource, Notifier, Summarizer};
pub use pipeline::{Pipeline, PipelineSettings};
pub use prompt::{compose_prompt, render_article, PROMPT_PREAMBLE};
pub use types::{Article, FeedEntry, RunReport};

pub type Result<T> = std::result::Result<T, Error>;
