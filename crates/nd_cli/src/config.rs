use std::fmt;
use std::time::Duration;
use clap::Parser;
use nd_core::{Error, PipelineSettings, Result};
use nd_inference::InferenceConfig;
use url::Url;
use crate::duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize the latest feed items with a language model and post the digest to a chat webhook", long_about = None)]
pub struct Cli {
    /// Chat-completion API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Incoming webhook that receives the digest
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,
    #[arg(long, default_value = "openai", help = "Model to use for summarization. Available models: openai (default), dummy")]
    model: String,
    #[arg(long, default_value = nd_inference::DEFAULT_MODEL_NAME)]
    model_name: String,
    #[arg(long, default_value_t = nd_inference::DEFAULT_TEMPERATURE)]
    temperature: f64,
    #[arg(long, env = "OPENAI_BASE_URL", default_value = nd_inference::DEFAULT_API_BASE)]
    api_base: String,
    /// Newest entries to take from each feed
    #[arg(long, default_value_t = 1)]
    max_items: usize,
    /// Feed to poll; repeat to poll several. Replaces the built-in list.
    #[arg(long = "feed", value_name = "URL")]
    feeds: Vec<String>,
    /// Print the digest instead of posting it
    #[arg(long)]
    dry_run: bool,
    /// Print the composed prompt and exit without calling the model
    #[arg(long)]
    print_prompt: bool,
    /// Run periodically with the specified interval (e.g. 1h, 30m, 1d, 1h15m30s)
    #[arg(long)]
    interval: Option<HumanDuration>,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Everything a run needs, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub inference: InferenceConfig,
    pub webhook_url: Option<String>,
    pub pipeline: PipelineSettings,
    pub dry_run: bool,
    pub print_prompt: bool,
    pub interval: Option<Duration>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("inference", &self.inference)
            .field("webhook_url", &self.webhook_url.as_deref().map(|_| "<redacted>"))
            .field("pipeline", &self.pipeline)
            .field("dry_run", &self.dry_run)
            .field("print_prompt", &self.print_prompt)
            .field("interval", &self.interval)
            .finish()
    }
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !(0.0..=2.0).contains(&cli.temperature) {
            return Err(Error::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                cli.temperature
            )));
        }

        let feed_urls = if cli.feeds.is_empty() {
            nd_feeds::default_feeds()
        } else {
            cli.feeds
        };
        for feed in &feed_urls {
            validate_feed_url(feed)?;
        }

        let interval = match cli.interval {
            Some(HumanDuration(d)) if d.is_zero() => {
                return Err(Error::Config("interval must be longer than zero".to_string()));
            }
            other => other.map(|d| d.0),
        };

        Ok(Self {
            inference: InferenceConfig {
                model: cli.model,
                api_key: cli.api_key,
                model_name: cli.model_name,
                temperature: cli.temperature,
                api_base: cli.api_base,
            },
            webhook_url: cli.webhook_url,
            pipeline: PipelineSettings {
                feed_urls,
                max_items: cli.max_items,
            },
            dry_run: cli.dry_run,
            print_prompt: cli.print_prompt,
            interval,
        })
    }
}

fn validate_feed_url(feed: &str) -> Result<()> {
    let url = Url::parse(feed).map_err(|e| Error::InvalidUrl(format!("{}: {}", feed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::Config(format!(
            "feed {} uses unsupported scheme '{}'",
            feed, scheme
        ))),
    }
}
