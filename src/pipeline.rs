//! The fetch → parse → render → publish run.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;
use crate::feed::{build_client, fetch_feed, parse_feed, FetchError, ParseError};
use crate::publish::{publish, PublishError};
use crate::render::{render, Locale};

/// A stage failure. Each one aborts the run; nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The feed could not be downloaded.
    #[error("Could not fetch feed: {0}")]
    Transport(#[from] FetchError),
    /// The downloaded bytes are not a usable feed document.
    #[error("Could not parse feed: {0}")]
    MalformedFeed(#[from] ParseError),
    /// A page could not be written.
    #[error("Could not publish pages: {0}")]
    Write(#[from] PublishError),
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Number of articles on each page.
    pub records: usize,
    pub default_path: PathBuf,
    pub alternate_path: PathBuf,
}

/// Runs the whole pipeline once with an already validated `config`.
pub async fn run(config: &Config) -> Result<PipelineReport, PipelineError> {
    let client = build_client(&config.user_agent)?;
    let bytes = fetch_feed(&client, &config.feed_url, config.timeout()).await?;

    let records = parse_feed(&bytes, config.article_limit)?;
    tracing::info!(
        feed = %config.feed_url,
        records = records.len(),
        limit = config.article_limit,
        "Extracted articles"
    );

    let default_page = render(&records, Locale::English);
    let alternate_page = render(&records, Locale::Farsi);

    let (default_path, alternate_path) =
        publish(&default_page, &alternate_page, &config.output_dir)?;

    Ok(PipelineReport {
        records: records.len(),
        default_path,
        alternate_path,
    })
}
