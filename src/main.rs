use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use hotelnews::config::Config;
use hotelnews::pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "hotelnews",
    about = "Generate English and Farsi news pages from an RSS feed"
)]
struct Args {
    /// Config file (TOML). Missing file means built-in defaults
    #[arg(long, value_name = "FILE", default_value = "hotelnews.toml")]
    config: PathBuf,

    /// Override the feed URL
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Override the number of articles per page
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Override the directory the pages are written to
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    if let Some(url) = args.feed_url {
        config.feed_url = url;
    }
    if let Some(limit) = args.limit {
        config.article_limit = limit;
    }
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }
    config.validate().context("Invalid configuration")?;

    println!("Fetching RSS feed from {}", config.feed_url);
    let report = pipeline::run(&config)
        .await
        .context("News page generation failed")?;

    println!(
        "Generated {} and {} with {} items.",
        report.default_path.display(),
        report.alternate_path.display(),
        report.records
    );
    Ok(())
}
