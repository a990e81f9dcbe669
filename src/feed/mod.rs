//! Feed acquisition and parsing.
//!
//! This module covers the first two stages of the pipeline:
//!
//! - **Fetching**: A single HTTP GET of the configured feed with a crawler user agent
//! - **Parsing**: Streaming RSS 2.0 extraction into bounded, escaped [`ArticleRecord`]s
//!
//! # Architecture
//!
//! - [`fetcher`] - HTTP retrieval with timeout and body size limit
//! - [`parser`] - Namespace-aware `quick-xml` reader for `channel/item` elements
//! - [`date`] - `pubDate` normalization with an explicit raw fallback
//! - [`record`] - The escaped, immutable article record
//!
//! # Example
//!
//! ```ignore
//! use hotelnews::feed::{build_client, fetch_feed, parse_feed};
//!
//! let client = build_client(DEFAULT_USER_AGENT)?;
//! let bytes = fetch_feed(&client, url, Duration::from_secs(30)).await?;
//! let records = parse_feed(&bytes, 10)?;
//! ```

pub mod date;
pub mod fetcher;
pub mod parser;
pub mod record;

pub use date::{normalize_date, PubDate};
pub use fetcher::{build_client, fetch_feed, FetchError, DEFAULT_USER_AGENT};
pub use parser::{parse_feed, ParseError, DEFAULT_ARTICLE_LIMIT, MEDIA_RSS_NS};
pub use record::ArticleRecord;
