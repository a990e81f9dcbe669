//! Turns a hospitality news RSS feed into two static HTML pages: an English
//! (left-to-right) page and a Farsi (right-to-left) page sharing the same
//! articles.
//!
//! The pipeline runs in four stages, each usable on its own:
//!
//! 1. [`feed::fetch_feed`] downloads the feed with a crawler user agent
//! 2. [`feed::parse_feed`] extracts at most `limit` escaped [`feed::ArticleRecord`]s
//! 3. [`render::render`] builds a page per [`render::Locale`]
//! 4. [`publish::publish`] writes `news.html` and `news-fa.html`
//!
//! [`pipeline::run`] chains them for one unattended run.

pub mod config;
pub mod feed;
pub mod pipeline;
pub mod publish;
pub mod render;
pub mod util;
