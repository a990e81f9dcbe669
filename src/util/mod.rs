//! Utility functions for common operations.
//!
//! This module provides reusable utilities for:
//!
//! - **HTML escaping**: Entity escaping applied once when article records are built
//! - **URL validation**: Scheme checks for the feed source and for URLs embedded in pages
//!
//! # Examples
//!
//! ```
//! use hotelnews::util::{escape, is_web_url, validate_url};
//!
//! assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
//! assert!(is_web_url("https://example.com/story"));
//! assert!(validate_url("ftp://example.com/feed.xml").is_err());
//! ```

mod html;
mod url_validator;

pub use html::escape;
pub use url_validator::{is_web_url, validate_url, UrlValidationError};
