//! Configuration file parser for `hotelnews.toml`.
//!
//! The config file is optional. A missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::feed::{DEFAULT_ARTICLE_LIMIT, DEFAULT_USER_AGENT};
use crate::util::validate_url;

/// Feed fetched when no `feed_url` is configured.
pub const DEFAULT_FEED_URL: &str = "https://www.hospitalitynet.org/news/global.xml";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    /// A value parsed but is not usable.
    #[error("Invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Pipeline configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RSS feed to turn into pages.
    pub feed_url: String,

    /// Maximum number of articles per page. Must be at least 1.
    pub article_limit: usize,

    /// Directory receiving `news.html` and `news-fa.html`. Must already exist.
    pub output_dir: PathBuf,

    /// User-Agent header sent with the feed request.
    pub user_agent: String,

    /// Timeout for the whole feed download, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            article_limit: DEFAULT_ARTICLE_LIMIT,
            output_dir: PathBuf::from("."),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 5] = [
        "feed_url",
        "article_limit",
        "output_dir",
        "user_agent",
        "timeout_secs",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    ///
    /// Values are not validated here; call [`Config::validate`] after applying
    /// command-line overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading to avoid loading a huge or corrupted file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {} // Size is within limits, proceed
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            feed = %config.feed_url,
            limit = config.article_limit,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.article_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "article_limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "timeout_secs",
                reason: "must be at least 1".into(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "user_agent",
                reason: "must not be empty".into(),
            });
        }
        validate_url(&self.feed_url).map_err(|e| ConfigError::Invalid {
            key: "feed_url",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.article_limit, 10);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.user_agent.contains("Googlebot"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/hotelnews_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_whitespace");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");
        std::fs::write(&path, "   \n  \n  ").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");
        std::fs::write(&path, "article_limit = 5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.article_limit, 5);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL); // default
        assert_eq!(config.timeout_secs, 30); // default

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");

        let content = r#"
feed_url = "https://example.com/rss.xml"
article_limit = 6
output_dir = "/var/www/hotel_website"
user_agent = "Mozilla/5.0 (X11; Linux x86_64)"
timeout_secs = 12
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.feed_url, "https://example.com/rss.xml");
        assert_eq!(config.article_limit, 6);
        assert_eq!(config.output_dir, PathBuf::from("/var/www/hotel_website"));
        assert_eq!(config.user_agent, "Mozilla/5.0 (X11; Linux x86_64)");
        assert_eq!(config.timeout(), Duration::from_secs(12));
        assert!(config.validate().is_ok());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");

        let content = r#"
article_limit = 3
totally_fake_key = "should not fail"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.article_limit, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_wrongtype");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");
        std::fs::write(&path, "article_limit = \"ten\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("hotelnews_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hotelnews.toml");

        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = Config {
            article_limit: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "article_limit", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "timeout_secs", .. })
        ));
    }

    #[test]
    fn test_non_http_feed_url_rejected() {
        let config = Config {
            feed_url: "file:///etc/passwd".into(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "feed_url", .. })
        ));
    }
}
