use thiserror::Error;
use url::Url;

/// Errors that can occur during URL validation.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL has no host component.
    #[error("URL has no host")]
    MissingHost,
}

/// Validates a URL string for use as the feed source.
///
/// Rejects anything that is not an absolute `http://` or `https://` URL with a
/// host. The feed address is operator configuration, so loopback and private
/// addresses are allowed (useful for mirrors and local testing).
///
/// # Examples
///
/// ```
/// use hotelnews::util::validate_url;
///
/// let url = validate_url("https://www.hospitalitynet.org/news/global.xml").unwrap();
/// assert_eq!(url.host_str(), Some("www.hospitalitynet.org"));
///
/// assert!(validate_url("file:///etc/passwd").is_err());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// Returns true if `s` is an absolute http(s) URL that is safe to place in an
/// `href` or `src` attribute.
///
/// Used on article links and thumbnail URLs taken from the feed, which would
/// otherwise let a `javascript:` or `data:` URL into the generated page.
pub fn is_web_url(s: &str) -> bool {
    validate_url(s).is_ok()
}
