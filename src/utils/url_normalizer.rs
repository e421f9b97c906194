//! Validation and canonicalisation of user supplied URLs.

use url::Url;

/// Longest original URL accepted for shortening.
pub const MAX_URL_LEN: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL is longer than {MAX_URL_LEN} characters")]
    TooLong,
}

/// Normalizes a URL to a canonical form.
///
/// Only `http` and `https` are accepted. The host is lowercased and a
/// default port (80/443) removed. Path, query and fragment are preserved
/// as given.
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] when the input is not an absolute
/// HTTP(S) URL with a host, or exceeds [`MAX_URL_LEN`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path#top").unwrap(),
///     "https://example.com/Path#top"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    if input.len() > MAX_URL_LEN {
        return Err(UrlNormalizationError::TooLong);
    }

    let url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    // Url::parse already lowercases registered domain names.
    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    // The url crate drops a port equal to the scheme default on parse.
    // The fragment is part of the redirect target and stays.
    Ok(url.to_string())
}
