//! DTOs for short URL creation endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Largest batch accepted by `POST /shorten`.
pub const MAX_BATCH_SIZE: u64 = 1000;

/// Request to shorten a single URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (absolute HTTP/HTTPS).
    #[validate(length(min = 1, max = 2048), url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// Request to shorten a batch of URLs.
///
/// The body is a bare JSON array of [`ShortenRequest`] objects.
#[derive(Debug, Deserialize, Validate)]
#[serde(transparent)]
pub struct BulkShortenRequest {
    #[validate(length(max = MAX_BATCH_SIZE), nested)]
    pub items: Vec<ShortenRequest>,
}

impl BulkShortenRequest {
    pub fn original_urls(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.original_url.clone())
            .collect()
    }
}

/// A created short URL.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub url_id: String,
    pub short_url: String,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(short_url: ShortUrl) -> Self {
        Self {
            url_id: short_url.url_id,
            short_url: short_url.short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_request_validation() {
        let ok: ShortenRequest =
            serde_json::from_value(json!({ "original_url": "https://example.com" })).unwrap();
        assert!(ok.validate().is_ok());

        let bad: ShortenRequest =
            serde_json::from_value(json!({ "original_url": "not a url" })).unwrap();
        assert!(bad.validate().is_err());

        let empty: ShortenRequest =
            serde_json::from_value(json!({ "original_url": "" })).unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = json!({ "url": "https://x.io" });
        assert!(serde_json::from_value::<ShortenRequest>(body).is_err());
    }

    #[test]
    fn test_bulk_request_is_bare_array() {
        let request: BulkShortenRequest = serde_json::from_value(json!([
            { "original_url": "https://example.com/1" },
            { "original_url": "https://example.com/2" }
        ]))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(
            request.original_urls(),
            vec!["https://example.com/1", "https://example.com/2"]
        );
    }

    #[test]
    fn test_bulk_request_nested_validation() {
        let request: BulkShortenRequest = serde_json::from_value(json!([
            { "original_url": "https://example.com" },
            { "original_url": "nope" }
        ]))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bulk_request_too_large() {
        let items: Vec<_> = (0..=MAX_BATCH_SIZE)
            .map(|i| json!({ "original_url": format!("https://example.com/{i}") }))
            .collect();
        let request: BulkShortenRequest = serde_json::from_value(json!(items)).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bulk_request_empty_is_valid() {
        let request: BulkShortenRequest = serde_json::from_value(json!([])).unwrap();
        assert!(request.validate().is_ok());
    }
}
