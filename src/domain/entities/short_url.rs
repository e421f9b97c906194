//! Short URL entity representing a code → original URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored short URL record.
///
/// `url_id` is the generated short code, `short_url` is the absolute URL
/// handed back to clients.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: Uuid,
    pub original_url: String,
    pub url_id: String,
    pub short_url: String,
    pub usages_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: Uuid,
        original_url: String,
        url_id: String,
        short_url: String,
        usages_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            url_id,
            short_url,
            usages_count,
            created_at,
        }
    }
}

/// Input data for inserting a short URL.
///
/// The usage counter always starts at zero and `created_at` is set by the
/// database.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub id: Uuid,
    pub original_url: String,
    pub url_id: String,
    pub short_url: String,
}

impl NewShortUrl {
    /// Builds an insert payload with a fresh v4 identifier.
    pub fn new(original_url: String, url_id: String, short_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_url,
            url_id,
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_creation() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let url = ShortUrl::new(
            id,
            "https://example.com/".to_string(),
            "abcd2345".to_string(),
            "http://localhost:8000/api/v1/abcd2345".to_string(),
            0,
            now,
        );

        assert_eq!(url.id, id);
        assert_eq!(url.url_id, "abcd2345");
        assert_eq!(url.created_at, now);
        assert_eq!(url.usages_count, 0);
    }

    #[test]
    fn test_short_url_used() {
        let url = ShortUrl::new(
            Uuid::new_v4(),
            "https://example.com/".to_string(),
            "abcd2345".to_string(),
            "http://localhost:8000/api/v1/abcd2345".to_string(),
            3,
            Utc::now(),
        );
        assert_eq!(url.usages_count, 3);
    }

    #[test]
    fn test_new_short_url_gets_distinct_ids() {
        let a = NewShortUrl::new("https://a.com/".into(), "aaaa2222".into(), "x/aaaa2222".into());
        let b = NewShortUrl::new("https://b.com/".into(), "bbbb3333".into(), "x/bbbb3333".into());

        assert_ne!(a.id, b.id);
        assert_eq!(a.url_id, "aaaa2222");
        assert_eq!(b.original_url, "https://b.com/");
    }
}
