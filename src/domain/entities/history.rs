//! History entity representing a single redirect of a short URL.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum stored length of a client address.
pub const CLIENT_MAX_LEN: usize = 50;

/// One recorded use of a short URL.
///
/// History rows are write-once: they are inserted on redirect and only
/// disappear when the parent short URL is deleted.
#[derive(Debug, Clone)]
pub struct UrlHistory {
    pub id: Uuid,
    /// Id of the parent [`crate::domain::entities::ShortUrl`].
    pub short_url: Uuid,
    pub client: String,
    pub use_at: DateTime<Utc>,
}

impl UrlHistory {
    /// Creates a new UrlHistory instance.
    pub fn new(id: Uuid, short_url: Uuid, client: String, use_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_url,
            client,
            use_at,
        }
    }
}

/// Data recorded for a redirect.
///
/// The client address is truncated to [`CLIENT_MAX_LEN`] characters to fit
/// the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsage {
    pub client: String,
}

impl NewUsage {
    pub fn new(client: impl Into<String>) -> Self {
        let client: String = client.into();
        Self {
            client: client.chars().take(CLIENT_MAX_LEN).collect(),
        }
    }
}
