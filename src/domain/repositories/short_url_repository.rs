//! Repository trait for short URL and usage history data access.

use crate::domain::entities::{NewShortUrl, NewUsage, ShortUrl, UrlHistory};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Row totals reported by [`ShortUrlRepository::count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub urls: i64,
    pub history: i64,
}

/// Repository interface for short URLs and their redirect history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the `url_id` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Inserts several short URLs in one transaction.
    ///
    /// Either every record is stored or none is. The returned records are in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if any `url_id` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_many(&self, new_urls: Vec<NewShortUrl>) -> Result<Vec<ShortUrl>, AppError>;

    /// Finds a short URL by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_id(&self, url_id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Records one redirect of `url_id`.
    ///
    /// Increments the usage counter and appends a history row atomically.
    /// Returns the updated record, or `None` if the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_usage(
        &self,
        url_id: &str,
        usage: NewUsage,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Lists history rows for a short URL id, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn history(
        &self,
        short_url_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UrlHistory>, AppError>;

    /// Deletes a short URL and, through the foreign key, its history.
    ///
    /// Returns `Ok(false)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_url_id(&self, url_id: &str) -> Result<bool, AppError>;

    /// Counts stored short URLs and history rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<Totals, AppError>;

    /// Checks that the database answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
