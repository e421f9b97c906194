//! Short URL creation, redirect and status service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, NewUsage, ShortUrl, UrlHistory};
use crate::domain::repositories::{ShortUrlRepository, Totals};
use crate::error::AppError;
use crate::utils::code_generator::{build_short_url, generate_url_id, is_valid_url_id};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Attempts at finding a free code before giving up.
const MAX_ATTEMPTS: usize = 10;

/// What `GET /{url_id}/status` reports.
#[derive(Debug, Clone)]
pub enum UrlStatus {
    /// Only the usage counter.
    Usages(i64),
    /// A page of redirect history.
    History(Vec<UrlHistory>),
}

/// Parameters of a status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusQuery {
    pub full_info: bool,
    pub limit: i64,
    pub offset: i64,
}

/// Service for creating short URLs, following them and reporting usage.
///
/// Holds the public base URL every short URL is built from.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
    base_url: String,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Shortens a single URL.
    ///
    /// Each call creates a new record, even for a URL shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Internal`] if no free code was found in
    /// `MAX_ATTEMPTS` tries or on database errors.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        let original_url = validate_url(original_url, None)?;

        for _ in 0..MAX_ATTEMPTS {
            match self
                .repository
                .create(self.new_record(original_url.clone(), generate_url_id()))
                .await
            {
                Ok(created) => {
                    tracing::info!(
                        "Short url created {} -> {}",
                        created.original_url,
                        created.short_url
                    );
                    return Ok(created);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!("Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(too_many_collisions())
    }

    /// Shortens a batch of URLs atomically.
    ///
    /// All URLs are validated before anything is written; the records are
    /// stored in one transaction and returned in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the index of the first invalid URL.
    /// See [`Self::shorten`] for the remaining cases.
    pub async fn shorten_many(&self, original_urls: &[String]) -> Result<Vec<ShortUrl>, AppError> {
        let normalized = original_urls
            .iter()
            .enumerate()
            .map(|(index, url)| validate_url(url, Some(index)))
            .collect::<Result<Vec<_>, _>>()?;

        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        for _ in 0..MAX_ATTEMPTS {
            let codes = distinct_codes(normalized.len());
            let records = normalized
                .iter()
                .cloned()
                .zip(codes)
                .map(|(url, code)| self.new_record(url, code))
                .collect();

            match self.repository.create_many(records).await {
                Ok(created) => {
                    tracing::info!("Bulk created {} short urls", created.len());
                    return Ok(created);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!("Short code collision in batch, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(too_many_collisions())
    }

    /// Follows a short URL on behalf of `client`.
    ///
    /// Increments the usage counter and records a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, url_id: &str, client: &str) -> Result<ShortUrl, AppError> {
        if !is_valid_url_id(url_id) {
            return Err(url_not_found(url_id));
        }

        let short_url = self
            .repository
            .record_usage(url_id, NewUsage::new(client))
            .await?
            .ok_or_else(|| url_not_found(url_id))?;

        tracing::info!(
            "Redirect {} -> {}",
            short_url.short_url,
            short_url.original_url
        );

        Ok(short_url)
    }

    /// Reports usage of a short URL: the counter, or a page of history
    /// when `query.full_info` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn status(&self, url_id: &str, query: StatusQuery) -> Result<UrlStatus, AppError> {
        let short_url = self.get(url_id).await?;

        if !query.full_info {
            return Ok(UrlStatus::Usages(short_url.usages_count));
        }

        let history = self
            .repository
            .history(short_url.id, query.limit, query.offset)
            .await?;

        Ok(UrlStatus::History(history))
    }

    /// Retrieves a short URL without recording a use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get(&self, url_id: &str) -> Result<ShortUrl, AppError> {
        if !is_valid_url_id(url_id) {
            return Err(url_not_found(url_id));
        }

        self.repository
            .find_by_url_id(url_id)
            .await?
            .ok_or_else(|| url_not_found(url_id))
    }

    /// Deletes a short URL together with its history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn delete(&self, url_id: &str) -> Result<(), AppError> {
        if self.repository.delete_by_url_id(url_id).await? {
            tracing::info!("Short url {} deleted", url_id);
            Ok(())
        } else {
            Err(url_not_found(url_id))
        }
    }

    /// Row totals for reporting.
    pub async fn totals(&self) -> Result<Totals, AppError> {
        self.repository.count().await
    }

    /// Returns whether the database answers queries.
    pub async fn ping(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }

    fn new_record(&self, original_url: String, url_id: String) -> NewShortUrl {
        let short_url = build_short_url(&self.base_url, &url_id);
        NewShortUrl::new(original_url, url_id, short_url)
    }
}

fn validate_url(url: &str, index: Option<usize>) -> Result<String, AppError> {
    normalize_url(url).map_err(|e| {
        let details = match index {
            Some(index) => json!({ "index": index, "reason": e.to_string() }),
            None => json!({ "reason": e.to_string() }),
        };
        AppError::bad_request("Invalid URL format", details)
    })
}

/// Generates `n` codes that are pairwise distinct.
fn distinct_codes(n: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(n);
    let mut codes = Vec::with_capacity(n);

    while codes.len() < n {
        let code = generate_url_id();
        if seen.insert(code.clone()) {
            codes.push(code);
        }
    }

    codes
}

fn url_not_found(url_id: &str) -> AppError {
    AppError::not_found("Url not found", json!({ "url_id": url_id }))
}

fn too_many_collisions() -> AppError {
    AppError::internal(
        "Failed to generate unique code",
        json!({ "reason": "Too many collisions" }),
    )
}
