//! DTOs for the usage status endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::StatusQuery;
use crate::domain::entities::UrlHistory;

pub const DEFAULT_MAX_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Query string of `GET /{url_id}/status`.
///
/// Parameter names are hyphenated: `full-info`, `max-size`, `offset`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StatusParams {
    #[serde(default, rename = "full-info", deserialize_with = "query_flag::deserialize")]
    pub full_info: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "max-size")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub max_size: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// Boolean query values in the forms clients commonly send
/// (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n`),
/// case-insensitive.
mod query_flag {
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn parse(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
            "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("'{s}' is not a valid boolean"))),
        }
    }
}

impl From<StatusParams> for StatusQuery {
    fn from(params: StatusParams) -> Self {
        Self {
            full_info: params.full_info.unwrap_or(false),
            limit: params.max_size.unwrap_or(DEFAULT_MAX_SIZE),
            offset: params.offset.unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsagesCountResponse {
    pub usages_count: i64,
}

/// One redirect in the history listing.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub use_at: DateTime<Utc>,
    pub client: String,
    pub id: String,
    /// Id of the short URL record the redirect belongs to.
    pub short_url: String,
}

impl From<UrlHistory> for HistoryItem {
    fn from(history: UrlHistory) -> Self {
        Self {
            use_at: history.use_at,
            client: history.client,
            id: history.id.to_string(),
            short_url: history.short_url.to_string(),
        }
    }
}
