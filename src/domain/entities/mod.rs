//! Core domain entities.
//!
//! - [`ShortUrl`] - A short code mapped to an original URL
//! - [`UrlHistory`] - A single recorded redirect of a short URL
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewShortUrl` for inserts and `NewUsage` for recording a redirect.

pub mod history;
pub mod short_url;

pub use history::{NewUsage, UrlHistory};
pub use short_url::{NewShortUrl, ShortUrl};
