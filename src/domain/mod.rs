//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].
//!
//! # Redirect Flow
//!
//! 1. HTTP handler resolves the client address
//! 2. [`crate::application::services::ShortUrlService::resolve`] is called
//! 3. [`repositories::ShortUrlRepository::record_usage`] bumps the counter
//!    and writes a [`entities::UrlHistory`] row in one transaction

pub mod entities;
pub mod repositories;
