//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - Short URL CRUD, usage counting and history
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod short_url_repository;

pub use short_url_repository::{ShortUrlRepository, Totals};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
