//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Client blocklist and request tracing
//! - [`routes`] - Route configuration
//!
//! Requests that do not match the expected body or query shape are refused
//! by axum's own extractor rejections (400/415/422, plain text).

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
