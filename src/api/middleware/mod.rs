//! HTTP middleware for request processing.
//!
//! Provides the client blocklist and request tracing.

pub mod blocklist;
pub mod tracing;
