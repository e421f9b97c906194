//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - URL validation and normalization
//! - [`client_addr`] - Client address resolution from connection info and proxy headers

pub mod client_addr;
pub mod code_generator;
pub mod url_normalizer;
