//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod status;
pub mod url;

pub use health::{ping_handler, version_handler};
pub use redirect::redirect_handler;
pub use status::status_handler;
pub use url::{bulk_shorten_handler, create_short_url_handler};
