//! DTOs for service health and version endpoints.

use serde::Serialize;

pub const API_VERSION: &str = "v1";

/// Database connectivity report of `GET /ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub connection_db: bool,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
