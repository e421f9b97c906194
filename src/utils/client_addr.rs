//! Client address resolution from connection info and proxy headers.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use serde_json::json;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::error::AppError;
use crate::state::AppState;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Network address of the client that sent a request.
///
/// The port is known for direct connections and usually unknown when the
/// address comes from a proxy header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr {
    pub ip: IpAddr,
    pub port: Option<u16>,
}

impl ClientAddr {
    pub fn from_socket(addr: SocketAddr) -> Self {
        Self {
            ip: addr.ip(),
            port: Some(addr.port()),
        }
    }

    /// Reads the originating client from `X-Forwarded-For` (first hop) or
    /// `X-Real-IP`.
    ///
    /// Only meaningful behind a trusted reverse proxy: both headers are
    /// client-controlled otherwise.
    pub fn from_forwarded_headers(headers: &HeaderMap) -> Option<Self> {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next());

        let real_ip = headers.get(X_REAL_IP).and_then(|v| v.to_str().ok());

        forwarded
            .and_then(parse_addr)
            .or_else(|| real_ip.and_then(parse_addr))
    }

    /// Resolves the client address of a request.
    ///
    /// With `behind_proxy` set, forwarding headers win over the peer socket
    /// address. Returns `None` when neither source is available.
    pub async fn from_parts(parts: &mut Parts, behind_proxy: bool) -> Option<Self> {
        if behind_proxy && let Some(addr) = Self::from_forwarded_headers(&parts.headers) {
            return Some(addr);
        }

        ConnectInfo::<SocketAddr>::from_request_parts(parts, &())
            .await
            .ok()
            .map(|ConnectInfo(addr)| Self::from_socket(addr))
    }
}

/// Parses `ip` or `ip:port` (`[v6]:port`).
fn parse_addr(value: &str) -> Option<ClientAddr> {
    let value = value.trim();

    if let Ok(ip) = value.parse::<IpAddr>() {
        return Some(ClientAddr { ip, port: None });
    }

    value.parse::<SocketAddr>().ok().map(ClientAddr::from_socket)
}

impl fmt::Display for ClientAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}", SocketAddr::new(self.ip, port)),
            None => write!(f, "{}", self.ip),
        }
    }
}

impl FromRequestParts<AppState> for ClientAddr {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts, state.behind_proxy)
            .await
            .ok_or_else(|| AppError::bad_request("Unable to determine client address", json!({})))
    }
}
