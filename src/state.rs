//! Shared application state injected into every handler.

use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::Arc;

use crate::application::services::ShortUrlService;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<ShortUrlService>,
    /// Client networks refused with 403.
    pub blocklist: Arc<Vec<IpNetwork>>,
    /// Resolve client addresses from forwarding headers.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(url_service: Arc<ShortUrlService>) -> Self {
        Self {
            url_service,
            blocklist: Arc::new(Vec::new()),
            behind_proxy: false,
        }
    }

    pub fn with_blocklist(mut self, blocklist: Vec<IpNetwork>) -> Self {
        self.blocklist = Arc::new(blocklist);
        self
    }

    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }

    /// Returns whether `ip` falls into any blocked network.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        self.blocklist.iter().any(|network| network.contains(ip))
    }
}
