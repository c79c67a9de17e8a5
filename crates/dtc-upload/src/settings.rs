//! Upload settings.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the in-cockpit receiver listens by default.
pub const DEFAULT_ENDPOINT: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 43001));

pub const DEFAULT_SEND_TIMEOUT_MS: u64 = 5000;

/// Transport endpoint and send bound.
///
/// Missing fields take their defaults, so `{}` is a valid settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadSettings {
    pub endpoint: SocketAddr,
    pub send_timeout_ms: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT,
            send_timeout_ms: DEFAULT_SEND_TIMEOUT_MS,
        }
    }
}

impl UploadSettings {
    pub fn with_endpoint(mut self, endpoint: SocketAddr) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_send_timeout_ms(mut self, send_timeout_ms: u64) -> Self {
        self.send_timeout_ms = send_timeout_ms;
        self
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}
