use std::time::Duration;

use blockprobe_client::rpc::base_url;
use url::{ParseError, Url};

pub const DEFAULT_ADDR: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5052;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the beacon node is and how long a single request may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    pub addr: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProbeConfig {
    /// host:port, as given to the typed client. The address may carry an http(s):// scheme.
    pub fn host_port(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    /// Base url for raw requests, e.g., `http://localhost:5052/`.
    ///
    /// Resolved the same way the typed client resolves `host_port`.
    pub fn base_url(&self) -> Result<Url, ParseError> {
        base_url(&self.host_port())
    }
}
