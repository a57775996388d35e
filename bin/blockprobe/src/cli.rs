//! For Command Line Interface for blockprobe

use std::time::Duration;

use blockprobe_measure::{
    config::{DEFAULT_ADDR, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS},
    ProbeConfig,
};
use clap::Parser;

/// Fetch a beacon block twice (raw HTTP and typed client) and log the byte length
/// of its JSON message, uncompressed and snappy compressed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Block to measure: a slot number, a 0x-prefixed block root, or one of
    /// head, genesis, finalized.
    pub slot: String,
    /// Beacon node host
    #[clap(long, env = "BEACON_ADDR", default_value_t = String::from(DEFAULT_ADDR))]
    pub addr: String,
    /// Beacon node HTTP port
    #[clap(long, env = "BEACON_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Timeout for each request, in seconds
    #[clap(long, env = "BEACON_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl AppArgs {
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            addr: self.addr.clone(),
            port: self.port,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slot_is_required() {
        assert!(AppArgs::try_parse_from(["blockprobe"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args =
            AppArgs::try_parse_from(["blockprobe", "head", "--addr", "10.0.0.2", "--port", "3500"])
                .unwrap();
        assert_eq!(args.slot, "head");
        let config = args.probe_config();
        assert_eq!(config.host_port(), "10.0.0.2:3500");
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(AppArgs::try_parse_from(["blockprobe", "100", "--port", "not-a-port"]).is_err());
    }
}
