//! Beacon API endpoints and response envelopes.
use std::time::Duration;

use blockprobe_types::{
    alias::{ForkVersion, Root},
    serde_utils::quoted_u64,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::{ParseError, Url};

/// A response from the Beacon API.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Response<T> {
    pub data: T,
}

/// A response whose `data` shape depends on the fork in `version`.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct VersionedResponse {
    pub(crate) version: String,
    #[serde(default)]
    pub(crate) execution_optimistic: Option<bool>,
    #[serde(default)]
    pub(crate) finalized: Option<bool>,
    pub(crate) data: Value,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeVersion {
    pub version: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Genesis {
    #[serde(with = "quoted_u64")]
    pub genesis_time: u64,
    pub genesis_validators_root: Root,
    pub genesis_fork_version: ForkVersion,
}

/// Base url of a node given as host:port, with or without an http(s):// scheme.
///
/// Plain host:port is served over http.
pub fn base_url(addr: &str) -> Result<Url, ParseError> {
    let addr = addr.trim_end_matches('/');
    if addr.starts_with("http://") || addr.starts_with("https://") {
        Url::parse(&format!("{addr}/"))
    } else {
        Url::parse(&format!("http://{addr}/"))
    }
}

/// Builds the HTTP client used for all Beacon API requests.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Url for `/eth/v1/beacon/blocks/{block_id}`, the unversioned block endpoint.
///
/// The block id may be a slot, a 0x-prefixed root or one of "head", "genesis",
/// "finalized".
pub fn get_block(base: &Url, block_id: &str) -> Result<Url, ParseError> {
    base.join(&format!("eth/v1/beacon/blocks/{block_id}"))
}

/// Url for `/eth/v2/beacon/blocks/{block_id}`, which reports the fork version.
pub fn get_versioned_block(base: &Url, block_id: &str) -> Result<Url, ParseError> {
    base.join(&format!("eth/v2/beacon/blocks/{block_id}"))
}

/// Url for `/eth/v1/node/version`.
pub fn get_node_version(base: &Url) -> Result<Url, ParseError> {
    base.join("eth/v1/node/version")
}

/// Url for `/eth/v1/beacon/genesis`.
pub fn get_genesis(base: &Url) -> Result<Url, ParseError> {
    base.join("eth/v1/beacon/genesis")
}
