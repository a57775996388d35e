//! A typed client for a single beacon node.
//!
//! The node must be started before use. Starting discovers what the node is
//! (client version, genesis) and fails early when it is unreachable.
use std::time::Duration;

use blockprobe_types::VersionedSignedBeaconBlock;
use log::debug;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use url::{ParseError, Url};

use crate::rpc::{
    base_url, get_genesis, get_node_version, get_versioned_block, http_client, Genesis, NodeVersion,
    Response, VersionedResponse,
};

#[derive(Debug, Error)]
pub enum BeaconNodeError {
    #[error("Reqwest error {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Url error {0}")]
    UrlError(#[from] ParseError),
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Beacon node \"{0}\" has not been started")]
    NotStarted(String),
    #[error("Request to beacon node \"{0}\" was cancelled")]
    Cancelled(String),
}

#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// host:port, with or without an http(s):// scheme.
    pub addr: String,
    /// Label used in logs and errors.
    pub name: String,
    pub timeout: Duration,
}

/// What the node reported about itself on start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub version: String,
    pub genesis: Genesis,
}

pub struct BeaconNode {
    config: NodeConfig,
    base: Url,
    client: Client,
    info: Option<NodeInfo>,
}

impl BeaconNode {
    pub fn new(config: NodeConfig) -> Result<Self, BeaconNodeError> {
        let base = base_url(&config.addr)?;
        let client = http_client(config.timeout)?;
        Ok(BeaconNode {
            config,
            base,
            client,
            info: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Node details, present once started.
    pub fn info(&self) -> Option<&NodeInfo> {
        self.info.as_ref()
    }

    /// Connects to the node and records its version and genesis.
    pub async fn start(&mut self, cancel: &CancellationToken) -> Result<&NodeInfo, BeaconNodeError> {
        let version: Response<NodeVersion> = self.get(cancel, get_node_version(&self.base)?).await?;
        let genesis: Response<Genesis> = self.get(cancel, get_genesis(&self.base)?).await?;
        debug!(
            "Started beacon node \"{}\" at {} ({}, genesis time {})",
            self.config.name, self.base, version.data.version, genesis.data.genesis_time
        );
        Ok(&*self.info.insert(NodeInfo {
            version: version.data.version,
            genesis: genesis.data,
        }))
    }

    /// Fetches a signed block by block id (slot, root, "head", ...).
    pub async fn fetch_block(
        &self,
        cancel: &CancellationToken,
        block_id: &str,
    ) -> Result<VersionedSignedBeaconBlock, BeaconNodeError> {
        if self.info.is_none() {
            return Err(BeaconNodeError::NotStarted(self.config.name.clone()));
        }
        let url = get_versioned_block(&self.base, block_id)?;
        let response: VersionedResponse = self.get(cancel, url).await?;
        debug!(
            "Fetched {} block {} (optimistic: {:?}, finalized: {:?})",
            response.version, block_id, response.execution_optimistic, response.finalized
        );
        Ok(VersionedSignedBeaconBlock::from_json(
            &response.version,
            response.data,
        )?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        url: Url,
    ) -> Result<T, BeaconNodeError> {
        let request = async {
            let response = self
                .client
                .get(url)
                .header(ACCEPT, "application/json")
                .send()
                .await?
                .error_for_status()?;
            Ok::<T, BeaconNodeError>(response.json::<T>().await?)
        };
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(BeaconNodeError::Cancelled(self.config.name.clone())),
            result = request => result,
        }
    }
}
