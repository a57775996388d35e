//! Typed client path: versioned block from a started beacon node.
use blockprobe_client::{BeaconNode, NodeConfig};
use tokio_util::sync::CancellationToken;

use crate::{
    config::ProbeConfig,
    error::ProbeError,
    logger::ProbeLog,
    size::{report_sizes, SizeMeasurement},
};

pub const NODE_NAME: &str = "beacon node";

/// Starts a beacon node client, fetches the block and reports the sizes of its message.
pub async fn measure_typed<L: ProbeLog + ?Sized>(
    config: &ProbeConfig,
    block_id: &str,
    log: &L,
    cancel: &CancellationToken,
) -> Result<SizeMeasurement, ProbeError> {
    let mut node = BeaconNode::new(NodeConfig {
        addr: config.host_port(),
        name: NODE_NAME.to_string(),
        timeout: config.timeout,
    })
    .map_err(ProbeError::ClientStart)?;
    let version = node
        .start(cancel)
        .await
        .map_err(ProbeError::ClientStart)?
        .version
        .clone();
    log.debug(&format!("Connected to {} ({version})", node.name()));

    let block = node
        .fetch_block(cancel, block_id)
        .await
        .map_err(ProbeError::ClientFetch)?;
    log.debug(&format!("Fetched {} block", block.version()));

    let message = block.message()?;
    let json = serde_json::to_vec(&message).map_err(ProbeError::Encode)?;
    Ok(report_sizes(log, &json)?)
}
