pub mod node;
pub mod rpc;

pub use node::{BeaconNode, BeaconNodeError, NodeConfig, NodeInfo};
