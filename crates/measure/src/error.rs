use blockprobe_client::BeaconNodeError;
use blockprobe_types::MessageError;
use thiserror::Error;
use url::ParseError;

use crate::utils::UtilsError;

/// A failure of one measurement procedure. Never fatal to the program.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to get block data: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to unmarshal block data: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to get {field} from block data")]
    MissingField { field: &'static str },
    #[error("Unsupported block version: {0}")]
    UnsupportedVersionKind(String),
    #[error("Failed to start beacon node: {0}")]
    ClientStart(#[source] BeaconNodeError),
    #[error("Failed to fetch block: {0}")]
    ClientFetch(#[source] BeaconNodeError),
    #[error("Failed to marshal message data: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to measure block data: {0}")]
    SizeMeasurement(#[from] UtilsError),
    #[error("Invalid beacon node url: {0}")]
    Url(#[from] ParseError),
    #[error("Request cancelled")]
    Cancelled,
}

impl From<MessageError> for ProbeError {
    fn from(error: MessageError) -> Self {
        match error {
            MessageError::UnsupportedVersionKind(version) => {
                ProbeError::UnsupportedVersionKind(version)
            }
        }
    }
}
