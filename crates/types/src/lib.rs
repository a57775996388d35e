//! Beacon API JSON containers for signed beacon blocks from phase0 to deneb.
pub mod alias;
pub mod altair;
pub mod bellatrix;
pub mod block;
pub mod capella;
pub mod deneb;
pub mod phase0;
pub mod serde_utils;
pub mod version;

pub use version::{BlockMessage, DataVersion, MessageError, VersionedSignedBeaconBlock};
