//! Fork-versioned blocks and selection of the fork specific message.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{altair, bellatrix, capella, deneb, phase0};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("Unsupported block version: {0}")]
    UnsupportedVersionKind(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown data version {0}")]
pub struct UnknownVersion(pub String);

/// Fork names as they appear in the `version` field of Beacon API responses.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataVersion {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}

impl DataVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataVersion::Phase0 => "phase0",
            DataVersion::Altair => "altair",
            DataVersion::Bellatrix => "bellatrix",
            DataVersion::Capella => "capella",
            DataVersion::Deneb => "deneb",
        }
    }
}

impl Display for DataVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataVersion {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phase0" => Ok(DataVersion::Phase0),
            "altair" => Ok(DataVersion::Altair),
            "bellatrix" => Ok(DataVersion::Bellatrix),
            "capella" => Ok(DataVersion::Capella),
            "deneb" => Ok(DataVersion::Deneb),
            _ => Err(UnknownVersion(s.to_owned())),
        }
    }
}

/// A signed block of any fork.
///
/// Blocks from forks without containers in this crate (e.g., a fork newer than
/// deneb) are kept as `Unknown` with only their version tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionedSignedBeaconBlock {
    Phase0(phase0::SignedBeaconBlock),
    Altair(altair::SignedBeaconBlock),
    Bellatrix(bellatrix::SignedBeaconBlock),
    Capella(capella::SignedBeaconBlock),
    Deneb(deneb::SignedBeaconBlock),
    Unknown(String),
}

impl VersionedSignedBeaconBlock {
    /// Decodes the `data` of a versioned response using its `version` tag.
    pub fn from_json(version: &str, data: Value) -> Result<Self, serde_json::Error> {
        let block = match version.parse::<DataVersion>() {
            Ok(DataVersion::Phase0) => Self::Phase0(serde_json::from_value(data)?),
            Ok(DataVersion::Altair) => Self::Altair(serde_json::from_value(data)?),
            Ok(DataVersion::Bellatrix) => Self::Bellatrix(serde_json::from_value(data)?),
            Ok(DataVersion::Capella) => Self::Capella(serde_json::from_value(data)?),
            Ok(DataVersion::Deneb) => Self::Deneb(serde_json::from_value(data)?),
            Err(UnknownVersion(version)) => Self::Unknown(version),
        };
        Ok(block)
    }

    /// Version tag of the block.
    pub fn version(&self) -> &str {
        match self {
            Self::Phase0(_) => DataVersion::Phase0.as_str(),
            Self::Altair(_) => DataVersion::Altair.as_str(),
            Self::Bellatrix(_) => DataVersion::Bellatrix.as_str(),
            Self::Capella(_) => DataVersion::Capella.as_str(),
            Self::Deneb(_) => DataVersion::Deneb.as_str(),
            Self::Unknown(version) => version,
        }
    }

    /// Selects the `message` of the block.
    ///
    /// Only altair, bellatrix, capella and deneb are measured. Anything else,
    /// phase0 included, is an error carrying the version tag.
    pub fn message(&self) -> Result<BlockMessage<'_>, MessageError> {
        match self {
            Self::Altair(block) => Ok(BlockMessage::Altair(&block.message)),
            Self::Bellatrix(block) => Ok(BlockMessage::Bellatrix(&block.message)),
            Self::Capella(block) => Ok(BlockMessage::Capella(&block.message)),
            Self::Deneb(block) => Ok(BlockMessage::Deneb(&block.message)),
            Self::Phase0(_) | Self::Unknown(_) => Err(MessageError::UnsupportedVersionKind(
                self.version().to_owned(),
            )),
        }
    }
}

/// Borrowed fork specific block message. Serializes exactly as the inner block.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlockMessage<'a> {
    Altair(&'a altair::BeaconBlock),
    Bellatrix(&'a bellatrix::BeaconBlock),
    Capella(&'a capella::BeaconBlock),
    Deneb(&'a deneb::BeaconBlock),
}
