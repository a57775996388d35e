//! Block containers shared by every fork. Forks differ only in their body.

use serde::{Deserialize, Serialize};

use crate::{
    alias::{BlsSignature, Root, Slot, ValidatorIndex},
    serde_utils::quoted_u64,
};

/// The `message` of a signed block.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BeaconBlock<B> {
    #[serde(with = "quoted_u64")]
    pub slot: Slot,
    #[serde(with = "quoted_u64")]
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body: B,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignedBeaconBlock<B> {
    pub message: BeaconBlock<B>,
    pub signature: BlsSignature,
}
