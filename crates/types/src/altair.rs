use serde::{Deserialize, Serialize};

use crate::{
    alias::{Bits, BlsSignature, Root},
    block,
    phase0::{Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SyncAggregate {
    pub sync_committee_bits: Bits,
    pub sync_committee_signature: BlsSignature,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BeaconBlockBody {
    pub randao_reveal: BlsSignature,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
    pub sync_aggregate: SyncAggregate,
}

pub type BeaconBlock = block::BeaconBlock<BeaconBlockBody>;
pub type SignedBeaconBlock = block::SignedBeaconBlock<BeaconBlockBody>;
