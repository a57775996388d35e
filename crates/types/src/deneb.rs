//! Blob carrying blocks (EIP-4844). Blobs themselves travel in sidecars, the
//! block only commits to them.

use ethers::types::{Bloom, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::{
    alias::{BlsSignature, ExecutionAddress, Hash32, KzgCommitment, Root},
    altair::SyncAggregate,
    block,
    capella::{SignedBlsToExecutionChange, Withdrawal},
    phase0::{Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
    serde_utils::{quoted_u256, quoted_u64},
};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExecutionPayload {
    pub parent_hash: Hash32,
    pub fee_recipient: ExecutionAddress,
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: Bloom,
    pub prev_randao: Root,
    #[serde(with = "quoted_u64")]
    pub block_number: u64,
    #[serde(with = "quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "quoted_u64")]
    pub timestamp: u64,
    pub extra_data: Bytes,
    #[serde(with = "quoted_u256")]
    pub base_fee_per_gas: U256,
    pub block_hash: Hash32,
    pub transactions: Vec<Bytes>,
    pub withdrawals: Vec<Withdrawal>,
    #[serde(with = "quoted_u64")]
    pub blob_gas_used: u64,
    #[serde(with = "quoted_u64")]
    pub excess_blob_gas: u64,
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
    pub execution_payload: ExecutionPayload,
    pub bls_to_execution_changes: Vec<SignedBlsToExecutionChange>,
    pub blob_kzg_commitments: Vec<KzgCommitment>,
}

pub type BeaconBlock = block::BeaconBlock<BeaconBlockBody>;
pub type SignedBeaconBlock = block::SignedBeaconBlock<BeaconBlockBody>;
