//! Withdrawals and BLS to execution credential changes.

use ethers::types::{Bloom, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::{
    alias::{
        BlsPubkey, BlsSignature, ExecutionAddress, Gwei, Hash32, Root, ValidatorIndex,
        WithdrawalIndex,
    },
    altair::SyncAggregate,
    block,
    phase0::{Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
    serde_utils::{quoted_u256, quoted_u64},
};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Withdrawal {
    #[serde(with = "quoted_u64")]
    pub index: WithdrawalIndex,
    #[serde(with = "quoted_u64")]
    pub validator_index: ValidatorIndex,
    pub address: ExecutionAddress,
    #[serde(with = "quoted_u64")]
    pub amount: Gwei,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BlsToExecutionChange {
    #[serde(with = "quoted_u64")]
    pub validator_index: ValidatorIndex,
    pub from_bls_pubkey: BlsPubkey,
    pub to_execution_address: ExecutionAddress,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignedBlsToExecutionChange {
    pub message: BlsToExecutionChange,
    pub signature: BlsSignature,
}

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
}

pub type BeaconBlock = block::BeaconBlock<BeaconBlockBody>;
pub type SignedBeaconBlock = block::SignedBeaconBlock<BeaconBlockBody>;
