//! Beacon chain aliases over ethers fixed-hash and byte types.
//!
//! The Beacon API encodes all of these as 0x-prefixed lowercase hex strings,
//! which is what the ethers serde impls produce.

use ethers::types::{Bytes, H160, H256};

/// SSZ hash tree root of a container.
pub type Root = H256;
/// Execution layer block hash.
pub type Hash32 = H256;
/// 20 byte execution address.
pub type ExecutionAddress = H160;
/// 96 byte BLS signature.
pub type BlsSignature = Bytes;
/// 48 byte BLS public key.
pub type BlsPubkey = Bytes;
/// 48 byte KZG commitment.
pub type KzgCommitment = Bytes;
/// SSZ bitlist or bitvector, hex encoded.
pub type Bits = Bytes;
/// 4 byte fork version.
pub type ForkVersion = Bytes;

pub type Slot = u64;
pub type Epoch = u64;
pub type ValidatorIndex = u64;
pub type CommitteeIndex = u64;
pub type Gwei = u64;
pub type WithdrawalIndex = u64;
