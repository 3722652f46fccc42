// Path: crates/types/src/app/transaction.rs

//! Per-transaction facts consumed by the admission precheck, together with the
//! point-in-time account snapshot and the fee quote it is judged against.

use super::identity::{AccountId, Timestamp};
use super::key::Key;
use crate::codec::{from_bytes_canonical, to_bytes_canonical};
use crate::error::CoreError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The raw signature bytes of one signature pair, tagged by algorithm.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
#[serde(rename_all = "snake_case")]
pub enum SignatureValue {
    /// A 64-byte Ed25519 signature.
    Ed25519(Vec<u8>),
    /// A 64-byte `r || s` ECDSA secp256k1 signature over the Keccak-256 digest.
    EcdsaSecp256k1(Vec<u8>),
}

impl SignatureValue {
    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(bytes) | Self::EcdsaSecp256k1(bytes) => bytes,
        }
    }

    /// True if this signature was produced by the algorithm of `key`.
    pub fn matches_kind(&self, key: &Key) -> bool {
        matches!(
            (self, key),
            (Self::Ed25519(_), Key::Ed25519(_)) | (Self::EcdsaSecp256k1(_), Key::EcdsaSecp256k1(_))
        )
    }
}

/// A signature together with a prefix of the public key that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct SignaturePair {
    /// A prefix of the signing public key. May be empty if only one key signs.
    pub pub_key_prefix: Vec<u8>,
    /// The signature itself.
    pub signature: SignatureValue,
}

impl SignaturePair {
    /// True if this pair's prefix is a prefix of `key_bytes`.
    pub fn prefix_matches(&self, key_bytes: &[u8]) -> bool {
        key_bytes.starts_with(&self.pub_key_prefix)
    }
}

/// The signatures attached to a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Default)]
pub struct SignatureMap {
    /// The signature pairs, in submitted order.
    pub pairs: Vec<SignaturePair>,
}

/// The facts the precheck needs from one transaction, extracted once from the
/// wire bytes and read-only thereafter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TransactionFacts {
    /// The account charged for the transaction's fee.
    pub payer_id: AccountId,
    /// The maximum fee the payer offered.
    pub stated_fee: u64,
    /// The start of the transaction's validity window.
    pub valid_start: Timestamp,
    /// The signed transaction body.
    pub body_bytes: Vec<u8>,
    /// The signatures over `body_bytes`.
    pub raw_signature_material: SignatureMap,
}

impl TransactionFacts {
    /// Decodes facts from their canonical encoding, rejecting trailing bytes.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        from_bytes_canonical(bytes).map_err(CoreError::Codec)
    }

    /// Encodes the facts canonically.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, CoreError> {
        to_bytes_canonical(self).map_err(CoreError::Codec)
    }
}

/// A point-in-time read of the payer account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AccountSnapshot {
    /// The account's key.
    pub key: Key,
    /// The account's balance in the smallest denomination.
    pub balance: u64,
    /// False for accounts that were deleted or never created.
    pub exists: bool,
}

/// The three-part fee the network charges for a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Default)]
pub struct FeeQuote {
    /// Paid to the node that submitted the transaction.
    pub node_fee: u64,
    /// Paid to the network for consensus.
    pub network_fee: u64,
    /// Paid for the service the transaction invokes.
    pub service_fee: u64,
}

impl FeeQuote {
    /// Creates a quote from its three components.
    pub const fn new(node_fee: u64, network_fee: u64, service_fee: u64) -> Self {
        Self {
            node_fee,
            network_fee,
            service_fee,
        }
    }

    /// The sum of all three components, saturating at `u64::MAX`.
    pub const fn total(&self) -> u64 {
        self.node_fee
            .saturating_add(self.network_fee)
            .saturating_add(self.service_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> TransactionFacts {
        TransactionFacts {
            payer_id: AccountId::new(0, 0, 1234),
            stated_fee: 666,
            valid_start: Timestamp::from_secs(1_234_567),
            body_bytes: b"body".to_vec(),
            raw_signature_material: SignatureMap {
                pairs: vec![SignaturePair {
                    pub_key_prefix: vec![0xAB],
                    signature: SignatureValue::Ed25519(vec![0u8; 64]),
                }],
            },
        }
    }

    #[test]
    fn test_fee_total_saturates() {
        assert_eq!(FeeQuote::new(111, 222, 333).total(), 666);
        assert_eq!(FeeQuote::new(u64::MAX, 1, 1).total(), u64::MAX);
    }

    #[test]
    fn test_facts_canonical_decode_rejects_trailing_bytes() {
        let mut bytes = facts().to_canonical_bytes().unwrap();
        assert_eq!(TransactionFacts::from_canonical_bytes(&bytes).unwrap(), facts());
        bytes.push(0);
        assert!(matches!(
            TransactionFacts::from_canonical_bytes(&bytes),
            Err(CoreError::Codec(_))
        ));
    }

    #[test]
    fn test_prefix_and_kind_matching() {
        let pair = &facts().raw_signature_material.pairs[0];
        assert!(pair.prefix_matches(&[0xAB, 0xCD]));
        assert!(!pair.prefix_matches(&[0xAC]));
        assert!(pair.signature.matches_kind(&Key::ed25519(vec![0xAB])));
        assert!(!pair.signature.matches_kind(&Key::secp256k1(vec![0xAB])));
    }
}
