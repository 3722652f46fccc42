// Path: crates/types/src/app/key/mod.rs

//! The recursive `Key` model.
//!
//! A `Key` is either a simple public key, a reference to a contract, or a
//! composite (`KeyList`, `ThresholdKey`) of further keys. The variant set
//! mirrors the wire schema one-to-one so each variant keeps its protocol ordinal.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

mod ordering;

pub use ordering::{compare_keys, KeyComparator, DEFAULT_MAX_KEY_DEPTH};

/// Identifies a contract, either by number or by EVM address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Default)]
pub struct ContractId {
    /// The shard the contract lives in.
    pub shard: i64,
    /// The realm within the shard.
    pub realm: i64,
    /// The contract number, if the contract is addressed by number.
    pub contract_num: Option<i64>,
    /// The 20-byte EVM address, if the contract is addressed by alias.
    pub evm_address: Option<Vec<u8>>,
}

impl ContractId {
    /// A contract addressed by its number.
    pub const fn numbered(shard: i64, realm: i64, contract_num: i64) -> Self {
        Self {
            shard,
            realm,
            contract_num: Some(contract_num),
            evm_address: None,
        }
    }
}

/// An ordered list of keys, all of which are required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Default)]
pub struct KeyList {
    /// The child keys, in the order they were submitted.
    pub keys: Vec<Key>,
}

impl KeyList {
    /// Wraps the given keys, preserving their order.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Returns the number of child keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// An M-of-N key: at least `threshold` of `keys` must sign.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Default)]
pub struct ThresholdKey {
    /// The minimum number of child keys that must sign.
    pub threshold: u32,
    /// The child keys.
    pub keys: KeyList,
}

/// A cryptographic key structure as carried on the wire.
///
/// The derived `PartialEq`, `Eq` and `Hash` are structural and only suit
/// in-memory bookkeeping. Protocol equality is `compare_keys` (or
/// [`KeyComparator::compare`]) returning `Ordering::Equal`, which is coarser:
/// a `ContractId` without a number equals one numbered zero. Use the
/// comparator whenever a decision depends on two keys being the same.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Default)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// No key material was set.
    #[default]
    Unset,
    /// A key that is satisfied by the referenced contract's execution.
    ContractId(ContractId),
    /// A raw 32-byte Ed25519 public key.
    Ed25519(Vec<u8>),
    /// An RSA-3072 public key. Accepted on the wire but not supported.
    Rsa3072(Vec<u8>),
    /// An ECDSA P-384 public key. Accepted on the wire but not supported.
    Ecdsa384(Vec<u8>),
    /// An M-of-N threshold key.
    Threshold(ThresholdKey),
    /// A list of keys, all required.
    KeyList(KeyList),
    /// A compressed 33-byte ECDSA secp256k1 public key.
    EcdsaSecp256k1(Vec<u8>),
    /// A contract key that may also be satisfied by delegate calls.
    DelegatableContractId(ContractId),
}

/// The variant tag of a `Key`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `Key::Unset`.
    Unset,
    /// `Key::ContractId`.
    ContractId,
    /// `Key::Ed25519`.
    Ed25519,
    /// `Key::Rsa3072`.
    Rsa3072,
    /// `Key::Ecdsa384`.
    Ecdsa384,
    /// `Key::Threshold`.
    Threshold,
    /// `Key::KeyList`.
    KeyList,
    /// `Key::EcdsaSecp256k1`.
    EcdsaSecp256k1,
    /// `Key::DelegatableContractId`.
    DelegatableContractId,
}

impl KeyKind {
    /// The field number of this variant in the wire schema's `oneof`.
    /// Used only to order keys of different kinds.
    pub const fn proto_ordinal(self) -> u32 {
        match self {
            Self::Unset => 0,
            Self::ContractId => 1,
            Self::Ed25519 => 2,
            Self::Rsa3072 => 3,
            Self::Ecdsa384 => 4,
            Self::Threshold => 5,
            Self::KeyList => 6,
            Self::EcdsaSecp256k1 => 7,
            Self::DelegatableContractId => 8,
        }
    }

    /// Returns the stable upper-snake name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "UNSET",
            Self::ContractId => "CONTRACT_ID",
            Self::Ed25519 => "ED25519",
            Self::Rsa3072 => "RSA_3072",
            Self::Ecdsa384 => "ECDSA_384",
            Self::Threshold => "THRESHOLD_KEY",
            Self::KeyList => "KEY_LIST",
            Self::EcdsaSecp256k1 => "ECDSA_SECP256K1",
            Self::DelegatableContractId => "DELEGATABLE_CONTRACT_ID",
        }
    }
}

impl core::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Key {
    /// Creates an Ed25519 key from raw public key bytes.
    pub fn ed25519(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Ed25519(bytes.into())
    }

    /// Creates a secp256k1 key from compressed public key bytes.
    pub fn secp256k1(bytes: impl Into<Vec<u8>>) -> Self {
        Self::EcdsaSecp256k1(bytes.into())
    }

    /// Creates a key list from the given children.
    pub fn key_list(keys: Vec<Key>) -> Self {
        Self::KeyList(KeyList::new(keys))
    }

    /// Creates an M-of-N threshold key from the given children.
    pub fn threshold(threshold: u32, keys: Vec<Key>) -> Self {
        Self::Threshold(ThresholdKey {
            threshold,
            keys: KeyList::new(keys),
        })
    }

    /// Returns the variant tag of this key.
    pub const fn kind(&self) -> KeyKind {
        match self {
            Self::Unset => KeyKind::Unset,
            Self::ContractId(_) => KeyKind::ContractId,
            Self::Ed25519(_) => KeyKind::Ed25519,
            Self::Rsa3072(_) => KeyKind::Rsa3072,
            Self::Ecdsa384(_) => KeyKind::Ecdsa384,
            Self::Threshold(_) => KeyKind::Threshold,
            Self::KeyList(_) => KeyKind::KeyList,
            Self::EcdsaSecp256k1(_) => KeyKind::EcdsaSecp256k1,
            Self::DelegatableContractId(_) => KeyKind::DelegatableContractId,
        }
    }

    /// Returns the raw public key bytes if this is a supported simple key.
    pub fn simple_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Ed25519(bytes) | Self::EcdsaSecp256k1(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the children of a composite key.
    pub fn children(&self) -> Option<&[Key]> {
        match self {
            Self::KeyList(list) => Some(&list.keys),
            Self::Threshold(threshold) => Some(&threshold.keys.keys),
            _ => None,
        }
    }
}
