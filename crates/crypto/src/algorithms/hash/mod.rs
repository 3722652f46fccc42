// Path: crates/crypto/src/algorithms/hash/mod.rs
//! Cryptographic hash functions using sha3

use sha3::{Digest, Keccak256};

/// Create a Keccak-256 hash of any type that can be referenced as bytes
pub fn keccak256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}
