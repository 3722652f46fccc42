// Path: crates/crypto/src/sign/ecdsa/mod.rs
//! Implementation of ECDSA over secp256k1 using k256
//!
//! Messages are never signed directly: both sides sign and verify the
//! Keccak-256 digest of the message.

use super::{SerializableKey, VerifyingKey};
use crate::algorithms::hash::keccak256;
use crate::error::CryptoError;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::Signature;

/// Secp256k1 key pair implementation
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    signing_key: k256::ecdsa::SigningKey,
}

/// Secp256k1 public key implementation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey(k256::ecdsa::VerifyingKey);

impl Secp256k1KeyPair {
    /// Create a key pair from a 32-byte secret scalar
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = k256::ecdsa::SigningKey::from_slice(seed)
            .map_err(|e| CryptoError::InvalidKey(format!("Invalid secret scalar: {}", e)))?;
        Ok(Self { signing_key })
    }

    /// The public half of the pair
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(*self.signing_key.verifying_key())
    }

    /// Sign the Keccak-256 digest of a message, returning the 64-byte `r || s`
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = keccak256(message);
        let signature: Signature = self
            .signing_key
            .sign_prehash(&digest)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }
}

impl VerifyingKey for Secp256k1PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let signature = Signature::from_slice(signature)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let digest = keccak256(message);
        self.0.verify_prehash(&digest, &signature).map_err(|e| {
            log::debug!(target: "crypto", "secp256k1 verification failed: {}", e);
            CryptoError::VerificationFailed
        })
    }
}

impl SerializableKey for Secp256k1PublicKey {
    /// The 33-byte compressed SEC1 encoding.
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
            .map(Secp256k1PublicKey)
            .map_err(|e| CryptoError::InvalidKey(format!("Failed to parse public key: {}", e)))
    }
}

#[cfg(test)]
mod tests;
