// Path: crates/crypto/src/sign/mod.rs
//! Signature schemes and algorithm dispatch.

use crate::error::CryptoError;
use gate_types::app::SignatureValue;

pub mod ecdsa;
pub mod eddsa;

/// A key type that can be encoded to and decoded from raw bytes.
pub trait SerializableKey: Sized {
    /// The key's canonical byte encoding.
    fn to_bytes(&self) -> Vec<u8>;
    /// Parses a key from its canonical byte encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;
}

/// A public key that can check signatures.
pub trait VerifyingKey {
    /// Verifies `signature` (raw bytes) over `message`.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError>;
}

/// Verifies a tagged signature over `message` against raw public key bytes.
///
/// Ed25519 keys are 32 bytes. Secp256k1 keys are SEC1-encoded (33 bytes
/// compressed) and sign the Keccak-256 digest of `message`.
pub fn verify_signature(
    signature: &SignatureValue,
    public_key: &[u8],
    message: &[u8],
) -> Result<(), CryptoError> {
    match signature {
        SignatureValue::Ed25519(sig) => {
            eddsa::Ed25519PublicKey::from_bytes(public_key)?.verify(message, sig)
        }
        SignatureValue::EcdsaSecp256k1(sig) => {
            ecdsa::Secp256k1PublicKey::from_bytes(public_key)?.verify(message, sig)
        }
    }
}
