// Path: crates/crypto/src/error.rs
//! Local error types for the `gate-crypto` crate.

// Re-export the canonical error type from the types crate.
pub use gate_types::error::CryptoError;
