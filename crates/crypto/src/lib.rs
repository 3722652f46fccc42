// Path: crates/crypto/src/lib.rs
//! # Admission Gate Crypto Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # Admission Gate Cryptography
//!
//! Signature verification for the key algorithms a payer may hold: Ed25519
//! and ECDSA over secp256k1 (signing the Keccak-256 digest of the message).

pub mod algorithms;
pub mod error;
pub mod sign;

pub use sign::verify_signature;
