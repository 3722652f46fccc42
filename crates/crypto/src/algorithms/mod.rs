// Path: crates/crypto/src/algorithms/mod.rs
//! Hash algorithms used by the signature schemes.

pub mod hash;
