// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use gate_types::error::{CoreError, CryptoError, ErrorCode, FeeError, KeyError, VerifyFailure};
pub use gate_types::Result;
