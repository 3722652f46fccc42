// Path: crates/api/src/lib.rs

//! # Admission Gate API Crate Lints
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
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
#![deny(missing_docs)]
//! # Admission Gate API
//!
//! The collaborator contracts the admission precheck is written against. Each
//! trait is implemented for references, boxes and `Arc`s so callers can share
//! one ledger view or verifier across pipelines.

/// Re-exports all core error types from the central `gate-types` crate.
pub mod error;
/// Fee exemption and fee estimation contracts.
pub mod fees;
/// The read-only account ledger view.
pub mod ledger;
/// The signature verification contract.
pub mod signature;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::error::{ErrorCode, FeeError, KeyError, VerifyFailure};
    pub use crate::fees::{FeeEstimator, FeeExemptionPolicy};
    pub use crate::ledger::AccountLedgerView;
    pub use crate::signature::SignatureVerifier;
}
