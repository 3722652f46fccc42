// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Admission Gate Types
//!
//! This crate is the foundational library for the admission gate, containing the
//! key model and its deterministic ordering, the transaction facts consumed by
//! precheck, the precheck outcome, error types, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `gate-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for shared
//! types like `Key`, `AccountId`, `TransactionFacts` and `PrecheckResult`.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::CoreError> = std::result::Result<T, E>;

/// Core application-level data structures: keys, accounts, transactions and outcomes.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical data.
pub mod codec;
/// Configuration structures for the admission gate.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
