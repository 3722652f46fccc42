// Path: crates/tx/src/lib.rs
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

//! # Admission Gate Transactions
//!
//! The synchronous precheck run before a transaction enters ordering, plus the
//! stock collaborators it is usually assembled with: a key-activation
//! signature verifier and a superuser fee exemption policy.

pub mod precheck;
pub mod system;

pub use precheck::AdmissionPipeline;
pub use system::exemptions::SuperuserExemptions;
pub use system::validation::KeyActivationVerifier;
