// Path: crates/test_utils/src/lib.rs
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

//! # Admission Gate Test Utilities
//!
//! Utilities for testing the admission gate components.

pub mod assertions;
pub mod fixtures;
pub mod keys;
pub mod randomness;
