// Path: crates/api/src/signature/mod.rs

//! Defines the `SignatureVerifier` trait.

use auto_impl::auto_impl;
use gate_types::app::{Key, TransactionFacts};
use gate_types::error::VerifyFailure;

/// Decides whether a transaction's signatures satisfy a key.
#[auto_impl(&, Box, Arc)]
pub trait SignatureVerifier {
    /// Returns `Ok(true)` if the signatures in `facts` activate `key`,
    /// `Ok(false)` if they do not, or a `VerifyFailure` describing why no
    /// answer could be reached.
    fn verify(&self, facts: &TransactionFacts, key: &Key) -> Result<bool, VerifyFailure>;
}
