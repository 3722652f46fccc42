// Path: crates/api/src/fees/mod.rs

//! Defines the fee collaborator traits.

use crate::ledger::AccountLedgerView;
use auto_impl::auto_impl;
use gate_types::app::{FeeQuote, Key, Timestamp, TransactionFacts};
use gate_types::error::FeeError;

/// Decides which payers skip the fee and solvency stages entirely.
#[auto_impl(&, Box, Arc)]
pub trait FeeExemptionPolicy {
    /// Returns true if the transaction's payer owes no fee.
    fn is_exempt(&self, facts: &TransactionFacts) -> bool;
}

/// Prices a transaction.
#[auto_impl(&, Box, Arc)]
pub trait FeeEstimator {
    /// Estimates the node, network and service fees for `facts`, signed by
    /// `payer_key`, as of `at`.
    fn estimate(
        &self,
        facts: &TransactionFacts,
        payer_key: &Key,
        ledger: &dyn AccountLedgerView,
        at: Timestamp,
    ) -> Result<FeeQuote, FeeError>;
}
