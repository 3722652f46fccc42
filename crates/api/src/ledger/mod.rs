// Path: crates/api/src/ledger/mod.rs

//! Defines the `AccountLedgerView` trait for point-in-time account lookups.

use auto_impl::auto_impl;
use gate_types::app::{AccountId, AccountSnapshot, Timestamp, TransactionFacts};

/// A read-only view of account state as of the moment a transaction is assessed.
///
/// Implementations back onto whatever store the node keeps. The precheck never
/// writes through this view.
#[auto_impl(&, Box, Arc)]
pub trait AccountLedgerView {
    /// Returns the account's snapshot, or `None` if the account is unknown or deleted.
    fn snapshot(&self, id: &AccountId) -> Option<AccountSnapshot>;

    /// Returns the net balance change the transaction itself would cause to
    /// its payer as of `at`.
    ///
    /// Negative values are debits. Positive values are credits, which the
    /// solvency check ignores.
    fn adjustment_for(&self, facts: &TransactionFacts, at: Timestamp) -> i64;
}
