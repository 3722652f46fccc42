// Path: crates/types/src/app/mod.rs
//! Core application-level data structures like keys, accounts and transactions.

/// Data structures for on-chain identity: `AccountId` and `Timestamp`.
pub mod identity;
/// The recursive `Key` model and its deterministic total order.
pub mod key;
/// The outcome of an admission precheck.
pub mod precheck;
/// Per-transaction facts, account snapshots and fee quotes.
pub mod transaction;

pub use identity::{AccountId, Timestamp};
pub use key::{
    compare_keys, ContractId, Key, KeyComparator, KeyKind, KeyList, ThresholdKey,
    DEFAULT_MAX_KEY_DEPTH,
};
pub use precheck::{PrecheckResult, ResponseCode};
pub use transaction::{
    AccountSnapshot, FeeQuote, SignatureMap, SignaturePair, SignatureValue, TransactionFacts,
};
