//! Canonical admission scenarios for reproducible tests

use gate_types::app::{
    AccountId, AccountSnapshot, FeeQuote, Key, SignatureMap, Timestamp, TransactionFacts,
};

/// The payer used by the standard scenarios, `0.0.1234`.
pub const PAYER: AccountId = AccountId::new(0, 0, 1234);

/// The payer's balance in the standard scenarios.
pub const PAYER_BALANCE: u64 = 1234;

/// A fee quote whose total (666) the standard payer can afford.
pub const ACCEPTABLE_FEES: FeeQuote = FeeQuote::new(111, 222, 333);

/// A fee quote whose total (667) exceeds the standard stated fee by one.
pub const UNACCEPTABLE_FEES: FeeQuote = FeeQuote::new(111, 222, 334);

/// The start of the standard validity window.
pub const VALID_START_SECS: i64 = 1_234_567;

/// The signed body bytes of the standard transaction.
pub const BODY: &[u8] = b"crypto-transfer 0.0.1234 -> 0.0.98";

/// Builder for `TransactionFacts` around the standard scenario.
#[derive(Debug, Clone)]
pub struct FactsBuilder {
    facts: TransactionFacts,
}

impl FactsBuilder {
    /// Starts from the standard payer offering exactly the acceptable fee total.
    pub fn new() -> Self {
        Self {
            facts: TransactionFacts {
                payer_id: PAYER,
                stated_fee: ACCEPTABLE_FEES.total(),
                valid_start: Timestamp::from_secs(VALID_START_SECS),
                body_bytes: BODY.to_vec(),
                raw_signature_material: SignatureMap::default(),
            },
        }
    }

    /// Sets the payer.
    pub fn payer(mut self, payer: AccountId) -> Self {
        self.facts.payer_id = payer;
        self
    }

    /// Sets the stated fee.
    pub fn stated_fee(mut self, fee: u64) -> Self {
        self.facts.stated_fee = fee;
        self
    }

    /// Sets the signed body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.facts.body_bytes = body.into();
        self
    }

    /// Sets the signature map.
    pub fn signatures(mut self, sigs: SignatureMap) -> Self {
        self.facts.raw_signature_material = sigs;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> TransactionFacts {
        self.facts
    }
}

impl Default for FactsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard payer's snapshot, controlled by `key`.
pub fn payer_snapshot(key: Key) -> AccountSnapshot {
    AccountSnapshot {
        key,
        balance: PAYER_BALANCE,
        exists: true,
    }
}
