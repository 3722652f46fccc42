// Path: crates/tx/tests/metrics_reporting.rs

//! Precheck outcomes reach the globally installed Prometheus sink.
//!
//! Lives in its own test binary: the global sink can only be installed once
//! per process.

use gate_api::fees::{FeeEstimator, FeeExemptionPolicy};
use gate_api::ledger::AccountLedgerView;
use gate_api::signature::SignatureVerifier;
use gate_test_utils::assert_precheck;
use gate_test_utils::fixtures::{payer_snapshot, FactsBuilder, PAYER, UNACCEPTABLE_FEES};
use gate_tx::AdmissionPipeline;
use gate_types::app::{
    AccountId, AccountSnapshot, FeeQuote, Key, ResponseCode, Timestamp, TransactionFacts,
};
use gate_types::error::{FeeError, VerifyFailure};

struct Ledger;

impl AccountLedgerView for Ledger {
    fn snapshot(&self, id: &AccountId) -> Option<AccountSnapshot> {
        (*id == PAYER).then(|| payer_snapshot(Key::ed25519(vec![0xAB; 32])))
    }

    fn adjustment_for(&self, _facts: &TransactionFacts, _at: Timestamp) -> i64 {
        0
    }
}

struct Verifier(Result<bool, VerifyFailure>);

impl SignatureVerifier for Verifier {
    fn verify(&self, _facts: &TransactionFacts, _key: &Key) -> Result<bool, VerifyFailure> {
        self.0.clone()
    }
}

struct NoExemptions;

impl FeeExemptionPolicy for NoExemptions {
    fn is_exempt(&self, _facts: &TransactionFacts) -> bool {
        false
    }
}

struct Quote(FeeQuote);

impl FeeEstimator for Quote {
    fn estimate(
        &self,
        _facts: &TransactionFacts,
        _payer_key: &Key,
        _ledger: &dyn AccountLedgerView,
        _at: Timestamp,
    ) -> Result<FeeQuote, FeeError> {
        Ok(self.0)
    }
}

fn counter(name: &str, label: &str, value: &str) -> u64 {
    prometheus::gather()
        .iter()
        .filter(|family| family.get_name() == name)
        .flat_map(|family| family.get_metric())
        .filter(|metric| {
            metric
                .get_label()
                .iter()
                .any(|pair| pair.get_name() == label && pair.get_value() == value)
        })
        .map(|metric| metric.get_counter().get_value() as u64)
        .sum()
}

#[test]
fn test_assess_reports_through_global_sink() {
    gate_telemetry::prometheus::install_global().unwrap();
    assert!(gate_telemetry::prometheus::install_global().is_err());

    let underpaying = AdmissionPipeline::new(
        Ledger,
        Verifier(Ok(true)),
        NoExemptions,
        Quote(UNACCEPTABLE_FEES),
    );
    let facts = FactsBuilder::new().stated_fee(666).build();
    for _ in 0..3 {
        assert_precheck!(underpaying.assess(&facts), ResponseCode::InsufficientTxFee, 667);
    }
    assert_eq!(
        counter("gate_precheck_outcomes_total", "code", "INSUFFICIENT_TX_FEE"),
        3
    );

    let unsigned = AdmissionPipeline::new(
        Ledger,
        Verifier(Err(VerifyFailure::PrefixMismatch)),
        NoExemptions,
        Quote(UNACCEPTABLE_FEES),
    );
    assert_precheck!(unsigned.assess(&facts), ResponseCode::KeyPrefixMismatch, 0);
    assert_eq!(
        counter("gate_signature_failures_total", "kind", "prefix_mismatch"),
        1
    );
    assert_eq!(
        counter("gate_precheck_outcomes_total", "code", "KEY_PREFIX_MISMATCH"),
        1
    );
}
