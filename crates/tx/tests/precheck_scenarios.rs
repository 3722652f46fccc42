// Path: crates/tx/tests/precheck_scenarios.rs

//! Admission precheck scenarios against hand-written collaborators.

use gate_api::fees::{FeeEstimator, FeeExemptionPolicy};
use gate_api::ledger::AccountLedgerView;
use gate_api::signature::SignatureVerifier;
use gate_test_utils::assert_precheck;
use gate_test_utils::fixtures::{
    payer_snapshot, FactsBuilder, ACCEPTABLE_FEES, PAYER, PAYER_BALANCE, UNACCEPTABLE_FEES,
};
use gate_tx::AdmissionPipeline;
use gate_types::app::{
    AccountId, AccountSnapshot, FeeQuote, Key, ResponseCode, Timestamp, TransactionFacts,
};
use gate_types::error::{FeeError, VerifyFailure};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
struct MockLedger {
    payer: Option<AccountSnapshot>,
    adjustment: i64,
}

impl MockLedger {
    fn with_payer(balance: u64, adjustment: i64) -> Self {
        let mut snapshot = payer_snapshot(Key::ed25519(vec![0xAB; 32]));
        snapshot.balance = balance;
        Self {
            payer: Some(snapshot),
            adjustment,
        }
    }
}

impl AccountLedgerView for MockLedger {
    fn snapshot(&self, id: &AccountId) -> Option<AccountSnapshot> {
        self.payer.clone().filter(|_| *id == PAYER)
    }

    fn adjustment_for(&self, _facts: &TransactionFacts, _at: Timestamp) -> i64 {
        self.adjustment
    }
}

#[derive(Debug, Clone)]
struct MockVerifier(Result<bool, VerifyFailure>);

impl SignatureVerifier for MockVerifier {
    fn verify(&self, _facts: &TransactionFacts, _key: &Key) -> Result<bool, VerifyFailure> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy)]
struct MockExemptions(bool);

impl FeeExemptionPolicy for MockExemptions {
    fn is_exempt(&self, _facts: &TransactionFacts) -> bool {
        self.0
    }
}

#[derive(Debug)]
struct MockEstimator {
    quote: Result<FeeQuote, FeeError>,
    calls: AtomicUsize,
}

impl MockEstimator {
    fn quoting(quote: FeeQuote) -> Self {
        Self {
            quote: Ok(quote),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            quote: Err(FeeError::ScheduleUnavailable("no schedule for CryptoTransfer".into())),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FeeEstimator for MockEstimator {
    fn estimate(
        &self,
        _facts: &TransactionFacts,
        _payer_key: &Key,
        _ledger: &dyn AccountLedgerView,
        _at: Timestamp,
    ) -> Result<FeeQuote, FeeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.quote.clone()
    }
}

fn solvent_ledger() -> MockLedger {
    MockLedger::with_payer(PAYER_BALANCE, -1)
}

fn signed() -> MockVerifier {
    MockVerifier(Ok(true))
}

fn standard_facts() -> TransactionFacts {
    FactsBuilder::new().build()
}

#[test]
fn test_missing_payer() {
    let estimator = MockEstimator::quoting(ACCEPTABLE_FEES);
    let pipeline = AdmissionPipeline::new(
        MockLedger {
            payer: None,
            adjustment: 0,
        },
        signed(),
        MockExemptions(false),
        &estimator,
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::PayerAccountNotFound, 0);
    assert_eq!(estimator.calls(), 0);
}

#[test]
fn test_unknown_payer_id() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    let facts = FactsBuilder::new().payer(AccountId::new(0, 0, 4321)).build();
    assert_precheck!(pipeline.assess(&facts), ResponseCode::PayerAccountNotFound, 0);
}

#[test]
fn test_deleted_payer_is_not_found() {
    let mut ledger = solvent_ledger();
    if let Some(snapshot) = ledger.payer.as_mut() {
        snapshot.exists = false;
    }
    let pipeline = AdmissionPipeline::new(
        ledger,
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::PayerAccountNotFound, 0);
}

#[test]
fn test_signature_failures_map_to_codes() {
    let cases = [
        (Err(VerifyFailure::PrefixMismatch), ResponseCode::KeyPrefixMismatch),
        (Err(VerifyFailure::InvalidAccountId), ResponseCode::InvalidAccountId),
        (
            Err(VerifyFailure::Other("backend unavailable".into())),
            ResponseCode::InvalidSignature,
        ),
        (Ok(false), ResponseCode::InvalidSignature),
    ];
    for (outcome, expected) in cases {
        let estimator = MockEstimator::quoting(ACCEPTABLE_FEES);
        let pipeline = AdmissionPipeline::new(
            solvent_ledger(),
            MockVerifier(outcome),
            MockExemptions(false),
            &estimator,
        );
        assert_precheck!(pipeline.assess(&standard_facts()), expected, 0);
        assert_eq!(estimator.calls(), 0, "fee stage must not run after {}", expected);
    }
}

#[test]
fn test_exempt_payer_skips_fee_stages() {
    let estimator = MockEstimator::quoting(UNACCEPTABLE_FEES);
    let pipeline = AdmissionPipeline::new(
        MockLedger::with_payer(0, -1234),
        signed(),
        MockExemptions(true),
        &estimator,
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::Ok, 0);
    assert_eq!(estimator.calls(), 0);
}

#[test]
fn test_exemption_does_not_bypass_signatures() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        MockVerifier(Ok(false)),
        MockExemptions(true),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::InvalidSignature, 0);
}

#[test]
fn test_fee_estimation_failure() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        signed(),
        MockExemptions(false),
        MockEstimator::failing(),
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::FailFee, 0);
}

#[test]
fn test_insufficient_stated_fee() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(UNACCEPTABLE_FEES),
    );
    let facts = FactsBuilder::new().stated_fee(666).build();
    assert_precheck!(pipeline.assess(&facts), ResponseCode::InsufficientTxFee, 667);
}

#[test]
fn test_credit_does_not_create_solvency() {
    let pipeline = AdmissionPipeline::new(
        MockLedger::with_payer(0, 1234),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    assert_precheck!(
        pipeline.assess(&standard_facts()),
        ResponseCode::InsufficientPayerBalance,
        666
    );
}

#[test]
fn test_debit_can_create_insolvency() {
    let pipeline = AdmissionPipeline::new(
        MockLedger::with_payer(PAYER_BALANCE, -1234),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    assert_precheck!(
        pipeline.assess(&standard_facts()),
        ResponseCode::InsufficientPayerBalance,
        666
    );
}

#[test]
fn test_solvent_happy_path() {
    let estimator = MockEstimator::quoting(ACCEPTABLE_FEES);
    let pipeline = AdmissionPipeline::new(solvent_ledger(), signed(), MockExemptions(false), &estimator);
    let result = pipeline.assess(&standard_facts());
    assert_precheck!(result, ResponseCode::Ok, 666);
    assert!(result.is_ok());
    assert_eq!(estimator.calls(), 1);
}

#[test]
fn test_overpaying_is_fine() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    let facts = FactsBuilder::new().stated_fee(1_000).build();
    assert_precheck!(pipeline.assess(&facts), ResponseCode::Ok, 666);
}

#[test]
fn test_exact_balance_is_solvent() {
    let pipeline = AdmissionPipeline::new(
        MockLedger::with_payer(666, 0),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(ACCEPTABLE_FEES),
    );
    assert_precheck!(pipeline.assess(&standard_facts()), ResponseCode::Ok, 666);
}

#[test]
fn test_assessment_is_repeatable() {
    let pipeline = AdmissionPipeline::new(
        solvent_ledger(),
        signed(),
        MockExemptions(false),
        MockEstimator::quoting(UNACCEPTABLE_FEES),
    );
    let facts = standard_facts();
    let first = pipeline.assess(&facts);
    for _ in 0..10 {
        assert_eq!(pipeline.assess(&facts), first);
    }
}
