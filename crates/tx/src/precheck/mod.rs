// Path: crates/tx/src/precheck/mod.rs

//! The five-stage admission precheck.
//!
//! Stages run in a fixed order and the first failing stage decides the
//! outcome: payer existence, signature sufficiency, fee exemption, fee
//! estimation, and payer solvency. Collaborator failures are never propagated;
//! each is mapped onto a `ResponseCode`.

use gate_api::fees::{FeeEstimator, FeeExemptionPolicy};
use gate_api::ledger::AccountLedgerView;
use gate_api::signature::SignatureVerifier;
use gate_telemetry::time::Timer;
use gate_telemetry::{admission_metrics, error_metrics};
use gate_types::app::{AccountSnapshot, PrecheckResult, ResponseCode, TransactionFacts};
use gate_types::error::{ErrorCode, VerifyFailure};
use tracing::{debug, warn};

/// Runs the admission precheck against a set of collaborators.
///
/// The pipeline holds no mutable state. Any number of assessments may run
/// concurrently as long as the ledger view serves point-in-time snapshots.
#[derive(Debug, Clone)]
pub struct AdmissionPipeline<L, V, X, F> {
    ledger: L,
    verifier: V,
    exemptions: X,
    estimator: F,
}

impl<L, V, X, F> AdmissionPipeline<L, V, X, F>
where
    L: AccountLedgerView,
    V: SignatureVerifier,
    X: FeeExemptionPolicy,
    F: FeeEstimator,
{
    /// Assembles a pipeline from its collaborators.
    pub fn new(ledger: L, verifier: V, exemptions: X, estimator: F) -> Self {
        Self {
            ledger,
            verifier,
            exemptions,
            estimator,
        }
    }

    /// The ledger view this pipeline reads from.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Decides whether `facts` may be admitted and what fee it must carry.
    pub fn assess(&self, facts: &TransactionFacts) -> PrecheckResult {
        let metrics = admission_metrics();
        let _timer = Timer::new(metrics);

        let result = self.run_stages(facts);
        metrics.inc_precheck_outcome(result.validity().as_str());
        debug!(
            target: "precheck",
            payer = %facts.payer_id,
            code = %result.validity(),
            required_fee = result.required_fee(),
            "precheck complete"
        );
        result
    }

    fn run_stages(&self, facts: &TransactionFacts) -> PrecheckResult {
        let Some(payer) = self.existing_payer(facts) else {
            return PrecheckResult::just(ResponseCode::PayerAccountNotFound);
        };

        if let Err(code) = self.check_signatures(facts, &payer) {
            return PrecheckResult::just(code);
        }

        if self.exemptions.is_exempt(facts) {
            return PrecheckResult::just(ResponseCode::Ok);
        }

        let quote = match self
            .estimator
            .estimate(facts, &payer.key, &self.ledger, facts.valid_start)
        {
            Ok(quote) => quote,
            Err(e) => {
                warn!(target: "precheck", payer = %facts.payer_id, error = %e, "fee estimation failed");
                error_metrics().inc_error("fee", e.code());
                return PrecheckResult::just(ResponseCode::FailFee);
            }
        };
        let required = quote.total();
        if facts.stated_fee < required {
            return PrecheckResult::with_fee(ResponseCode::InsufficientTxFee, required);
        }

        let adjustment = self.ledger.adjustment_for(facts, facts.valid_start);
        if !is_solvent(payer.balance, adjustment, required) {
            return PrecheckResult::with_fee(ResponseCode::InsufficientPayerBalance, required);
        }
        PrecheckResult::with_fee(ResponseCode::Ok, required)
    }

    fn existing_payer(&self, facts: &TransactionFacts) -> Option<AccountSnapshot> {
        self.ledger
            .snapshot(&facts.payer_id)
            .filter(|snapshot| snapshot.exists)
    }

    fn check_signatures(
        &self,
        facts: &TransactionFacts,
        payer: &AccountSnapshot,
    ) -> Result<(), ResponseCode> {
        let (code, kind) = match self.verifier.verify(facts, &payer.key) {
            Ok(true) => return Ok(()),
            Ok(false) => (ResponseCode::InvalidSignature, "inactive"),
            Err(VerifyFailure::PrefixMismatch) => {
                (ResponseCode::KeyPrefixMismatch, "prefix_mismatch")
            }
            Err(VerifyFailure::InvalidAccountId) => {
                (ResponseCode::InvalidAccountId, "invalid_account_id")
            }
            Err(VerifyFailure::Other(reason)) => {
                warn!(
                    target: "precheck",
                    payer = %facts.payer_id,
                    %reason,
                    "signature verification failed"
                );
                (ResponseCode::InvalidSignature, "other")
            }
        };
        admission_metrics().inc_signature_failure(kind);
        Err(code)
    }
}

/// Only debits within the transaction count against the payer; credits are
/// ignored.
fn is_solvent(balance: u64, adjustment: i64, required: u64) -> bool {
    let effective = i128::from(balance) + i128::from(adjustment.min(0));
    effective >= i128::from(required)
}
