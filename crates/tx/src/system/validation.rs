// Path: crates/tx/src/system/validation.rs

//! Core, non-optional system logic for transaction signature validation.
//!
//! A payer key is satisfied when its tree of simple keys is "activated" by the
//! transaction's signature map. Simple keys are matched to signature pairs by
//! public key prefix, verified once each, and the results are folded back up
//! through key lists (all children) and threshold keys (at least M of N).

use gate_api::signature::SignatureVerifier;
use gate_crypto::error::CryptoError;
use gate_crypto::verify_signature;
use gate_telemetry::error_metrics;
use gate_types::app::{Key, KeyComparator, SignaturePair, TransactionFacts};
use gate_types::config::AdmissionConfig;
use gate_types::error::{ErrorCode, KeyError, VerifyFailure};
use tracing::{debug, error, warn};

/// A `SignatureVerifier` that checks key activation against the transaction's
/// signature map.
#[derive(Debug, Clone)]
pub struct KeyActivationVerifier {
    shard: i64,
    realm: i64,
    comparator: KeyComparator,
}

impl KeyActivationVerifier {
    /// Builds a verifier for the configured home shard and realm.
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            shard: config.shard,
            realm: config.realm,
            comparator: KeyComparator::new(config.max_key_depth),
        }
    }

    /// Returns the canonical set of simple keys under `key` whose signatures
    /// verify over the transaction body.
    pub fn verified_keys(
        &self,
        facts: &TransactionFacts,
        key: &Key,
    ) -> Result<Vec<Key>, VerifyFailure> {
        let mut simple = Vec::new();
        self.collect_simple_keys(key, 0, &mut simple)
            .map_err(|e| key_fault(facts, e))?;
        let candidates = self
            .comparator
            .canonicalize(simple)
            .map_err(|e| key_fault(facts, e))?;

        let mut verified = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Some(key_bytes) = candidate.simple_bytes() else {
                continue;
            };
            let Some(pair) = find_pair(&facts.raw_signature_material.pairs, &candidate, key_bytes)?
            else {
                continue;
            };
            match verify_signature(&pair.signature, key_bytes, &facts.body_bytes) {
                Ok(()) => verified.push(candidate),
                Err(CryptoError::VerificationFailed) => {
                    debug!(
                        target: "sigs",
                        key = %hex::encode(key_bytes),
                        "signature does not verify"
                    );
                }
                Err(e) => {
                    debug!(
                        target: "sigs",
                        key = %hex::encode(key_bytes),
                        error = %e,
                        "malformed key or signature material"
                    );
                    error_metrics().inc_error("crypto", e.code());
                }
            }
        }
        Ok(verified)
    }

    fn collect_simple_keys(
        &self,
        key: &Key,
        depth: usize,
        out: &mut Vec<Key>,
    ) -> Result<(), KeyError> {
        if depth > self.comparator.max_depth() {
            return Err(KeyError::DepthExceeded {
                limit: self.comparator.max_depth(),
            });
        }
        if key.simple_bytes().is_some() {
            out.push(key.clone());
        } else if let Some(children) = key.children() {
            for child in children {
                self.collect_simple_keys(child, depth + 1, out)?;
            }
        }
        Ok(())
    }

    /// Folds verified simple keys up through the key tree.
    fn is_active(&self, key: &Key, verified: &[Key], depth: usize) -> Result<bool, KeyError> {
        if depth > self.comparator.max_depth() {
            return Err(KeyError::DepthExceeded {
                limit: self.comparator.max_depth(),
            });
        }
        match key {
            Key::Ed25519(_) | Key::EcdsaSecp256k1(_) => self.comparator.contains(verified, key),
            Key::KeyList(list) => {
                if list.is_empty() {
                    return Ok(false);
                }
                for child in &list.keys {
                    if !self.is_active(child, verified, depth + 1)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Key::Threshold(threshold) => {
                let needed = threshold.threshold as usize;
                if needed == 0 || needed > threshold.keys.len() {
                    return Ok(false);
                }
                let mut active = 0usize;
                for child in &threshold.keys.keys {
                    if self.is_active(child, verified, depth + 1)? {
                        active += 1;
                        if active >= needed {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
            Key::Unset
            | Key::ContractId(_)
            | Key::DelegatableContractId(_)
            | Key::Rsa3072(_)
            | Key::Ecdsa384(_) => Ok(false),
        }
    }
}

/// Finds the single signature pair that claims `key`. More than one claimant is
/// ambiguous.
fn find_pair<'a>(
    pairs: &'a [SignaturePair],
    key: &Key,
    key_bytes: &[u8],
) -> Result<Option<&'a SignaturePair>, VerifyFailure> {
    let mut matching = pairs
        .iter()
        .filter(|pair| pair.signature.matches_kind(key) && pair.prefix_matches(key_bytes));
    let first = matching.next();
    if first.is_some() && matching.next().is_some() {
        return Err(VerifyFailure::PrefixMismatch);
    }
    Ok(first)
}

impl SignatureVerifier for KeyActivationVerifier {
    fn verify(&self, facts: &TransactionFacts, key: &Key) -> Result<bool, VerifyFailure> {
        let payer = facts.payer_id;
        if !payer.is_in(self.shard, self.realm) || payer.num <= 0 {
            warn!(target: "sigs", payer = %payer, "payer is not a valid account reference");
            return Err(VerifyFailure::InvalidAccountId);
        }

        let verified = self.verified_keys(facts, key)?;
        self.is_active(key, &verified, 0)
            .map_err(|e| key_fault(facts, e))
    }
}

/// Logs and counts an internal key fault before it is folded into `Other`.
fn key_fault(facts: &TransactionFacts, e: KeyError) -> VerifyFailure {
    error!(target: "keys", payer = %facts.payer_id, error = %e, "key activation aborted");
    error_metrics().inc_error("key", e.code());
    e.into()
}
