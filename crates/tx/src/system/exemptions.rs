// Path: crates/tx/src/system/exemptions.rs

//! Fee exemption for privileged system accounts.

use gate_api::fees::FeeExemptionPolicy;
use gate_types::app::TransactionFacts;
use gate_types::config::AdmissionConfig;
use tracing::debug;

/// Exempts payers listed in `AdmissionConfig::superuser_accounts` that live in
/// the configured shard and realm.
#[derive(Debug, Clone)]
pub struct SuperuserExemptions {
    config: AdmissionConfig,
}

impl SuperuserExemptions {
    /// Builds the policy from the admission configuration.
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl FeeExemptionPolicy for SuperuserExemptions {
    fn is_exempt(&self, facts: &TransactionFacts) -> bool {
        let exempt = self.config.is_superuser(&facts.payer_id);
        if exempt {
            debug!(target: "precheck", payer = %facts.payer_id, "payer is fee exempt");
        }
        exempt
    }
}
