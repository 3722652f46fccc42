// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the admission gate.
use crate::app::{AccountId, DEFAULT_MAX_KEY_DEPTH};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Configuration for transaction admission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AdmissionConfig {
    /// The network's home shard. Payers outside it are invalid account references.
    #[serde(default)]
    pub shard: i64,
    /// The network's home realm.
    #[serde(default)]
    pub realm: i64,
    /// The maximum nesting depth accepted when ordering or activating keys.
    #[serde(default = "default_max_key_depth")]
    pub max_key_depth: usize,
    /// Account numbers exempt from the fee and solvency stages.
    #[serde(default = "default_superuser_accounts")]
    pub superuser_accounts: Vec<i64>,
}

fn default_max_key_depth() -> usize {
    DEFAULT_MAX_KEY_DEPTH
}

fn default_superuser_accounts() -> Vec<i64> {
    vec![2, 50]
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            shard: 0,
            realm: 0,
            max_key_depth: default_max_key_depth(),
            superuser_accounts: default_superuser_accounts(),
        }
    }
}

impl AdmissionConfig {
    /// Parses and validates a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values that would make admission unusable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_key_depth == 0 {
            return Err(CoreError::Config(
                "max_key_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if `id` lives in the configured shard and realm.
    pub fn is_home(&self, id: &AccountId) -> bool {
        id.is_in(self.shard, self.realm)
    }

    /// Returns true if `id` is a home account listed as a superuser.
    pub fn is_superuser(&self, id: &AccountId) -> bool {
        self.is_home(id) && self.superuser_accounts.contains(&id.num)
    }
}
