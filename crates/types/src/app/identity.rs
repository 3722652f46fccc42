// Path: crates/types/src/app/identity.rs

//! Defines the canonical `AccountId` and the consensus `Timestamp`.
//!
//! Account identifiers are the three-part `shard.realm.num` form used on the
//! wire and in every admission log line.

use crate::error::CoreError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A unique, stable identifier for an on-chain account.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
pub struct AccountId {
    /// The shard the account lives in.
    pub shard: i64,
    /// The realm within the shard.
    pub realm: i64,
    /// The account number within the realm.
    pub num: i64,
}

impl AccountId {
    /// Creates an account id from its three components.
    pub const fn new(shard: i64, realm: i64, num: i64) -> Self {
        Self { shard, realm, num }
    }

    /// Returns true if the id lives in the given shard and realm.
    pub fn is_in(&self, shard: i64, realm: i64) -> bool {
        self.shard == shard && self.realm == realm
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = || -> Result<i64, CoreError> {
            parts
                .next()
                .ok_or_else(|| CoreError::InvalidId(s.to_string()))?
                .parse::<i64>()
                .map_err(|e| CoreError::InvalidId(format!("{}: {}", s, e)))
        };
        let id = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(CoreError::InvalidId(s.to_string()));
        }
        Ok(id)
    }
}

/// A consensus timestamp with nanosecond resolution.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
pub struct Timestamp {
    /// Whole seconds since the UNIX epoch.
    pub seconds: i64,
    /// Nanoseconds within the second.
    pub nanos: i32,
}

impl Timestamp {
    /// Creates a timestamp at a whole second.
    pub const fn from_secs(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}
