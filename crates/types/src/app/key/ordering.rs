// Path: crates/types/src/app/key/ordering.rs

//! A deterministic total order over `Key` values.
//!
//! Every replica must sort, deduplicate and compare key material identically,
//! so the order below is part of the protocol. Two quirks are load-bearing and
//! must not be "fixed":
//!
//! * raw key bytes are compared as **signed** 8-bit integers, and a longer byte
//!   sequence sorts before a shorter one;
//! * threshold values are compared through a wrapping 32-bit signed subtraction.
//!
//! Lists are compared position by position in submitted order. Callers are
//! responsible for producing lists in a network-wide consistent order.

use super::{ContractId, Key, ThresholdKey};
use crate::error::KeyError;
use std::cmp::Ordering;

/// The default bound on key nesting accepted by the comparator.
pub const DEFAULT_MAX_KEY_DEPTH: usize = 64;

/// Compares two keys with the default depth bound.
pub fn compare_keys(first: &Key, second: &Key) -> Result<Ordering, KeyError> {
    KeyComparator::default().compare(first, second)
}

/// A stateless comparator over `Key` values with an explicit nesting bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyComparator {
    max_depth: usize,
}

impl Default for KeyComparator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEY_DEPTH)
    }
}

impl KeyComparator {
    /// Creates a comparator that refuses to descend more than `max_depth` levels.
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The nesting bound of this comparator.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compares two keys.
    ///
    /// Returns `Err` for an internal fault: two keys of the same unsupported
    /// kind, or nesting deeper than the configured bound. A fault is never an
    /// ordering and must abort whatever sort or lookup requested it.
    pub fn compare(&self, first: &Key, second: &Key) -> Result<Ordering, KeyError> {
        self.compare_at(first, second, 0)
    }

    /// Compares two possibly absent keys. An absent key sorts first.
    pub fn compare_optional(
        &self,
        first: Option<&Key>,
        second: Option<&Key>,
    ) -> Result<Ordering, KeyError> {
        match (first, second) {
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(Ordering::Less),
            (Some(_), None) => Ok(Ordering::Greater),
            (Some(first), Some(second)) => self.compare(first, second),
        }
    }

    fn compare_at(&self, first: &Key, second: &Key, depth: usize) -> Result<Ordering, KeyError> {
        if depth > self.max_depth {
            return Err(KeyError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        match (first, second) {
            (Key::Unset, Key::Unset) => Ok(Ordering::Equal),
            (Key::ContractId(lhs), Key::ContractId(rhs))
            | (Key::DelegatableContractId(lhs), Key::DelegatableContractId(rhs)) => {
                Ok(compare_contract_ids(lhs, rhs))
            }
            (Key::Ed25519(lhs), Key::Ed25519(rhs))
            | (Key::EcdsaSecp256k1(lhs), Key::EcdsaSecp256k1(rhs)) => Ok(compare_bytes(lhs, rhs)),
            (Key::Threshold(lhs), Key::Threshold(rhs)) => self.compare_threshold(lhs, rhs, depth),
            (Key::KeyList(lhs), Key::KeyList(rhs)) => self.compare_lists(&lhs.keys, &rhs.keys, depth),
            // Accepted on the wire, but no ordering is defined between two of them.
            (Key::Rsa3072(_), Key::Rsa3072(_)) | (Key::Ecdsa384(_), Key::Ecdsa384(_)) => {
                Err(KeyError::UnsupportedKeyType(first.kind()))
            }
            // Different kinds: only the protocol ordinal matters.
            _ => Ok(first
                .kind()
                .proto_ordinal()
                .cmp(&second.kind().proto_ordinal())),
        }
    }

    fn compare_threshold(
        &self,
        lhs: &ThresholdKey,
        rhs: &ThresholdKey,
        depth: usize,
    ) -> Result<Ordering, KeyError> {
        let difference = (lhs.threshold as i32).wrapping_sub(rhs.threshold as i32);
        if difference != 0 {
            return Ok(difference.cmp(&0));
        }
        self.compare_lists(&lhs.keys.keys, &rhs.keys.keys, depth)
    }

    fn compare_lists(&self, lhs: &[Key], rhs: &[Key], depth: usize) -> Result<Ordering, KeyError> {
        for (left, right) in lhs.iter().zip(rhs) {
            let ordering = self.compare_at(left, right, depth + 1)?;
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
        Ok(lhs.len().cmp(&rhs.len()))
    }

    /// Returns `keys` in ascending order. The sort is stable and stops at the
    /// first fault.
    pub fn sort(&self, keys: Vec<Key>) -> Result<Vec<Key>, KeyError> {
        if keys.len() < 2 {
            return Ok(keys);
        }
        let mut left = keys;
        let right = left.split_off(left.len() / 2);
        let left = self.sort(left)?;
        let right = self.sort(right)?;

        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();
        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => self.compare(l, r)? != Ordering::Greater,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if take_left { left.next() } else { right.next() };
            merged.extend(next);
        }
        Ok(merged)
    }

    /// Sorts `keys` and drops every key that compares equal to its predecessor.
    pub fn canonicalize(&self, keys: Vec<Key>) -> Result<Vec<Key>, KeyError> {
        let mut canonical: Vec<Key> = Vec::new();
        for key in self.sort(keys)? {
            let duplicate = match canonical.last() {
                Some(last) => self.compare(last, &key)? == Ordering::Equal,
                None => false,
            };
            if !duplicate {
                canonical.push(key);
            }
        }
        Ok(canonical)
    }

    /// Binary search for `key` in a slice produced by `sort` or `canonicalize`.
    pub fn contains(&self, sorted: &[Key], key: &Key) -> Result<bool, KeyError> {
        let (mut low, mut high) = (0usize, sorted.len());
        while low < high {
            let mid = low + (high - low) / 2;
            let Some(candidate) = sorted.get(mid) else {
                break;
            };
            match self.compare(candidate, key)? {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(true),
            }
        }
        Ok(false)
    }
}

/// Realm, then shard, then contract number, all descending; then EVM address.
fn compare_contract_ids(lhs: &ContractId, rhs: &ContractId) -> Ordering {
    rhs.realm
        .cmp(&lhs.realm)
        .then_with(|| rhs.shard.cmp(&lhs.shard))
        .then_with(|| {
            rhs.contract_num
                .unwrap_or(0)
                .cmp(&lhs.contract_num.unwrap_or(0))
        })
        .then_with(
            || match (lhs.evm_address.as_deref(), rhs.evm_address.as_deref()) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(lhs), Some(rhs)) => compare_bytes(lhs, rhs),
            },
        )
}

/// Longer sequences first; equal lengths compare bytewise as `i8`.
fn compare_bytes(lhs: &[u8], rhs: &[u8]) -> Ordering {
    if lhs.len() != rhs.len() {
        return rhs.len().cmp(&lhs.len());
    }
    lhs.iter()
        .map(|b| *b as i8)
        .cmp(rhs.iter().map(|b| *b as i8))
}
