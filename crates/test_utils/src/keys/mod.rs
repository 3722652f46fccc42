//! Random key trees for ordering and activation tests.
//!
//! Generated keys deliberately use short byte strings drawn from a tiny
//! alphabet so that ties, shared prefixes and equal lengths come up often.

use crate::randomness::TestRng;
use gate_types::app::{ContractId, Key};

/// Returns a random key of a supported variant, nested at most `depth` levels.
///
/// Thresholds stay small so that the wrapping threshold comparison remains
/// transitive across generated keys.
pub fn random_key(rng: &mut TestRng, depth: usize) -> Key {
    let composite = depth > 0;
    let choices = if composite { 6 } else { 4 };
    match rng.below(choices) {
        0 => Key::ed25519(small_bytes(rng)),
        1 => Key::secp256k1(small_bytes(rng)),
        2 => Key::ContractId(random_contract(rng)),
        3 => Key::DelegatableContractId(random_contract(rng)),
        4 => Key::key_list(random_children(rng, depth - 1)),
        _ => {
            let threshold = rng.below(4) as u32;
            Key::threshold(threshold, random_children(rng, depth - 1))
        }
    }
}

/// Returns `count` random keys nested at most `depth` levels.
pub fn random_keys(rng: &mut TestRng, count: usize, depth: usize) -> Vec<Key> {
    (0..count).map(|_| random_key(rng, depth)).collect()
}

fn random_children(rng: &mut TestRng, depth: usize) -> Vec<Key> {
    let len = rng.below(4);
    random_keys(rng, len, depth)
}

fn small_bytes(rng: &mut TestRng) -> Vec<u8> {
    let len = rng.below(4);
    (0..len)
        .map(|_| match rng.below(4) {
            0 => 0x00,
            1 => 0x01,
            2 => 0x7f,
            _ => 0x80,
        })
        .collect()
}

fn random_contract(rng: &mut TestRng) -> ContractId {
    let pick = |rng: &mut TestRng| rng.below(3) as i64;
    let shard = pick(rng);
    let realm = pick(rng);
    let contract_num = if rng.chance(0.8) { Some(pick(rng)) } else { None };
    let evm_address = if rng.chance(0.3) {
        Some(small_bytes(rng))
    } else {
        None
    };
    ContractId {
        shard,
        realm,
        contract_num,
        evm_address,
    }
}
