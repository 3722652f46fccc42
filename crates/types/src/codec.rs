// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for consensus-critical data.
//!
//! This module provides simple wrappers around `parity-scale-codec` (SCALE). By
//! centralizing the codec logic here in the base `types` crate, every replica
//! decodes transaction facts and key material from the exact same byte layout.

use crate::app::DEFAULT_MAX_KEY_DEPTH;
use parity_scale_codec::{Decode, DecodeLimit, Encode};

/// The deepest nesting `from_bytes_canonical` accepts.
///
/// Every nested key list costs one level; the slack covers the containers a
/// key can sit in. Anything deeper could not be compared anyway.
pub const MAX_DECODE_DEPTH: u32 = DEFAULT_MAX_KEY_DEPTH as u32 + 2;

/// Encodes a value into a deterministic, canonical byte representation using SCALE codec.
///
/// # Arguments
///
/// * `v` - A reference to a value that implements the `parity_scale_codec::Encode` trait.
///
/// # Returns
///
/// A `Vec<u8>` containing the canonical SCALE-encoded bytes.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// This function fails fast on any decoding error, including trailing bytes
/// and nesting deeper than `MAX_DECODE_DEPTH`, returning a descriptive string.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all_with_depth_limit(MAX_DECODE_DEPTH, &mut &*b)
        .map_err(|e| format!("canonical decode failed: {}", e))
}
