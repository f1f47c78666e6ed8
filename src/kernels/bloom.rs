//! This module contains the fixed-size Bloom filter over word prefixes.
//!
//! The filter is a 512 KiB bit array addressed by a single 32-bit string hash.
//! Both the byte index and the bit within that byte come from the same hash
//! value, so the filter behaves like a one-function Bloom filter over
//! 4,194,304 bits. The consumer computes exactly this hash, which is why the
//! scheme is fixed.

use std::fmt;

use crate::bridge::format::{BLOOM_FILTER_BYTES, BLOOM_HASH_SEED};

//==================================================================================
// 1. Hashing
//==================================================================================

/// Hashes a key with `h = h * 31 + byte` over its UTF-8 bytes, wrapping at 32 bits.
pub fn prefix_hash(key: &str) -> u32 {
    key.bytes().fold(BLOOM_HASH_SEED, |h, byte| {
        (h << 5).wrapping_sub(h).wrapping_add(u32::from(byte))
    })
}

/// Byte index and bit mask addressed by a hash value.
fn locate(hash: u32) -> (usize, u8) {
    let byte = (hash / 8) as usize % BLOOM_FILTER_BYTES;
    let mask = 1u8 << (hash % 8);
    (byte, mask)
}

//==================================================================================
// 2. The Filter
//==================================================================================

/// A zero-initialised, fixed-size prefix filter. Never yields false negatives.
#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: Box<[u8]>,
}

impl BloomFilter {
    pub fn new() -> Self {
        Self {
            bits: vec![0u8; BLOOM_FILTER_BYTES].into_boxed_slice(),
        }
    }

    pub fn set(&mut self, key: &str) {
        let (byte, mask) = locate(prefix_hash(key));
        self.bits[byte] |= mask;
    }

    pub fn query(&self, key: &str) -> bool {
        let (byte, mask) = locate(prefix_hash(key));
        self.bits[byte] & mask != 0
    }

    /// The raw filter image, exactly `BLOOM_FILTER_BYTES` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Number of bits currently set.
    pub fn set_bits(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Expected false-positive probability for a random absent key, i.e. the
    /// fraction of set bits.
    pub fn fill_ratio(&self) -> f64 {
        self.set_bits() as f64 / (BLOOM_FILTER_BYTES * 8) as f64
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bytes", &self.bits.len())
            .field("set_bits", &self.set_bits())
            .finish()
    }
}
