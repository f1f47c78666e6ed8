//! This module collects the pure, stateless encoding kernels used by the
//! dictionary pipeline.
//!
//! Kernels know nothing about words, prefixes or tries. They turn integers,
//! symbol frequencies and keys into bits; the `pipeline` decides what to feed
//! them and in which order.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bit-level output buffer shared by every emitting kernel.
pub mod bitstream;

/// Byte-aligned integer encoding: the escaped varint used for offsets and codepoints.
pub mod varint;

/// Entropy coding of the symbol alphabet.
pub mod huffman;

/// Probabilistic prefix membership.
pub mod bloom;

pub use bitstream::BitWriter;
pub use bloom::BloomFilter;
pub use huffman::{CodeTable, SymbolFrequencyTable};
