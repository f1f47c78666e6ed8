// In: src/bridge/format.rs

//! Defines all on-disk constants of the lexitrie artifacts.
//! This is the single source of truth for the compressed dictionary blob, the
//! Bloom filter image and the file naming used by the artifact writer.

//==================================================================================
// I. Dictionary Blob Format
//==================================================================================

/// Words are indexed by at most this many leading characters.
pub const PREFIX_LIMIT: usize = 6;

/// Marker byte announcing a 2-byte big-endian value in the escaped varint.
pub const VARINT_ESCAPE: u8 = 0xFF;
/// Largest value a one-byte varint carries. Note that it equals `VARINT_ESCAPE`.
pub const VARINT_MAX_INLINE: u64 = 0xFF;
/// Largest value the escaped form carries.
pub const VARINT_MAX_ESCAPED: u64 = 0xFFFF;

/// Codepoint stored in the code table for the `EndOfWord` sentinel.
pub const END_OF_WORD_CHAR: char = '*';
/// Codepoint stored in the code table for the `EndOfPrefix` sentinel.
pub const END_OF_PREFIX_CHAR: char = '#';
/// Characters above this cannot be written as varint codepoints.
pub const MAX_ENCODABLE_CODEPOINT: u32 = 0xFFFF;

/// Code lengths are stored in one byte.
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

//==================================================================================
// II. Bloom Filter Format
//==================================================================================

/// Size of the Bloom filter image in bytes (4,194,304 bits).
pub const BLOOM_FILTER_BYTES: usize = 512 * 1024;
/// Initial value of the prefix hash.
pub const BLOOM_HASH_SEED: u32 = 0xcc9e_2d51;

//==================================================================================
// III. Artifact File Names
//==================================================================================

pub const DICT_EXTENSION: &str = "dict";
pub const VOCABULARY_EXTENSION: &str = "vocab";
pub const INDEX_EXTENSION: &str = "i";
pub const BLOOM_EXTENSION: &str = "bf";
