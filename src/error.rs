// In: src/error.rs

//! This module defines the single, unified error type for the entire lexitrie library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexitrieError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The entry list was unreadable or malformed, or a required setting was missing.
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Cannot build a Huffman code: the alphabet has no symbol with a positive count")]
    EmptyAlphabet,

    #[error("Suffix frequency {frequency} for '{prefix}{suffix}' exceeds the one-byte range (max 255)")]
    FrequencyOverflow {
        prefix: String,
        suffix: String,
        frequency: u64,
    },

    #[error("Trie offsets did not converge after {passes} passes ({fixups} fixups in the last pass)")]
    FixupDivergence { passes: usize, fixups: usize },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("Escaped varint encoding error: value {0} exceeds 0xFFFF")]
    VarIntOverflow(u64),

    #[error("Huffman code for {symbol} is {length} bits long; code lengths are stored in one byte")]
    CodeTooLong { symbol: String, length: usize },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
