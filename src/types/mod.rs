//! This module defines the core, strongly-typed data representations used
//! throughout the lexitrie pipeline.
//!
//! It includes the input `Entry` record and the `Symbol` alphabet (characters
//! plus the two sentinels) over which the Huffman code is built.

pub mod entry;
pub mod symbol;

// Re-export the main type(s) for easier access.
pub use entry::Entry;
pub use symbol::Symbol;
