// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing boundary of the lexitrie library. It wraps the
// pure, filesystem-agnostic `pipeline` engine with everything that touches the
// outside world: the plain-text word-list reader, the debugging dumps, and the
// artifact writer.
//
// Data Flow:
//
//   1. [reader]          word list (text)   -> Vec<Entry>
//
//   2. [stateless_api]   compile_entries     -> pipeline::encode_dictionary
//         |
//         `-> [dump] renders the vocabulary and the prefix index
//         |
//         `-> returns CompiledDictionary { blob, dumps, bloom, stats }
//
//   3. [writer]          CompiledDictionary -> <base>.dict / .vocab / .i / .bf
//
// `format` holds every constant of the on-disk layout so the consumer side has a
// single place to check against.
// ====================================================================================
pub mod dump;
pub mod format;
pub mod reader;
pub mod stateless_api;
pub mod writer;

pub use reader::read_entries;
pub use stateless_api::{compile_entries, compile_file, compile_to_disk, CompiledDictionary};
pub use writer::ArtifactWriter;

#[cfg(test)]
mod tests;
