// In: src/pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Dictionary Pipeline
// ====================================================================================
//
// One run is a single synchronous batch:
//
//   entries --> [indexer]  --> PipelineContext { symbols, index, bloom, vocabulary }
//                                  |               |
//                                  v               v
//                             [huffman]        [trie]
//                                  |               |
//                                  `--> [encoder] <'
//                                           |
//                                           v
//                           [orchestrator] blob = code table ++ trie
//
// The encoder is the only iterative stage; it re-emits the trie until every
// child offset it assumed matches the one it measured.
// ====================================================================================

pub mod context;
pub mod encoder;
pub mod indexer;
pub mod orchestrator;
pub mod trie;

pub use context::{PipelineContext, PrefixIndex};
pub use orchestrator::{encode_dictionary, CompileStats, EncodedDictionary};
