// In: src/pipeline/orchestrator.rs

//! The top-level coordinator for one dictionary compilation run.
//!
//! It threads a single `PipelineContext` through the stages in order:
//! indexing, Huffman coding, trie construction and fixed-point encoding, and
//! assembles the final blob as `[code-table section][trie section]`. Nothing
//! is written to disk here; see `bridge::writer` for that.

use serde::Serialize;

use crate::config::LexitrieConfig;
use crate::error::LexitrieError;
use crate::kernels::bitstream::BitWriter;
use crate::kernels::huffman;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::encoder::{default_pass_bound, TrieEncoder};
use crate::pipeline::indexer::build_context;
use crate::pipeline::trie::Trie;
use crate::types::Entry;

//==================================================================================
// 1. Public Types
//==================================================================================

/// Figures describing one compilation run.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub retained_entries: usize,
    pub dropped_entries: usize,
    pub prefixes: usize,
    pub alphabet_size: usize,
    pub trie_nodes: usize,
    pub code_table_bytes: usize,
    pub trie_bytes: usize,
    pub total_bytes: usize,
    pub fixup_passes: usize,
}

/// The in-memory result of a run: the blob plus the context it was built from.
#[derive(Debug, Clone)]
pub struct EncodedDictionary {
    pub blob: Vec<u8>,
    pub context: PipelineContext,
    pub stats: CompileStats,
}

//==================================================================================
// 2. Orchestration
//==================================================================================

/// Runs every stage over `entries` and returns the finished blob.
pub fn encode_dictionary<I>(entries: I, config: &LexitrieConfig) -> Result<EncodedDictionary, LexitrieError>
where
    I: IntoIterator<Item = Entry>,
{
    config.validate()?;

    // 1. One pass over the input: symbol counts, prefix index, Bloom filter.
    let context = build_context(entries, config)?;

    // 2. Entropy code over the frozen symbol table.
    let codes = huffman::build(&context.symbols)?;

    // 3. Trie over the prefix index.
    let trie = Trie::build(&context.index);

    // 4. Fixed-point encoding of the trie.
    let max_passes = config
        .max_fixup_passes
        .unwrap_or_else(|| default_pass_bound(&trie));
    let encoded = TrieEncoder::new(&trie, &codes, config.frequency_overflow).encode(max_passes)?;

    // 5. Final assembly.
    let mut writer = BitWriter::new();
    codes.serialize(&mut writer)?;
    let mut blob = writer.into_bytes();
    let code_table_bytes = blob.len();
    blob.extend_from_slice(&encoded.bytes);

    let stats = CompileStats {
        retained_entries: context.vocabulary.len(),
        dropped_entries: context.dropped_entries,
        prefixes: context.index.len(),
        alphabet_size: codes.len(),
        trie_nodes: trie.node_count(),
        code_table_bytes,
        trie_bytes: encoded.bytes.len(),
        total_bytes: blob.len(),
        fixup_passes: encoded.passes,
    };
    log::info!(
        "compressed index size: {} bytes ({} code table + {} trie, {} passes)",
        stats.total_bytes,
        stats.code_table_bytes,
        stats.trie_bytes,
        stats.fixup_passes
    );

    Ok(EncodedDictionary {
        blob,
        context,
        stats,
    })
}
