//! The explicit state object handed between pipeline stages.
//!
//! Everything the single indexing pass produces lives here. Later stages only
//! read it.

use std::collections::BTreeMap;

use crate::kernels::bloom::BloomFilter;
use crate::kernels::huffman::SymbolFrequencyTable;
use crate::types::Entry;

/// Aggregated frequency per suffix, in ascending suffix order.
pub type SuffixFrequencies = BTreeMap<String, u64>;

/// Prefix (first 1 to 6 characters of a word) to its suffix frequencies.
pub type PrefixIndex = BTreeMap<String, SuffixFrequencies>;

/// Output of the indexing pass.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub symbols: SymbolFrequencyTable,
    pub index: PrefixIndex,
    pub bloom: BloomFilter,
    /// Retained entries in input order, words as they were indexed.
    pub vocabulary: Vec<Entry>,
    /// Entries discarded by the frequency threshold or possessive stripping.
    pub dropped_entries: usize,
}

impl PipelineContext {
    pub fn new() -> Self {
        Self::default()
    }
}
