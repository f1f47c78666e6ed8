// In: src/bridge/stateless_api.rs

//! The stateless entry points of the library.
//!
//! `compile_entries` runs the pipeline fully in memory. `compile_to_disk` and
//! `compile_file` add the reader and writer around it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::bridge::dump::{render_index, render_vocabulary};
use crate::bridge::reader::read_entries;
use crate::bridge::writer::ArtifactWriter;
use crate::config::LexitrieConfig;
use crate::error::LexitrieError;
use crate::pipeline::{encode_dictionary, CompileStats};
use crate::types::Entry;

/// Everything one run produces, ready to be written out.
#[derive(Debug, Clone)]
pub struct CompiledDictionary {
    /// `[code table][trie]`, the only artifact the consumer reads.
    pub blob: Vec<u8>,
    pub vocabulary_dump: String,
    pub index_dump: String,
    /// The raw 512 KiB Bloom filter bit array.
    pub bloom: Vec<u8>,
    pub stats: CompileStats,
}

/// Compiles `entries` without touching the filesystem.
pub fn compile_entries<I>(entries: I, config: &LexitrieConfig) -> Result<CompiledDictionary, LexitrieError>
where
    I: IntoIterator<Item = Entry>,
{
    // 1. Run the pure pipeline.
    let encoded = encode_dictionary(entries, config)?;

    // 2. Render the debugging dumps from the same context.
    let vocabulary_dump = render_vocabulary(&encoded.context.vocabulary);
    let index_dump = render_index(&encoded.context.index);
    log::info!(
        "vocabulary size: {} words ({} bytes)",
        encoded.context.vocabulary.len(),
        vocabulary_dump.len()
    );
    log::info!(
        "index size: {} prefixes ({} bytes)",
        encoded.context.index.len(),
        index_dump.len()
    );
    log::info!(
        "bloom filter: {} bits set ({:.4} fill)",
        encoded.context.bloom.set_bits(),
        encoded.context.bloom.fill_ratio()
    );

    Ok(CompiledDictionary {
        blob: encoded.blob,
        vocabulary_dump,
        index_dump,
        bloom: encoded.context.bloom.as_bytes().to_vec(),
        stats: encoded.stats,
    })
}

/// Compiles `entries` and writes all four artifacts under `config.output.base_path`.
pub fn compile_to_disk<I>(entries: I, config: &LexitrieConfig) -> Result<CompileStats, LexitrieError>
where
    I: IntoIterator<Item = Entry>,
{
    // Fail on a missing output path before doing any work.
    let writer = ArtifactWriter::from_config(config)?;
    let compiled = compile_entries(entries, config)?;
    writer.write_all(&compiled)?;
    Ok(compiled.stats)
}

/// Reads a plain-text word list from `path` and compiles it to disk.
pub fn compile_file(path: &Path, config: &LexitrieConfig) -> Result<CompileStats, LexitrieError> {
    let entries = read_entries(BufReader::new(File::open(path)?))?;
    log::info!("read {} entries from {}", entries.len(), path.display());
    compile_to_disk(entries, config)
}
