// In: src/pipeline/encoder.rs

//! The fixed-point bit-packer for the prefix trie.
//!
//! Each node is written as a header of `(edge char, child offset)` varint
//! pairs, followed by its Huffman-coded suffixes (each ended by `EndOfWord`
//! and a raw frequency byte), an `EndOfPrefix` code and zero padding to the
//! next byte. Child subtrees follow in the same order as the header.
//!
//! A child offset is the byte distance from the parent's header start to the
//! child's header start. It is only known after the subtrees before it have
//! been written, and its own varint width feeds back into every later
//! position. The encoder therefore writes the whole trie repeatedly: each pass
//! uses the offsets measured by the previous pass, and the run ends when a
//! pass measures exactly what it assumed.
//!
//! Offsets start at zero and can only grow from pass to pass, and the varint
//! width never shrinks as a value grows. Each pass that changes the layout
//! pushes at least one more offset from the one-byte to the three-byte form,
//! so a trie with `E` edges converges in at most `E + 2` passes.

use crate::config::FrequencyOverflowPolicy;
use crate::error::LexitrieError;
use crate::kernels::bitstream::BitWriter;
use crate::kernels::huffman::CodeTable;
use crate::kernels::varint;
use crate::pipeline::trie::{NodeId, Trie, ROOT};
use crate::types::Symbol;

//==================================================================================
// 1. Public Types
//==================================================================================

/// Result of one full emission pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    pub bytes: Vec<u8>,
    /// Number of child offsets whose measured value differed from the assumed one.
    pub fixups: usize,
}

/// The converged trie section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTrie {
    pub bytes: Vec<u8>,
    /// Passes it took to reach the fixed point, the final one included.
    pub passes: usize,
}

/// Default safety bound on encoding passes for a trie.
pub fn default_pass_bound(trie: &Trie) -> usize {
    trie.edge_count() + 2
}

//==================================================================================
// 2. The Encoder
//==================================================================================

/// Owns the offset table carried between passes over one trie.
pub struct TrieEncoder<'a> {
    trie: &'a Trie,
    codes: &'a CodeTable,
    overflow: FrequencyOverflowPolicy,
    /// Offset of each node from its parent's header start, as the next pass
    /// will assume it. The root's entry is unused.
    offsets: Vec<u64>,
}

impl<'a> TrieEncoder<'a> {
    pub fn new(trie: &'a Trie, codes: &'a CodeTable, overflow: FrequencyOverflowPolicy) -> Self {
        Self {
            trie,
            codes,
            overflow,
            offsets: vec![0; trie.node_count()],
        }
    }

    /// The offsets the next pass will assume.
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Writes the whole trie once using the current offsets, then replaces
    /// them with the measured ones.
    pub fn run_pass(&mut self) -> Result<PassOutcome, LexitrieError> {
        let mut pass = Pass {
            trie: self.trie,
            codes: self.codes,
            overflow: self.overflow,
            assumed: &self.offsets,
            measured: vec![0; self.trie.node_count()],
            writer: BitWriter::new(),
            fixups: 0,
        };
        let mut path = String::new();
        pass.emit_node(ROOT, &mut path)?;

        let Pass {
            measured,
            writer,
            fixups,
            ..
        } = pass;
        self.offsets = measured;
        Ok(PassOutcome {
            bytes: writer.into_bytes(),
            fixups,
        })
    }

    /// Repeats passes until one needs no fixups, or fails once `max_passes`
    /// passes have run without converging.
    pub fn encode(mut self, max_passes: usize) -> Result<EncodedTrie, LexitrieError> {
        let mut last_fixups = 0;
        for pass in 1..=max_passes {
            let outcome = self.run_pass()?;
            log::debug!(
                "trie pass {}: {} bytes, {} fixups",
                pass,
                outcome.bytes.len(),
                outcome.fixups
            );
            if outcome.fixups == 0 {
                return Ok(EncodedTrie {
                    bytes: outcome.bytes,
                    passes: pass,
                });
            }
            last_fixups = outcome.fixups;
        }
        Err(LexitrieError::FixupDivergence {
            passes: max_passes,
            fixups: last_fixups,
        })
    }
}

//==================================================================================
// 3. One Emission Pass
//==================================================================================

struct Pass<'p> {
    trie: &'p Trie,
    codes: &'p CodeTable,
    overflow: FrequencyOverflowPolicy,
    assumed: &'p [u64],
    measured: Vec<u64>,
    writer: BitWriter,
    fixups: usize,
}

impl Pass<'_> {
    /// `path` holds the prefix spelled by the edges down to `id`.
    fn emit_node(&mut self, id: NodeId, path: &mut String) -> Result<(), LexitrieError> {
        let trie = self.trie;
        let codes = self.codes;
        let node = trie.node(id);

        if !self.writer.is_aligned() {
            return Err(LexitrieError::InternalError(format!(
                "node '{}' would start mid-byte",
                path
            )));
        }
        let start = self.writer.byte_len();

        for (&ch, &child) in &node.children {
            varint::encode_one(ch as u32, &mut self.writer)?;
            varint::encode_one(self.assumed[child], &mut self.writer)?;
        }

        if let Some(leaf) = &node.leaf {
            for (suffix, &frequency) in leaf {
                for ch in suffix.chars() {
                    self.writer.write_code(codes.require(&Symbol::Char(ch))?);
                }
                self.writer.write_code(codes.require(&Symbol::EndOfWord)?);
                let byte = self.overflow.apply(path, suffix, frequency)?;
                self.writer.write_byte(byte);
            }
        }

        self.writer.write_code(codes.require(&Symbol::EndOfPrefix)?);
        self.writer.pad_to_byte();

        for (&ch, &child) in &node.children {
            let actual = (self.writer.byte_len() - start) as u64;
            if actual != self.assumed[child] {
                self.fixups += 1;
            }
            self.measured[child] = actual;

            path.push(ch);
            self.emit_node(child, path)?;
            path.pop();
        }
        Ok(())
    }
}
