//! Test-only reader for the dictionary blob.
//!
//! The crate itself only encodes. These helpers read the bits back so tests can
//! check layouts against what a consumer would see.

use bitvec::prelude::*;
use std::collections::HashMap;

use crate::bridge::format::VARINT_ESCAPE;
use crate::kernels::huffman::CodeTable;
use crate::types::Symbol;

pub(crate) struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    pub(crate) fn bit_pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn byte_pos(&self) -> usize {
        self.pos.div_ceil(8)
    }

    pub(crate) fn seek_byte(&mut self, byte: usize) {
        self.pos = byte * 8;
    }

    pub(crate) fn align(&mut self) {
        self.pos = self.pos.div_ceil(8) * 8;
    }

    pub(crate) fn read_bit(&mut self) -> bool {
        let bit = self.bits[self.pos];
        self.pos += 1;
        bit
    }

    pub(crate) fn read_bits(&mut self, width: usize) -> u64 {
        (0..width).fold(0u64, |acc, _| (acc << 1) | u64::from(self.read_bit()))
    }

    pub(crate) fn read_byte(&mut self) -> u8 {
        self.read_bits(8) as u8
    }

    /// Reads an escaped varint. A leading 0xFF is always treated as the escape.
    pub(crate) fn read_varint(&mut self) -> u64 {
        let first = self.read_byte();
        if first == VARINT_ESCAPE {
            self.read_bits(16)
        } else {
            u64::from(first)
        }
    }
}

fn decoding_map(codes: &CodeTable) -> HashMap<Vec<bool>, Symbol> {
    codes
        .iter()
        .map(|(symbol, code)| (code.iter().by_vals().collect(), *symbol))
        .collect()
}

fn read_symbol(reader: &mut BitReader<'_>, map: &HashMap<Vec<bool>, Symbol>) -> Symbol {
    let mut acc = Vec::new();
    loop {
        acc.push(reader.read_bit());
        if let Some(symbol) = map.get(&acc) {
            return *symbol;
        }
        assert!(acc.len() <= 255, "no code matches {:?}", acc);
    }
}

/// Decodes symbols until the reader reaches `end_bit`.
pub(crate) fn decode_symbols(
    reader: &mut BitReader<'_>,
    codes: &CodeTable,
    end_bit: usize,
) -> Vec<Symbol> {
    let map = decoding_map(codes);
    let mut out = Vec::new();
    while reader.bit_pos() < end_bit {
        out.push(read_symbol(reader, &map));
    }
    out
}

/// A code-table section as read back from a blob.
pub(crate) struct ParsedCodeTable {
    pub(crate) entries: Vec<(u32, String)>,
    pub(crate) end: usize,
}

pub(crate) fn read_code_table(bytes: &[u8]) -> ParsedCodeTable {
    let mut reader = BitReader::new(bytes);
    let count = reader.read_varint() as usize;
    let header: Vec<(u32, usize)> = (0..count)
        .map(|_| {
            let codepoint = reader.read_varint() as u32;
            let len = reader.read_byte() as usize;
            (codepoint, len)
        })
        .collect();
    let entries = header
        .into_iter()
        .map(|(codepoint, len)| {
            let code = (0..len)
                .map(|_| if reader.read_bit() { '1' } else { '0' })
                .collect();
            (codepoint, code)
        })
        .collect();
    reader.align();
    ParsedCodeTable {
        entries,
        end: reader.byte_pos(),
    }
}

/// One trie node as read back from the trie section.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedNode {
    pub(crate) edges: Vec<(char, u64)>,
    pub(crate) suffixes: Vec<(String, u8)>,
    /// Byte position just past the node's padded leaf section.
    pub(crate) end: usize,
}

/// Reads the node whose header starts at byte `pos`. The format does not store
/// the number of edges, so the caller supplies it.
pub(crate) fn read_node(
    trie_bytes: &[u8],
    pos: usize,
    edge_count: usize,
    codes: &CodeTable,
) -> ParsedNode {
    let map = decoding_map(codes);
    let mut reader = BitReader::new(trie_bytes);
    reader.seek_byte(pos);

    let edges = (0..edge_count)
        .map(|_| {
            let ch = char::from_u32(reader.read_varint() as u32).expect("edge char");
            let offset = reader.read_varint();
            (ch, offset)
        })
        .collect();

    let mut suffixes = Vec::new();
    let mut current = String::new();
    let mut in_suffix = false;
    loop {
        match read_symbol(&mut reader, &map) {
            Symbol::EndOfPrefix if !in_suffix => break,
            Symbol::EndOfWord => {
                let frequency = reader.read_byte();
                suffixes.push((std::mem::take(&mut current), frequency));
                in_suffix = false;
            }
            Symbol::Char(ch) => {
                current.push(ch);
                in_suffix = true;
            }
            other => panic!("unexpected {} inside a suffix", other),
        }
    }
    reader.align();

    ParsedNode {
        edges,
        suffixes,
        end: reader.byte_pos(),
    }
}
