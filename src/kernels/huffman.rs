//! This module contains the Huffman coder for the dictionary alphabet.
//!
//! The alphabet is every character seen in a retained word plus the
//! `EndOfWord` and `EndOfPrefix` sentinels. The coder builds a prefix-free
//! code table from their occurrence counts; the trie encoder uses it to pack
//! suffixes, and the table itself is serialized at the head of the dictionary
//! blob so a reader can rebuild the decoding tree.
//!
//! Construction is fully deterministic: leaves enter the priority queue in
//! ascending codepoint order, ties on frequency are broken by insertion order,
//! and the first node removed in each merge becomes the `0` branch.

use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::bridge::format::MAX_CODE_LENGTH;
use crate::error::LexitrieError;
use crate::kernels::bitstream::BitWriter;
use crate::kernels::varint;
use crate::types::Symbol;

//==================================================================================
// 1. Symbol Frequency Table
//==================================================================================

/// Occurrence counts per symbol, iterated in ascending codepoint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolFrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl SymbolFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, symbol: Symbol) {
        self.add(symbol, 1);
    }

    /// Adds `count` occurrences. A zero count still records the symbol as present.
    pub fn add(&mut self, symbol: Symbol, count: u64) {
        let slot = self.counts.entry(symbol).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    pub fn get(&self, symbol: &Symbol) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.counts.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &u64)> {
        self.counts.iter()
    }
}

//==================================================================================
// 2. Code Table
//==================================================================================

pub type Code = BitVec<u8, Msb0>;

/// A prefix-free mapping from symbol to bit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn get(&self, symbol: &Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    /// Like `get`, for symbols the caller knows were part of the alphabet.
    pub fn require(&self, symbol: &Symbol) -> Result<&BitSlice<u8, Msb0>, LexitrieError> {
        self.get(symbol).ok_or_else(|| {
            LexitrieError::InternalError(format!("no Huffman code for symbol {}", symbol))
        })
    }

    /// The code for `symbol` rendered as a string of `0`/`1`.
    pub fn code_string(&self, symbol: &Symbol) -> Option<String> {
        self.get(symbol)
            .map(|code| code.iter().map(|bit| if *bit { '1' } else { '0' }).collect())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice<u8, Msb0>)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_bitslice()))
    }

    /// True if no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_bitslice()))
        })
    }

    /// Sum of `count * code length` over the table.
    pub fn weighted_length(&self, table: &SymbolFrequencyTable) -> u64 {
        self.codes
            .iter()
            .map(|(symbol, code)| table.get(symbol) * code.len() as u64)
            .sum()
    }

    /// Writes the code-table section: the symbol count, then per symbol its
    /// codepoint and one-byte code length, then all codes back to back, padded
    /// to a byte boundary.
    pub fn serialize(&self, writer: &mut BitWriter) -> Result<(), LexitrieError> {
        varint::encode_one(self.codes.len() as u64, writer)?;
        for (symbol, code) in &self.codes {
            varint::encode_one(symbol.codepoint(), writer)?;
            let length = u8::try_from(code.len()).map_err(|_| LexitrieError::CodeTooLong {
                symbol: symbol.to_string(),
                length: code.len(),
            })?;
            writer.write_byte(length);
        }
        for code in self.codes.values() {
            writer.write_code(code);
        }
        writer.pad_to_byte();
        Ok(())
    }
}

//==================================================================================
// 3. Construction
//==================================================================================

enum HuffmanNode {
    Leaf(Symbol),
    Internal { zero: usize, one: usize },
}

/// Builds the code table for every symbol with a positive count, plus any
/// sentinel present in the table regardless of its count.
pub fn build(table: &SymbolFrequencyTable) -> Result<CodeTable, LexitrieError> {
    if !table.iter().any(|(_, &count)| count > 0) {
        return Err(LexitrieError::EmptyAlphabet);
    }

    // Nodes live in an arena; the heap orders (frequency, arena index), so
    // equal frequencies pop in insertion order.
    let mut arena: Vec<HuffmanNode> = Vec::with_capacity(table.len() * 2);
    let mut heap = BinaryHeap::with_capacity(table.len());

    for (symbol, &count) in table.iter() {
        let is_sentinel = !matches!(symbol, Symbol::Char(_));
        if count > 0 || is_sentinel {
            heap.push(Reverse((count, arena.len())));
            arena.push(HuffmanNode::Leaf(*symbol));
        }
    }

    // A lone symbol still needs a one-bit code.
    if heap.len() == 1 {
        let mut codes = BTreeMap::new();
        if let Some(Reverse((_, id))) = heap.pop() {
            if let HuffmanNode::Leaf(symbol) = arena[id] {
                codes.insert(symbol, bitvec![u8, Msb0; 0]);
            }
        }
        return Ok(CodeTable { codes });
    }

    while heap.len() > 1 {
        let (Some(Reverse((f0, zero))), Some(Reverse((f1, one)))) = (heap.pop(), heap.pop())
        else {
            return Err(LexitrieError::InternalError(
                "Huffman heap drained during merge".to_string(),
            ));
        };
        heap.push(Reverse((f0.saturating_add(f1), arena.len())));
        arena.push(HuffmanNode::Internal { zero, one });
    }

    let Some(Reverse((_, root))) = heap.pop() else {
        return Err(LexitrieError::InternalError(
            "Huffman heap empty after merging".to_string(),
        ));
    };

    let mut codes = BTreeMap::new();
    let mut stack: Vec<(usize, Code)> = vec![(root, Code::new())];
    while let Some((id, prefix)) = stack.pop() {
        match &arena[id] {
            HuffmanNode::Leaf(symbol) => {
                if prefix.len() > MAX_CODE_LENGTH {
                    return Err(LexitrieError::CodeTooLong {
                        symbol: symbol.to_string(),
                        length: prefix.len(),
                    });
                }
                codes.insert(*symbol, prefix);
            }
            HuffmanNode::Internal { zero, one } => {
                let mut one_code = prefix.clone();
                one_code.push(true);
                stack.push((*one, one_code));
                let mut zero_code = prefix;
                zero_code.push(false);
                stack.push((*zero, zero_code));
            }
        }
    }

    Ok(CodeTable { codes })
}
