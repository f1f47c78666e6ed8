//! The symbol alphabet of the Huffman code: every character that occurs in a
//! retained word plus the `EndOfWord` and `EndOfPrefix` sentinels.

use std::cmp::Ordering;
use std::fmt;

use crate::bridge::format::{END_OF_PREFIX_CHAR, END_OF_WORD_CHAR, MAX_ENCODABLE_CODEPOINT};
use crate::error::LexitrieError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    /// Terminates every Huffman-coded suffix.
    EndOfWord,
    /// Terminates the suffix list of a trie node.
    EndOfPrefix,
}

impl Symbol {
    /// The codepoint written for this symbol in the serialized code table.
    /// Sentinels borrow the codepoints of their reserved characters.
    pub fn codepoint(&self) -> u32 {
        match self {
            Symbol::Char(ch) => *ch as u32,
            Symbol::EndOfWord => END_OF_WORD_CHAR as u32,
            Symbol::EndOfPrefix => END_OF_PREFIX_CHAR as u32,
        }
    }

    /// Checks that a word character can be carried by the encoding: it must not
    /// collide with a sentinel and its codepoint must fit the escaped varint.
    pub fn validate_char(ch: char) -> Result<(), LexitrieError> {
        if ch == END_OF_WORD_CHAR || ch == END_OF_PREFIX_CHAR {
            return Err(LexitrieError::InputError(format!(
                "character '{}' is reserved as a dictionary sentinel",
                ch
            )));
        }
        if ch as u32 > MAX_ENCODABLE_CODEPOINT {
            return Err(LexitrieError::InputError(format!(
                "character U+{:04X} is outside the encodable range (max U+{:04X})",
                ch as u32, MAX_ENCODABLE_CODEPOINT
            )));
        }
        Ok(())
    }
}

// Symbols order by codepoint. Validation keeps word characters off the
// sentinel codepoints, so the order is total over any real alphabet.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.codepoint()
            .cmp(&other.codepoint())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Symbol {
    fn rank(&self) -> u8 {
        match self {
            Symbol::Char(_) => 0,
            Symbol::EndOfWord => 1,
            Symbol::EndOfPrefix => 2,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "'{}'", ch),
            Symbol::EndOfWord => write!(f, "EndOfWord"),
            Symbol::EndOfPrefix => write!(f, "EndOfPrefix"),
        }
    }
}
