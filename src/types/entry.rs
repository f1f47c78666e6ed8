//! The immutable input record handed over by the word-list parser.

use serde::{Deserialize, Serialize};

/// One `(word, frequency, flags)` triple from the source word list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub frequency: u64,
    /// Opaque flags carried through to the vocabulary dump. Empty when the
    /// source list has none.
    #[serde(default)]
    pub flags: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, frequency: u64, flags: Option<&str>) -> Self {
        Self {
            word: word.into(),
            frequency,
            flags: flags.unwrap_or_default().to_string(),
        }
    }
}

impl From<(&str, u64, &str)> for Entry {
    fn from((word, frequency, flags): (&str, u64, &str)) -> Self {
        Self::new(word, frequency, Some(flags))
    }
}
