// In: src/pipeline/indexer.rs

//! The single indexing pass over the input entries.
//!
//! For every retained entry it counts the word's characters (plus one
//! `EndOfWord`), splits the word into a prefix of at most `PREFIX_LIMIT`
//! characters and the remaining suffix, marks the prefix in the Bloom filter,
//! counts one `EndOfPrefix` per distinct prefix, and sums the entry frequency
//! into the prefix index.

use crate::bridge::format::PREFIX_LIMIT;
use crate::config::LexitrieConfig;
use crate::error::LexitrieError;
use crate::pipeline::context::PipelineContext;
use crate::types::{Entry, Symbol};

//==================================================================================
// 1. Word Helpers
//==================================================================================

/// Splits a word after its first `min(PREFIX_LIMIT, len)` characters.
pub fn split_word(word: &str) -> (&str, &str) {
    let cut = word
        .char_indices()
        .nth(PREFIX_LIMIT)
        .map_or(word.len(), |(idx, _)| idx);
    word.split_at(cut)
}

/// Removes a trailing possessive `'s` (ASCII apostrophe or U+2019).
pub fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .unwrap_or(word)
}

//==================================================================================
// 2. The Builder
//==================================================================================

/// Accumulates a `PipelineContext` one entry at a time.
pub struct IndexBuilder<'a> {
    config: &'a LexitrieConfig,
    context: PipelineContext,
    seen: usize,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(config: &'a LexitrieConfig) -> Self {
        Self {
            config,
            context: PipelineContext::new(),
            seen: 0,
        }
    }

    /// Indexes one entry. Returns `Ok(false)` if the entry was dropped.
    pub fn add(&mut self, entry: Entry) -> Result<bool, LexitrieError> {
        self.seen += 1;
        if entry.word.is_empty() {
            return Err(LexitrieError::InputError(format!(
                "entry {} has an empty word",
                self.seen
            )));
        }
        if entry.frequency <= self.config.min_frequency {
            self.context.dropped_entries += 1;
            return Ok(false);
        }

        let word = if self.config.strip_trailing_possessive {
            strip_possessive(&entry.word)
        } else {
            entry.word.as_str()
        };
        if word.is_empty() {
            self.context.dropped_entries += 1;
            return Ok(false);
        }
        for ch in word.chars() {
            Symbol::validate_char(ch).map_err(|e| {
                LexitrieError::InputError(format!("entry {} ('{}'): {}", self.seen, entry.word, e))
            })?;
        }

        let ctx = &mut self.context;
        for ch in word.chars() {
            ctx.symbols.increment(Symbol::Char(ch));
        }
        ctx.symbols.increment(Symbol::EndOfWord);

        let (prefix, suffix) = split_word(word);
        ctx.bloom.set(prefix);
        if !ctx.index.contains_key(prefix) {
            ctx.symbols.increment(Symbol::EndOfPrefix);
        }
        let slot = ctx
            .index
            .entry(prefix.to_string())
            .or_default()
            .entry(suffix.to_string())
            .or_insert(0);
        *slot = slot.saturating_add(entry.frequency);

        let indexed_word = word.to_string();
        ctx.vocabulary.push(Entry {
            word: indexed_word,
            ..entry
        });
        Ok(true)
    }

    pub fn finish(self) -> PipelineContext {
        let ctx = self.context;
        log::info!(
            "index entries: {} ({} words retained, {} dropped)",
            ctx.index.len(),
            ctx.vocabulary.len(),
            ctx.dropped_entries
        );
        ctx
    }
}

/// Runs the indexing pass over a whole entry sequence.
pub fn build_context<I>(entries: I, config: &LexitrieConfig) -> Result<PipelineContext, LexitrieError>
where
    I: IntoIterator<Item = Entry>,
{
    let mut builder = IndexBuilder::new(config);
    for entry in entries {
        builder.add(entry)?;
    }
    Ok(builder.finish())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entries(raw: &[(&str, u64, &str)]) -> Vec<Entry> {
        raw.iter().map(|&t| Entry::from(t)).collect()
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("cat"), ("cat", ""));
        assert_eq!(split_word("abcdef"), ("abcdef", ""));
        assert_eq!(split_word("abcdefgh"), ("abcdef", "gh"));
        // Characters, not bytes.
        assert_eq!(split_word("éééééééé"), ("éééééé", "éé"));
    }

    #[test]
    fn test_strip_possessive() {
        assert_eq!(strip_possessive("john's"), "john");
        assert_eq!(strip_possessive("john\u{2019}s"), "john");
        assert_eq!(strip_possessive("johns"), "johns");
        assert_eq!(strip_possessive("'s"), "");
    }

    #[test]
    fn test_frequency_threshold_drops_entries() {
        let config = LexitrieConfig {
            min_frequency: 1,
            ..Default::default()
        };
        let ctx = build_context(
            entries(&[("cat", 5, ""), ("cats", 2, ""), ("car", 1, "")]),
            &config,
        )
        .unwrap();

        let mut expected = BTreeMap::new();
        expected.insert(
            "cat".to_string(),
            BTreeMap::from([("".to_string(), 5), ("s".to_string(), 2)]),
        );
        assert_eq!(ctx.index, expected);
        assert_eq!(ctx.dropped_entries, 1);
        assert_eq!(ctx.vocabulary.len(), 2);
        assert!(ctx.bloom.query("cat"));
    }

    #[test]
    fn test_symbol_counts() {
        let ctx = build_context(
            entries(&[("ab", 3, ""), ("ac", 2, "")]),
            &LexitrieConfig::default(),
        )
        .unwrap();
        assert_eq!(ctx.symbols.get(&Symbol::Char('a')), 2);
        assert_eq!(ctx.symbols.get(&Symbol::Char('b')), 1);
        assert_eq!(ctx.symbols.get(&Symbol::Char('c')), 1);
        assert_eq!(ctx.symbols.get(&Symbol::EndOfWord), 2);
        assert_eq!(ctx.symbols.get(&Symbol::EndOfPrefix), 2);
        assert_eq!(ctx.symbols.len(), 5);
    }

    #[test]
    fn test_repeated_pairs_sum_frequencies() {
        let ctx = build_context(
            entries(&[
                ("running", 4, ""),
                ("runninG", 1, ""),
                ("running", 6, "x"),
                ("runnin", 2, ""),
            ]),
            &LexitrieConfig::default(),
        )
        .unwrap();
        let suffixes = &ctx.index["runnin"];
        assert_eq!(suffixes["g"], 10);
        assert_eq!(suffixes["G"], 1);
        assert_eq!(suffixes[""], 2);
        // One EndOfPrefix for the single distinct prefix.
        assert_eq!(ctx.symbols.get(&Symbol::EndOfPrefix), 1);
        assert_eq!(ctx.symbols.get(&Symbol::EndOfWord), 4);
    }

    #[test]
    fn test_possessive_stripping_merges_into_base_word() {
        let config = LexitrieConfig {
            strip_trailing_possessive: true,
            ..Default::default()
        };
        let ctx = build_context(
            entries(&[("painter", 3, ""), ("painter's", 2, ""), ("'s", 9, "")]),
            &config,
        )
        .unwrap();
        assert_eq!(ctx.index["painte"]["r"], 5);
        assert_eq!(ctx.vocabulary[1].word, "painter");
        assert_eq!(ctx.dropped_entries, 1);
        assert_eq!(ctx.symbols.get(&Symbol::Char('\'')), 0);
    }

    #[test]
    fn test_invalid_entries_are_input_errors() {
        let config = LexitrieConfig::default();
        for bad in [("", 3, ""), ("a*b", 3, ""), ("c#", 3, "")] {
            let result = build_context(entries(&[bad]), &config);
            assert!(
                matches!(result, Err(LexitrieError::InputError(_))),
                "expected InputError for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_dropped_entry_not_validated() {
        // Reserved characters only matter for words that reach the index.
        let config = LexitrieConfig {
            min_frequency: 5,
            ..Default::default()
        };
        let ctx = build_context(entries(&[("a*b", 1, "")]), &config).unwrap();
        assert!(ctx.index.is_empty());
        assert_eq!(ctx.dropped_entries, 1);
    }
}
