// In: src/bridge/dump.rs

//! Plain-text renderings of the vocabulary and the prefix index.
//!
//! These are debugging artifacts for humans; the consumer never reads them.

use std::fmt::Write;

use crate::pipeline::context::PrefixIndex;
use crate::types::Entry;

/// One `"<word> <frequency> <flags>\n"` line per retained entry.
pub fn render_vocabulary(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {} {}", entry.word, entry.frequency, entry.flags);
    }
    out
}

/// `{`, then `"<prefix>": "<suffix>/<freq>:<suffix>/<freq>...",` per prefix, then `}`.
pub fn render_index(index: &PrefixIndex) -> String {
    let mut out = String::from("{\n");
    for (prefix, suffixes) in index {
        let joined = suffixes
            .iter()
            .map(|(suffix, freq)| format!("{}/{}", suffix, freq))
            .collect::<Vec<_>>()
            .join(":");
        let _ = writeln!(out, "\"{}\": \"{}\",", prefix, joined);
    }
    out.push_str("}\n");
    out
}
