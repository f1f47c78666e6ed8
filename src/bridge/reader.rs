// In: src/bridge/reader.rs

//! Reads entries from the plain-text `"<word> <frequency> [<flags>]"` format,
//! the same format the vocabulary dump produces.

use std::io::BufRead;

use crate::error::LexitrieError;
use crate::types::Entry;

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Entry>, LexitrieError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut parts = line.splitn(3, ' ');
    let word = parts.next().unwrap_or_default();
    if word.is_empty() {
        return Err(LexitrieError::InputError(format!(
            "line {}: missing word",
            line_no
        )));
    }
    let frequency = parts
        .next()
        .ok_or_else(|| LexitrieError::InputError(format!("line {}: missing frequency", line_no)))?
        .trim()
        .parse::<u64>()
        .map_err(|e| LexitrieError::InputError(format!("line {}: bad frequency: {}", line_no, e)))?;
    let flags = parts.next().map(str::trim).filter(|f| !f.is_empty());

    Ok(Some(Entry::new(word, frequency, flags)))
}

/// Reads every entry from `reader`, failing on the first malformed line.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<Entry>, LexitrieError> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(entry) = parse_line(&line?, idx + 1)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}
