// In: src/bridge/writer.rs

//! Writes the artifacts of one compilation run next to a common base path.
//!
//! Every artifact is first written to a temporary sibling and only renamed into
//! place once all of them were written, so a failed run never leaves a mix of
//! old and new files behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bridge::format::{
    BLOOM_EXTENSION, DICT_EXTENSION, INDEX_EXTENSION, VOCABULARY_EXTENSION,
};
use crate::bridge::stateless_api::CompiledDictionary;
use crate::config::LexitrieConfig;
use crate::error::LexitrieError;

const TEMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    base: PathBuf,
}

impl ArtifactWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &LexitrieConfig) -> Result<Self, LexitrieError> {
        Ok(Self::new(config.require_output_base()?.clone()))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>.<extension>`. The extension is appended, never substituted, so a
    /// base such as `en_us.v2` keeps its dot.
    pub fn path_for(&self, extension: &str) -> PathBuf {
        let mut name = self.base.clone().into_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }

    /// Writes the blob, both dumps and the Bloom filter. Returns the final paths
    /// in the order `.dict`, `.vocab`, `.i`, `.bf`.
    pub fn write_all(&self, compiled: &CompiledDictionary) -> Result<Vec<PathBuf>, LexitrieError> {
        let artifacts: [(&str, &[u8]); 4] = [
            (DICT_EXTENSION, &compiled.blob),
            (VOCABULARY_EXTENSION, compiled.vocabulary_dump.as_bytes()),
            (INDEX_EXTENSION, compiled.index_dump.as_bytes()),
            (BLOOM_EXTENSION, &compiled.bloom),
        ];

        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(artifacts.len());
        for (extension, bytes) in artifacts {
            let target = self.path_for(extension);
            let temp = self.path_for(&format!("{}.{}", extension, TEMP_SUFFIX));
            if let Err(e) = write_file(&temp, bytes) {
                let _ = fs::remove_file(&temp);
                cleanup(&staged);
                return Err(e);
            }
            staged.push((temp, target));
        }

        for (idx, (temp, target)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(temp, target) {
                cleanup(&staged[idx..]);
                return Err(e.into());
            }
            log::info!("wrote {}", target.display());
        }

        Ok(staged.into_iter().map(|(_, target)| target).collect())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), LexitrieError> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

fn cleanup(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        let _ = fs::remove_file(temp);
    }
}
