//! This file is the root of the `lexitrie` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small surface most callers need: the configuration, the
//!     error type, the input record and the stateless compile functions.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod observability;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod test_support;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{compile_entries, compile_file, compile_to_disk, ArtifactWriter, CompiledDictionary};
pub use config::{FrequencyOverflowPolicy, LexitrieConfig, OutputConfig};
pub use error::LexitrieError;
pub use observability::enable_verbose_logging;
pub use pipeline::CompileStats;
pub use types::{Entry, Symbol};
