// In: src/observability.rs

//! Logging setup for embedding applications and command-line wrappers.
//!
//! The library itself only emits `log` records; nothing is printed unless a
//! logger is installed, for example with `enable_verbose_logging`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::LexitrieError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend printing `[LEVEL] message` lines to stderr,
/// or appending them to `log_file` when one is given.
///
/// Only the first call has any effect. A log file that cannot be opened is
/// reported as an I/O error and leaves the logger uninstalled.
pub fn enable_verbose_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LexitrieError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
