//! This module provides logging hooks for the codec kernels.
//!
//! The kernels themselves only talk to the `log` facade. Binaries and tests that
//! want to see the output call `init_logging` (or `init_logging_from` with a
//! `CodecConfig`) once; later calls are no-ops.
//!
//! The `log_metric!` macro emits a structured key-value record at debug level.
//! The record is only formatted when debug logging is enabled.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::config::CodecConfig;

/// Logs a structured key-value metric string at debug level.
///
/// # Example
/// ```ignore
/// log_metric!("kernel"="sequence::decode_n", "elements"=&n);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if ::log::log_enabled!(::log::Level::Debug) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            ::log::debug!("INTCODEC_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at `level`, writing to stderr or, when given,
/// appending to `log_file`.
///
/// Only the first call has any effect; later calls return `Ok(())` without
/// touching `log_file`. If the file cannot be opened the logger still falls back
/// to stderr and the open error is returned.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> std::io::Result<()> {
    let mut outcome = Ok(());

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(path) = log_file {
            match OpenOptions::new().append(true).create(true).open(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(err) => outcome = Err(err),
            }
        }

        let _ = builder.try_init();
    });
    outcome
}

/// `init_logging` driven by a `CodecConfig`. An unrecognised or missing level
/// name falls back to `info`.
pub fn init_logging_from(config: &CodecConfig) -> std::io::Result<()> {
    let level = config
        .log_level
        .as_deref()
        .and_then(|name| name.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    init_logging(level, config.log_file.as_deref())
}
