// In: src/config.rs

//! Configuration for the intcodec kernels.
//!
//! `CodecConfig` is created once at the application boundary (typically from a
//! JSON document) and passed by reference to the calls that accept it. Every field
//! has a default, so an empty JSON object is a valid configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default cap on elements reserved up front when decoding a compact sequence.
pub const DEFAULT_PREALLOCATE_LIMIT: usize = 4096;

/// Tuning knobs for decoding and logging.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Upper bound on the number of elements reserved before a compact sequence
    /// is decoded. The element count on the wire is untrusted, so the output
    /// vector is grown by at most this much ahead of the actual data.
    #[serde(default = "default_preallocate_limit")]
    pub preallocate_limit: usize,

    /// Level name (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`, `"off"`)
    /// used by `init_logging_from`.
    #[serde(default)]
    pub log_level: Option<String>,

    /// If set, log output is appended to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            preallocate_limit: default_preallocate_limit(),
            log_level: None,
            log_file: None,
        }
    }
}

impl CodecConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialises the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Helper for `serde` to provide a default for `preallocate_limit`.
fn default_preallocate_limit() -> usize {
    DEFAULT_PREALLOCATE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.preallocate_limit, DEFAULT_PREALLOCATE_LIMIT);
    }

    #[test]
    fn test_json_overrides() {
        let config = CodecConfig::from_json(
            r#"{ "preallocate_limit": 16, "log_level": "debug", "log_file": "/tmp/intcodec.log" }"#,
        )
        .unwrap();
        assert_eq!(config.preallocate_limit, 16);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/intcodec.log")));

        let again = CodecConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn test_bad_json_is_rejected() {
        assert!(CodecConfig::from_json(r#"{ "preallocate_limit": "lots" }"#).is_err());
    }
}
