//! Error types for the security crate.

use thiserror::Error;

/// Errors from loading the rule-table configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
