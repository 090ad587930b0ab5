//! Error types shared across distrib crates.

use thiserror::Error;

/// A parser-input line that violates the `NAME VALUE` contract.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("badly formatted line {line}: {content:?} ({reason}); lines must be formatted as 'NAME VALUE'")]
pub struct MalformedRecord {
    /// 1-based line number within the parsed text.
    pub line: usize,
    /// The offending line, without its terminator.
    pub content: String,
    pub reason: &'static str,
}

/// A size or capacity outside the non-negative finite range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {what} {name:?}: {value} is not a finite non-negative number")]
pub struct InvalidEntity {
    /// `"node"` or `"item"`.
    pub what: &'static str,
    pub name: String,
    pub value: f64,
}

/// Errors loading a `distrib.toml` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}
