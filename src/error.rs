//! Error taxonomy for the highlighter.
//!
//! The scanner is total and never reports failure. Only two things can go
//! wrong above it: the caller hands in an invalid configuration, or the
//! annotator receives a token list that does not partition its source.

use syntaxhighlight_scanner::{Kind, PartitionError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tokens are not ordered, contiguous and covering the source. Tokens
    /// produced by the scanner never trigger this.
    #[error("invalid token stream: {0}")]
    InvalidTokenStream(#[from] PartitionError),
}

/// Caller-supplied configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown output format '{0}', expected one of: tokens, html, ansi, raw")]
    UnknownFormat(String),

    #[error("unknown token kind '{0}' in styleOverrides")]
    UnknownKind(String),

    #[error("invalid class prefix '{0}': must not contain whitespace, quotes, '<', '>' or '&'")]
    InvalidClassPrefix(String),

    #[error("invalid ANSI style '{style}' for {kind}: expected a color name or SGR codes")]
    InvalidAnsiStyle { kind: Kind, style: String },

    #[error("invalid configuration JSON: {0}")]
    Parse(String),
}
