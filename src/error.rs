use std::path::PathBuf;

use thiserror::Error;

/// Bytes of normalized text shown on each side of a failure offset.
pub const CONTEXT_RADIUS: usize = 50;

/// Migration errors.
///
/// Every variant is raised before the target file is written, so the file is
/// left untouched on failure.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error: Could not find {export_name} array in the file.")]
    LiteralNotFound { export_name: String },

    #[error("Error: {export_name} array opened at byte {offset} is never closed.")]
    UnbalancedLiteral { export_name: String, offset: usize },

    #[error("Literal syntax error: {reason} (byte {offset})\nProblematic string part: {context}")]
    Lex {
        reason: &'static str,
        offset: usize,
        context: String,
    },

    #[error("JSON Decode Error: {source}\nProblematic string part: {context}")]
    Decode {
        source: serde_json::Error,
        offset: usize,
        context: String,
    },

    #[error("String literal {value:?} at byte {offset} collides with an icon sentinel")]
    SentinelCollision { value: String, offset: usize },

    #[error("Failed to encode topics: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MigrateError {
    /// Move an offset measured inside the array literal to a file offset.
    pub(crate) fn shifted(self, base: usize) -> Self {
        match self {
            Self::Lex {
                reason,
                offset,
                context,
            } => Self::Lex {
                reason,
                offset: offset + base,
                context,
            },
            Self::SentinelCollision { value, offset } => Self::SentinelCollision {
                value,
                offset: offset + base,
            },
            other => other,
        }
    }
}

/// Slice of `text` reaching at most `radius` bytes either side of `offset`,
/// widened to the nearest char boundaries.
pub fn context_window(text: &str, offset: usize, radius: usize) -> &str {
    let mut start = offset.saturating_sub(radius).min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = offset.saturating_add(radius).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}
