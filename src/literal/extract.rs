use std::ops::Range;

use regex::Regex;

use super::scan::matching_bracket;
use crate::error::{context_window, MigrateError, CONTEXT_RADIUS};

/// Locates `export const <name>: <Type>[] = [ ... ];` in a source file.
#[derive(Debug, Clone)]
pub struct ExportPattern {
    export_name: String,
    header: Regex,
}

impl ExportPattern {
    pub fn new(export_name: &str, type_name: &str) -> Result<Self, MigrateError> {
        let source = format!(
            r"export\s+const\s+{}\s*:\s*{}\s*\[\s*\]\s*=\s*\[",
            regex::escape(export_name),
            regex::escape(type_name),
        );
        let header = Regex::new(&source).map_err(|e| MigrateError::Config(e.to_string()))?;
        Ok(Self {
            export_name: export_name.to_string(),
            header,
        })
    }

    /// Byte span of the array literal, from its `[` through the matching `]`.
    ///
    /// The trailing `;` is outside the span and is left in place.
    pub fn locate(&self, text: &str) -> Result<Range<usize>, MigrateError> {
        let header = self
            .header
            .find(text)
            .ok_or_else(|| MigrateError::LiteralNotFound {
                export_name: self.export_name.clone(),
            })?;
        let open = header.end() - 1;

        let close = matching_bracket(text, open)
            .map_err(|e| MigrateError::Lex {
                reason: e.reason,
                offset: e.offset,
                context: context_window(text, e.offset, CONTEXT_RADIUS).to_string(),
            })?
            .ok_or_else(|| MigrateError::UnbalancedLiteral {
                export_name: self.export_name.clone(),
                offset: open,
            })?;

        if !text[close + 1..].trim_start().starts_with(';') {
            tracing::debug!(
                export = %self.export_name,
                "array literal is not followed by a semicolon"
            );
        }

        Ok(open..close + 1)
    }
}
