use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::unescape;
use super::scan::{ScanError, Scanner, TokenKind};
use crate::error::{context_window, MigrateError, CONTEXT_RADIUS};
use crate::icons::IconTable;

/// Bare object key after `{` or `,`.
static BARE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z_$][\w$]*)(\s*:)").unwrap());

/// Comma directly before a closing brace or bracket.
static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").unwrap());

/// Stand-in for the n-th string literal while code passes run.
static STRING_SLOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##""#(\d+)""##).unwrap());

/// Rewrites the literal dialect into strict JSON.
///
/// String literals in any quoting style are decoded and re-encoded as JSON
/// strings; comments are dropped. The code between literals then goes through
/// three passes: icon identifiers become sentinel strings, bare keys are
/// quoted, and trailing commas are removed.
pub struct DialectNormalizer<'a> {
    icons: &'a IconTable,
}

impl<'a> DialectNormalizer<'a> {
    pub fn new(icons: &'a IconTable) -> Self {
        Self { icons }
    }

    pub fn normalize(&self, literal: &str) -> Result<String, MigrateError> {
        let mut code = String::with_capacity(literal.len());
        let mut strings: Vec<String> = Vec::new();

        for token in Scanner::new(literal) {
            let token = token.map_err(|e| lex_error(literal, e))?;
            match token.kind {
                TokenKind::Code => code.push_str(token.text),
                TokenKind::LineComment | TokenKind::BlockComment => {}
                TokenKind::Str(quote) => {
                    let offset = token.span.start;
                    let value = unescape(token.text, quote)
                        .map_err(|reason| lex_error(literal, ScanError { offset, reason }))?;
                    if self.icons.is_sentinel(&value) {
                        return Err(MigrateError::SentinelCollision { value, offset });
                    }
                    code.push_str(&format!("\"#{}\"", strings.len()));
                    strings.push(serde_json::to_string(&value).map_err(MigrateError::Encode)?);
                }
            }
        }

        if let Some(key) = BARE_KEY_RE
            .captures_iter(&code)
            .map(|caps| caps[2].to_string())
            .find(|key| self.icons.is_sentinel(key))
        {
            let offset = literal.find(&key).unwrap_or(0);
            return Err(MigrateError::SentinelCollision { value: key, offset });
        }

        let code = self.icons.quote_identifiers(&code);
        let code = BARE_KEY_RE.replace_all(&code, r#"${1}"${2}"${3}"#);
        let code = TRAILING_COMMA_RE.replace_all(&code, "$1");
        let json = STRING_SLOT_RE.replace_all(&code, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| strings.get(i))
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        });

        Ok(json.into_owned())
    }
}

fn lex_error(text: &str, e: ScanError) -> MigrateError {
    MigrateError::Lex {
        reason: e.reason,
        offset: e.offset,
        context: context_window(text, e.offset, CONTEXT_RADIUS).to_string(),
    }
}
