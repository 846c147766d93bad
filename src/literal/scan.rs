//! Lexical scan of the TypeScript literal dialect.
//!
//! Splits text into code runs, string literals and comments so that the
//! rewriting passes only ever see code.

use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
    Backtick,
}

impl Quote {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    pub fn delimiter(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Code,
    Str(Quote),
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Range<usize>,
    /// Source text of the token, delimiters included.
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at byte {offset}")]
pub struct ScanError {
    pub offset: usize,
    pub reason: &'static str,
}

/// Iterator over the tokens of `src`. Stops after the first error.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            failed: false,
        }
    }

    fn string_end(&self, quote: Quote) -> Result<usize, ScanError> {
        let delimiter = quote.delimiter();
        let mut chars = self.src[self.pos..].char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == delimiter {
                return Ok(self.pos + i + c.len_utf8());
            }
        }
        Err(ScanError {
            offset: self.pos,
            reason: "unterminated string literal",
        })
    }

    fn code_end(&self) -> usize {
        let rest = &self.src[self.pos..];
        for (i, c) in rest.char_indices().skip(1) {
            let opens_comment = c == '/' && rest[i + 1..].starts_with(['/', '*']);
            if Quote::from_char(c).is_some() || opens_comment {
                return self.pos + i;
            }
        }
        self.src.len()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.src.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.src[start..];
        let scanned = if let Some(quote) = rest.chars().next().and_then(Quote::from_char) {
            self.string_end(quote).map(|end| (TokenKind::Str(quote), end))
        } else if rest.starts_with("//") {
            let end = rest.find('\n').map_or(self.src.len(), |i| start + i);
            Ok((TokenKind::LineComment, end))
        } else if rest.starts_with("/*") {
            rest[2..]
                .find("*/")
                .map(|i| (TokenKind::BlockComment, start + 2 + i + 2))
                .ok_or(ScanError {
                    offset: start,
                    reason: "unterminated block comment",
                })
        } else {
            Ok((TokenKind::Code, self.code_end()))
        };

        match scanned {
            Ok((kind, end)) => {
                self.pos = end;
                Some(Ok(Token {
                    kind,
                    span: start..end,
                    text: &self.src[start..end],
                }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Offset of the `]` closing the `[` at `open`, skipping brackets that
/// appear inside strings and comments.
pub fn matching_bracket(src: &str, open: usize) -> Result<Option<usize>, ScanError> {
    let mut depth = 0usize;
    for token in Scanner::new(&src[open..]) {
        let token = token.map_err(|e| ScanError {
            offset: e.offset + open,
            ..e
        })?;
        if token.kind != TokenKind::Code {
            continue;
        }
        for (i, c) in token.text.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(Some(open + token.span.start + i));
                    }
                }
                _ => {}
            }
        }
    }
    Ok(None)
}
