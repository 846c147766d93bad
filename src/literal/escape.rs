//! Conversions between literal string bodies and plain values.

use super::scan::Quote;

/// Decode the escapes of a string literal, delimiters included in `raw`.
///
/// Follows the ECMAScript escape rules: unknown escapes yield the escaped
/// character and a backslash before a line break continues the line.
/// Template interpolation (`${`) has no static value and is rejected.
pub fn unescape(raw: &str, quote: Quote) -> Result<String, &'static str> {
    let body = raw
        .get(1..raw.len().saturating_sub(1))
        .ok_or("string literal is missing a delimiter")?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('b') => out.push('\u{8}'),
                Some('f') => out.push('\u{c}'),
                Some('v') => out.push('\u{b}'),
                Some('0') => out.push('\0'),
                Some('x') => {
                    let code = hex_digits(&mut chars, 2)?;
                    out.push(char::from_u32(code).ok_or("invalid \\x escape")?);
                }
                Some('u') => out.push(unicode_escape(&mut chars)?),
                Some('\r') => {
                    chars.next_if_eq(&'\n');
                }
                Some('\n' | '\u{2028}' | '\u{2029}') => {}
                Some(other) => out.push(other),
                None => return Err("dangling escape at end of string"),
            },
            '$' if quote == Quote::Backtick && chars.peek() == Some(&'{') => {
                return Err("template interpolation has no static value");
            }
            '\r' if quote == Quote::Backtick => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Render `value` as a backtick template literal.
pub fn to_template(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('`');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() && c != '\n' && c != '\t' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('`');
    out
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn hex_digits(chars: &mut Chars<'_>, count: usize) -> Result<u32, &'static str> {
    let digits: String = chars.by_ref().take(count).collect();
    if digits.len() != count {
        return Err("truncated hex escape");
    }
    u32::from_str_radix(&digits, 16).map_err(|_| "invalid hex escape")
}

fn unicode_escape(chars: &mut Chars<'_>) -> Result<char, &'static str> {
    if chars.next_if_eq(&'{').is_some() {
        let digits: String = chars.by_ref().take_while(|c| *c != '}').collect();
        let code = u32::from_str_radix(&digits, 16).map_err(|_| "invalid \\u{} escape")?;
        return char::from_u32(code).ok_or("\\u{} escape is not a scalar value");
    }

    let code = hex_digits(chars, 4)?;
    if !(0xD800..0xDC00).contains(&code) {
        return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    // High surrogate: combine with a following \uDC00-\uDFFF escape.
    let mut look = chars.clone();
    if look.next() == Some('\\') && look.next() == Some('u') {
        if let Ok(low) = hex_digits(&mut look, 4) {
            if (0xDC00..0xE000).contains(&low) {
                *chars = look;
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }
    Ok(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bodies_pass_through() {
        assert_eq!(unescape("'abc'", Quote::Single).unwrap(), "abc");
        assert_eq!(unescape("\"it's\"", Quote::Double).unwrap(), "it's");
        assert_eq!(
            unescape("`line one\nsays \"hi\"`", Quote::Backtick).unwrap(),
            "line one\nsays \"hi\""
        );
    }

    #[test]
    fn test_standard_escapes() {
        assert_eq!(unescape(r"'a\nb\tc'", Quote::Single).unwrap(), "a\nb\tc");
        assert_eq!(unescape(r"'it\'s'", Quote::Single).unwrap(), "it's");
        assert_eq!(unescape(r"`a \` b`", Quote::Backtick).unwrap(), "a ` b");
        assert_eq!(unescape(r"'\x41B\u{43}'", Quote::Single).unwrap(), "ABC");
        assert_eq!(unescape(r"'\d'", Quote::Single).unwrap(), "d");
    }

    #[test]
    fn test_surrogate_pairs_combine() {
        assert_eq!(unescape(r"'\uD83D\uDE00'", Quote::Single).unwrap(), "😀");
        assert_eq!(unescape(r"'\uD83D'", Quote::Single).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_line_continuation_is_dropped() {
        assert_eq!(unescape("'a\\\nb'", Quote::Single).unwrap(), "ab");
    }

    #[test]
    fn test_template_crlf_becomes_lf() {
        assert_eq!(unescape("`a\r\nb`", Quote::Backtick).unwrap(), "a\nb");
    }

    #[test]
    fn test_interpolation_is_rejected() {
        assert!(unescape("`total ${n}`", Quote::Backtick).is_err());
        assert_eq!(unescape("'${n}'", Quote::Single).unwrap(), "${n}");
        assert_eq!(unescape(r"`\${n}`", Quote::Backtick).unwrap(), "${n}");
    }

    #[test]
    fn test_template_rendering_reverses_unescape() {
        let value = "Line `one`\nC:\\path ${x}\r\u{1}";
        let template = to_template(value);
        assert_eq!(template, "`Line \\`one\\`\nC:\\\\path \\${x}\\r\\u0001`");
        assert_eq!(unescape(&template, Quote::Backtick).unwrap(), value);
    }
}
