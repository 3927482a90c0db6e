//! Escaping helpers for string node text.
//!
//! The parser stores string and label text exactly as it appeared between the
//! quotes, with escape sequences validated but not decoded, and the serializer
//! writes it back verbatim. These helpers convert between that raw form and
//! plain Rust strings for callers that need one or the other.
use alloc::string::String;
use core::fmt::Write;

use thiserror::Error;

/// Errors from [`unescape_str`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnescapeError {
    /// A backslash was followed by a character that does not start an escape.
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    /// A `\u` escape contained a non-hexadecimal digit.
    #[error("invalid unicode escape character '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// A `\u` escape decoded to a lone surrogate.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u16),
    /// The text ended inside an escape sequence.
    #[error("unterminated escape sequence")]
    UnterminatedEscape,
}

/// Writes `src` with quotes, backslashes, control characters and the Unicode
/// line separators escaped, so that it is valid between JSON quotes.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_escaped_str<W: Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            // Escape Unicode line separators which pre-2019 JSON parsers may not handle correctly
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_control() && (c as u32) <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Escapes `src` for use as string node text.
///
/// ```
/// assert_eq!(jsontree::escape_str("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// ```
#[must_use]
pub fn escape_str(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    // Writing into a `String` cannot fail.
    let _ = write_escaped_str(src, &mut out);
    out
}

/// Decodes the escape sequences in raw string node text.
///
/// Surrogate pairs written as two `\u` escapes are combined into one
/// character.
///
/// ```
/// assert_eq!(
///     jsontree::unescape_str(r"a\tb\u00e9\uD83D\uDE00").unwrap(),
///     "a\tbé😀"
/// );
/// ```
///
/// # Errors
///
/// See [`UnescapeError`].
pub fn unescape_str(raw: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut high_surrogate: Option<u16> = None;

    while let Some(c) = chars.next() {
        if c != '\\' {
            if let Some(high) = high_surrogate {
                return Err(UnescapeError::UnpairedSurrogate(high));
            }
            out.push(c);
            continue;
        }
        let escaped = chars.next().ok_or(UnescapeError::UnterminatedEscape)?;
        if escaped != 'u' {
            if let Some(high) = high_surrogate {
                return Err(UnescapeError::UnpairedSurrogate(high));
            }
        }
        let decoded = match escaped {
            'u' => {
                let mut buf = UnicodeEscapeBuffer::new();
                let unit = loop {
                    let digit = chars.next().ok_or(UnescapeError::UnterminatedEscape)?;
                    if let Some(unit) = buf.feed(digit)? {
                        break unit;
                    }
                };
                match (high_surrogate.take(), unit) {
                    (None, 0xD800..=0xDBFF) => {
                        high_surrogate = Some(unit);
                        continue;
                    }
                    (Some(high), 0xDC00..=0xDFFF) => {
                        let code = 0x10000
                            + ((u32::from(high) - 0xD800) << 10)
                            + (u32::from(unit) - 0xDC00);
                        char::from_u32(code).ok_or(UnescapeError::UnpairedSurrogate(high))?
                    }
                    (Some(high), _) => return Err(UnescapeError::UnpairedSurrogate(high)),
                    (None, 0xDC00..=0xDFFF) => return Err(UnescapeError::UnpairedSurrogate(unit)),
                    (None, _) => {
                        char::from_u32(u32::from(unit)).ok_or(UnescapeError::UnpairedSurrogate(unit))?
                    }
                }
            }
            '"' | '\\' | '/' => escaped,
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => return Err(UnescapeError::InvalidEscape(other)),
        };
        out.push(decoded);
    }

    match high_surrogate {
        Some(high) => Err(UnescapeError::UnpairedSurrogate(high)),
        None => Ok(out),
    }
}

/// Accumulates the four hexadecimal digits of a `\u` escape and yields the
/// UTF-16 code unit once all four have been seen.
#[derive(Debug)]
struct UnicodeEscapeBuffer {
    value: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    fn new() -> Self {
        Self { value: 0, len: 0 }
    }

    fn feed(&mut self, c: char) -> Result<Option<u16>, UnescapeError> {
        let digit = c
            .to_digit(16)
            .ok_or(UnescapeError::InvalidUnicodeEscapeChar(c))?;
        // `to_digit(16)` is at most 15, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        let digit = digit as u16;
        self.value = (self.value << 4) | digit;
        self.len += 1;
        if self.len == 4 {
            let unit = self.value;
            self.value = 0;
            self.len = 0;
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn escape_buffer_decodes_four_digits() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed('0'), Ok(None));
        assert_eq!(buf.feed('0'), Ok(None));
        assert_eq!(buf.feed('4'), Ok(None));
        assert_eq!(buf.feed('1'), Ok(Some(0x41)));
        // resets after a full escape
        for ch in "AbCd".chars() {
            let res = buf.feed(ch).unwrap();
            if ch == 'd' {
                assert_eq!(res, Some(0xABCD));
            } else {
                assert!(res.is_none());
            }
        }
        assert_eq!(
            buf.feed('G'),
            Err(UnescapeError::InvalidUnicodeEscapeChar('G'))
        );
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("quote \"", "quote \\\"")]
    #[case("back\\slash", "back\\\\slash")]
    #[case("line\nbreak\ttab", "line\\nbreak\\ttab")]
    #[case("\u{0001}", "\\u0001")]
    #[case("\u{2028}", "\\u2028")]
    #[case("émoji 😀", "émoji 😀")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_str(input), expected);
        assert_eq!(unescape_str(expected).unwrap(), input);
    }

    #[rstest]
    #[case(r"\/", "/")]
    #[case(r"\b\f", "\u{0008}\u{000C}")]
    #[case(r"\u0041\u00df", "Aß")]
    #[case(r"\uD83D\uDE00", "😀")]
    fn unescapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case(r"\x", UnescapeError::InvalidEscape('x'))]
    #[case(r"\u12G4", UnescapeError::InvalidUnicodeEscapeChar('G'))]
    #[case(r"\u12", UnescapeError::UnterminatedEscape)]
    #[case("\\", UnescapeError::UnterminatedEscape)]
    #[case(r"\uD800", UnescapeError::UnpairedSurrogate(0xD800))]
    #[case(r"\uD800x", UnescapeError::UnpairedSurrogate(0xD800))]
    #[case(r"\uD800\n", UnescapeError::UnpairedSurrogate(0xD800))]
    #[case(r"\uD800A", UnescapeError::UnpairedSurrogate(0xD800))]
    #[case(r"\uDC00", UnescapeError::UnpairedSurrogate(0xDC00))]
    fn unescape_errors(#[case] input: &str, #[case] expected: UnescapeError) {
        assert_eq!(unescape_str(input), Err(expected));
    }
}
