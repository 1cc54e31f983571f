//! Console input and output for `ㅂ` and `ㅁ`
//!
//! Reads are on demand and never look past the token they consume, so
//! a program can interleave integer and character input freely.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::lexer::Value;

/// Reads a decimal integer token, skipping leading whitespace.
///
/// Yields 0 when no digits follow (end of input or a non-numeric character,
/// which is left unread). A sign with no digits after it, or a digit run that
/// overflows `i64`, is consumed and also yields 0, the way a failed `%d` scan
/// leaves its target at zero.
pub fn read_integer<R: BufRead>(input: &mut R) -> Result<Value> {
    while let Some(byte) = peek_byte(input)? {
        if !byte.is_ascii_whitespace() {
            break;
        }
        input.consume(1);
    }

    let mut token = String::new();
    if let Some(sign @ (b'-' | b'+')) = peek_byte(input)? {
        token.push(sign as char);
        input.consume(1);
    }
    while let Some(byte) = peek_byte(input)? {
        if !byte.is_ascii_digit() {
            break;
        }
        token.push(byte as char);
        input.consume(1);
    }

    Ok(token.parse().unwrap_or(0))
}

/// Reads one UTF-8 character and returns its codepoint.
///
/// Yields 0 at end of input and U+FFFD for malformed bytes.
pub fn read_character<R: BufRead>(input: &mut R) -> Result<Value> {
    let first = match peek_byte(input)? {
        Some(byte) => byte,
        None => return Ok(0),
    };

    let width = utf8_width(first);
    let mut buf = [0u8; 4];
    let mut len = 0;
    while len < width {
        match peek_byte(input)? {
            Some(byte) if len == 0 || byte & 0xC0 == 0x80 => {
                buf[len] = byte;
                len += 1;
                input.consume(1);
            }
            _ => break,
        }
    }

    let c = std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(c as Value)
}

/// Writes `value` in decimal and flushes
pub fn write_integer<W: Write>(output: &mut W, value: Value) -> Result<()> {
    write!(output, "{}", value)?;
    output.flush()?;
    Ok(())
}

/// Writes `value` as a character (U+FFFD when it is not a codepoint) and flushes
pub fn write_character<W: Write>(output: &mut W, value: Value) -> Result<()> {
    let c = u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    write!(output, "{}", c)?;
    output.flush()?;
    Ok(())
}

fn peek_byte<R: BufRead>(input: &mut R) -> Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

fn utf8_width(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers() {
        let mut input: &[u8] = b"  42\n-7 +3 x";
        assert_eq!(read_integer(&mut input).unwrap(), 42);
        assert_eq!(read_integer(&mut input).unwrap(), -7);
        assert_eq!(read_integer(&mut input).unwrap(), 3);
        assert_eq!(read_integer(&mut input).unwrap(), 0);
        // the garbage is left for a character read
        assert_eq!(read_character(&mut input).unwrap(), 'x' as Value);
        assert_eq!(read_integer(&mut input).unwrap(), 0);
    }

    #[test]
    fn test_read_integer_failed_parse_consumes_token() {
        let mut input: &[u8] = b"-x 99999999999999999999 5";
        assert_eq!(read_integer(&mut input).unwrap(), 0);
        assert_eq!(read_character(&mut input).unwrap(), 'x' as Value);
        assert_eq!(read_integer(&mut input).unwrap(), 0);
        assert_eq!(read_integer(&mut input).unwrap(), 5);
    }

    #[test]
    fn test_read_characters() {
        let mut input = "a한\u{1F600}".as_bytes();
        assert_eq!(read_character(&mut input).unwrap(), 'a' as Value);
        assert_eq!(read_character(&mut input).unwrap(), '한' as Value);
        assert_eq!(read_character(&mut input).unwrap(), 0x1F600);
        assert_eq!(read_character(&mut input).unwrap(), 0);
    }

    #[test]
    fn test_read_malformed_character() {
        let mut input: &[u8] = &[0xE2, b'a'];
        assert_eq!(read_character(&mut input).unwrap(), 0xFFFD);
        assert_eq!(read_character(&mut input).unwrap(), 'a' as Value);
    }

    #[test]
    fn test_writes() {
        let mut output = Vec::new();
        write_integer(&mut output, -12).unwrap();
        write_character(&mut output, '!' as Value).unwrap();
        write_character(&mut output, '한' as Value).unwrap();
        write_character(&mut output, -1).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "-12!한\u{FFFD}");
    }
}
