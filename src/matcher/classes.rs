/*!
 * ASCII character classes and common literal shapes.
 *
 * Each function builds a fresh little pattern from the primitives; call it
 * again wherever the grammar needs another copy.
 */
use crate::cursor::TERMINATOR;

use super::{
    byte, maybe, plus, range,
    primitives::{Byte, ByteRange},
    Match, Pattern,
};

/// Matches end of input without consuming it.
pub fn eof() -> Pattern<Byte> {
    byte(TERMINATOR)
}

pub fn space() -> Pattern<Byte> {
    byte(b' ')
}

pub fn tab() -> Pattern<Byte> {
    byte(b'\t')
}

pub fn carriage_return() -> Pattern<Byte> {
    byte(b'\r')
}

pub fn newline() -> Pattern<Byte> {
    byte(b'\n')
}

pub fn whitespace() -> Pattern<impl Match> {
    space() | tab() | carriage_return() | newline()
}

pub fn digit() -> Pattern<ByteRange> {
    range(b'0', b'9')
}

pub fn hex_digit() -> Pattern<impl Match> {
    range(b'0', b'9') | range(b'a', b'f') | range(b'A', b'F')
}

pub fn lower() -> Pattern<ByteRange> {
    range(b'a', b'z')
}

pub fn upper() -> Pattern<ByteRange> {
    range(b'A', b'Z')
}

pub fn alpha() -> Pattern<impl Match> {
    lower() | upper()
}

pub fn alphanumeric() -> Pattern<impl Match> {
    alpha() | digit()
}

/// One or more decimal digits.
pub fn digits() -> Pattern<impl Match> {
    plus(digit())
}

/// A leading `+` or `-`.
pub fn sign() -> Pattern<impl Match> {
    byte(b'+') | byte(b'-')
}

/// An optionally signed integer literal.
pub fn integer() -> Pattern<impl Match> {
    maybe(sign()) + digits()
}

/// An optionally signed real literal with mandatory point and optional
/// exponent, e.g. `-3.5e-2`.
pub fn real() -> Pattern<impl Match> {
    maybe(sign())
        + digits()
        + byte(b'.')
        + maybe(digits())
        + maybe((byte(b'e') | byte(b'E')) + maybe(sign()) + digits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::check;

    #[test]
    fn whitespace_covers_the_ascii_set() {
        for ws in [" ", "\t", "\r", "\n"] {
            assert!(whitespace().match_str(ws).is_some());
        }
        assert!(whitespace().match_str("x").is_none());
    }

    #[test]
    fn integer_takes_an_optional_sign() {
        for src in ["123", "-5", "+42"] {
            let end = integer().match_str(src).unwrap();
            assert_eq!(end.offset(), src.len());
        }
        assert!(integer().match_str("-").is_none());
    }

    #[test]
    fn real_requires_the_point() {
        for src in ["2.0", "-3.5e-2", "+1.", "10.5E3"] {
            let end = (real() + check(eof())).match_str(src).unwrap();
            assert_eq!(end.offset(), src.len());
        }
        assert!(real().match_str("2").is_none());
        assert!(real().match_str(".5").is_none());
    }

    #[test]
    fn hex_digit_covers_both_cases() {
        for b in *b"0129abfABF" {
            assert!(hex_digit().match_bytes(&[b]).is_some());
        }
        assert!(hex_digit().match_str("g").is_none());
    }
}
