//! A literal-token classifier: hex numbers, reals, integers, and quoted
//! strings, each classified purely through hook side effects.

use pegma::patterns::*;
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
enum Literal {
    Hex(String),
    Real(String),
    Int(String),
    Str(String),
}

/// Classifies the literal at the front of `src`, returning the token and the
/// offset of the unconsumed remainder.
fn classify(src: &str) -> Option<(Literal, usize)> {
    let result = RefCell::new(None);

    // Every arm requires a delimiter, tested without consuming it.
    let delim = || check(whitespace() | eof());

    // '|' keeps the first match, so the overlapping shapes are ordered most
    // specific first: an integer would match the 0 in "0x..", and the
    // integral part of a real would match as an integer.
    let literal = ("0x" + plus(hex_digit() + hex_digit()) + delim())
        .on_text(|s| *result.borrow_mut() = Some(Literal::Hex(s)))
        | (real() + delim()).on_text(|s| *result.borrow_mut() = Some(Literal::Real(s)))
        | (integer() + delim()).on_text(|s| *result.borrow_mut() = Some(Literal::Int(s)))
        | (b'"'
            + until(check(byte(b'"'))).on_text(|s| *result.borrow_mut() = Some(Literal::Str(s)))
            + b'"');

    let rest = literal.match_str(src)?.offset();
    drop(literal);
    result.into_inner().map(|token| (token, rest))
}

#[test]
fn hex_wins_over_integer_on_shared_prefix() {
    let (token, rest) = classify("0x1F and more").unwrap();
    assert_eq!(token, Literal::Hex("0x1F".into()));
    assert_eq!(rest, 4);
}

#[test]
fn hex_digits_come_in_pairs() {
    // an odd digit count falls out of the hex arm; the integer arm then
    // stops at the 0 but finds no delimiter after it
    assert_eq!(classify("0x1 "), None);
}

#[test]
fn reals_win_over_their_integral_prefix() {
    let (token, rest) = classify("-3.5e-2\tnext").unwrap();
    assert_eq!(token, Literal::Real("-3.5e-2".into()));
    assert_eq!(rest, 7);
}

#[test]
fn integers_still_match_when_no_point_follows() {
    let (token, _) = classify("+42 ").unwrap();
    assert_eq!(token, Literal::Int("+42".into()));
}

#[test]
fn end_of_input_is_a_delimiter() {
    let (token, _) = classify("0xAB").unwrap();
    assert_eq!(token, Literal::Hex("0xAB".into()));
}

#[test]
fn quoted_strings_capture_their_body() {
    let (token, rest) = classify("\"What's up?\" and some more stuff").unwrap();
    assert_eq!(token, Literal::Str("What's up?".into()));
    assert_eq!(rest, 12);
}

#[test]
fn a_literal_without_a_delimiter_is_rejected() {
    assert_eq!(classify("0x1Fg"), None);
    assert_eq!(classify("12a"), None);
}
