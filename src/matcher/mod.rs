pub mod classes;
mod hooks;
mod lookahead;
mod operators;
mod primitives;
mod repeat;
mod rules;
mod traits;

pub use hooks::{Hook, SpanHook, TextHook};
pub use lookahead::{check, not, Check, Not};
pub use operators::{maybe, Choice, Seq};
pub use primitives::{any, byte, empty, exactly, range, AnyByte, Byte, ByteRange, Empty, Literal};
pub use repeat::{plus, star, until, OnePlus, Star, Until};
pub use rules::{from_fn, FromFn, RuleError, RuleFn, RuleRef, Rules};
pub use traits::{IntoPattern, Match};

use crate::cursor::Cursor;

/// One-stop imports for assembling a grammar.
pub mod patterns {
    pub use super::{
        classes::{
            alpha, alphanumeric, carriage_return, digit, digits, eof, hex_digit, integer, lower,
            newline, real, sign, space, tab, upper, whitespace,
        },
        lookahead::{check, not},
        operators::maybe,
        primitives::{any, byte, empty, exactly, range},
        repeat::{plus, star, until},
        rules::from_fn,
    };
}

/// A composable matcher value.
///
/// A `Pattern` owns its matcher tree outright; combinators own independent
/// copies of their children, and a fully built pattern is immutable. The
/// wrapper carries the operator overloads (`+` sequences, `|` is ordered
/// choice, `!` is negative lookahead) and the builder methods for repetition
/// and hooks.
#[derive(Clone, Copy, Debug)]
pub struct Pattern<M> {
    inner: M,
}

impl<M> Pattern<M> {
    pub(crate) const fn new(inner: M) -> Self {
        Self { inner }
    }

    pub(crate) fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Match> Pattern<M> {
    /// Attempts a match at `at`, returning the advanced cursor on success.
    pub fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        self.inner.match_at(at)
    }

    /// Drives the pattern from the start of `src`.
    ///
    /// Returns the final cursor on success; results beyond that are whatever
    /// the attached hooks accumulated along the way.
    pub fn match_str<'s>(&self, src: &'s str) -> Option<Cursor<'s>> {
        self.match_bytes(src.as_bytes())
    }

    /// Byte-slice form of [`match_str`](Pattern::match_str).
    pub fn match_bytes<'s>(&self, src: &'s [u8]) -> Option<Cursor<'s>> {
        self.inner.match_at(Cursor::new(src))
    }
}

impl<M: Match> Match for Pattern<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        self.inner.match_at(at)
    }
}

#[test]
fn simple_match() {
    use patterns::*;

    let m = exactly("ab") + star(byte(b'c') | byte(b'd')) + check(eof());
    let end = m.match_str("abcdc").unwrap();
    assert_eq!(end.offset(), 5);
}
