use std::ops::{Add, BitOr};

use crate::cursor::Cursor;

use super::{
    primitives::{Byte, Empty, Literal},
    IntoPattern, Match, Pattern,
};

/// PEG sequence: `left`, then `right` from where `left` stopped.
///
/// Short-circuits: when `left` fails, `right` is never attempted and none of
/// its side effects occur.
#[derive(Clone, Copy, Debug)]
pub struct Seq<L, R> {
    left: L,
    right: R,
}

impl<L: Match, R: Match> Match for Seq<L, R> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        self.right.match_at(self.left.match_at(at)?)
    }
}

/// PEG ordered choice: `left` wins outright if it matches.
///
/// `right` is only tried after `left` fails, and always from the original
/// cursor. There is no exploration beyond the first success, so when
/// alternatives share a prefix the longer or more specific one must be listed
/// first.
#[derive(Clone, Copy, Debug)]
pub struct Choice<L, R> {
    left: L,
    right: R,
}

impl<L: Match, R: Match> Match for Choice<L, R> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        self.left.match_at(at).or_else(|| self.right.match_at(at))
    }
}

/// Matches `pattern` if it is there, the empty string otherwise.
///
/// The empty arm comes second so that `pattern` gets its chance first.
pub fn maybe<P: IntoPattern>(pattern: P) -> Pattern<Choice<P::Matcher, Empty>> {
    Pattern::new(Choice {
        left: pattern.into_pattern().into_inner(),
        right: Empty,
    })
}

impl<M> Pattern<M> {
    /// Equivalent to [`maybe(self)`](maybe).
    pub fn maybe(self) -> Pattern<Choice<M, Empty>>
    where
        M: Match,
    {
        maybe(self)
    }
}

// `a + b` sequences; `a | b` is ordered choice. Bare `u8` and `&str` operands
// are promoted to patterns on either side, mirroring the constructor
// conversions of `IntoPattern`.

impl<A, B> Add<Pattern<B>> for Pattern<A> {
    type Output = Pattern<Seq<A, B>>;

    fn add(self, rhs: Pattern<B>) -> Self::Output {
        Pattern::new(Seq {
            left: self.inner,
            right: rhs.inner,
        })
    }
}

impl<A> Add<u8> for Pattern<A> {
    type Output = Pattern<Seq<A, Byte>>;

    fn add(self, rhs: u8) -> Self::Output {
        self + rhs.into_pattern()
    }
}

impl<B> Add<Pattern<B>> for u8 {
    type Output = Pattern<Seq<Byte, B>>;

    fn add(self, rhs: Pattern<B>) -> Self::Output {
        self.into_pattern() + rhs
    }
}

impl<'a, A> Add<&'a str> for Pattern<A> {
    type Output = Pattern<Seq<A, Literal<&'a str>>>;

    fn add(self, rhs: &'a str) -> Self::Output {
        self + rhs.into_pattern()
    }
}

impl<'a, B> Add<Pattern<B>> for &'a str {
    type Output = Pattern<Seq<Literal<&'a str>, B>>;

    fn add(self, rhs: Pattern<B>) -> Self::Output {
        self.into_pattern() + rhs
    }
}

impl<A, B> BitOr<Pattern<B>> for Pattern<A> {
    type Output = Pattern<Choice<A, B>>;

    fn bitor(self, rhs: Pattern<B>) -> Self::Output {
        Pattern::new(Choice {
            left: self.inner,
            right: rhs.inner,
        })
    }
}

impl<A> BitOr<u8> for Pattern<A> {
    type Output = Pattern<Choice<A, Byte>>;

    fn bitor(self, rhs: u8) -> Self::Output {
        self | rhs.into_pattern()
    }
}

impl<B> BitOr<Pattern<B>> for u8 {
    type Output = Pattern<Choice<Byte, B>>;

    fn bitor(self, rhs: Pattern<B>) -> Self::Output {
        self.into_pattern() | rhs
    }
}

impl<'a, A> BitOr<&'a str> for Pattern<A> {
    type Output = Pattern<Choice<A, Literal<&'a str>>>;

    fn bitor(self, rhs: &'a str) -> Self::Output {
        self | rhs.into_pattern()
    }
}

impl<'a, B> BitOr<Pattern<B>> for &'a str {
    type Output = Pattern<Choice<Literal<&'a str>, B>>;

    fn bitor(self, rhs: Pattern<B>) -> Self::Output {
        self.into_pattern() | rhs
    }
}
