use either::{for_both, Either};

use crate::cursor::Cursor;

use super::{
    primitives::{Byte, Literal},
    Pattern,
};

/// The one capability every matcher exposes: attempt a match at a cursor.
///
/// `Some(next)` is success with the advanced cursor; `None` is ordinary
/// parse-time failure. Failure carries no payload and is produced freely
/// while an ordered choice explores alternatives; it is control flow, not an
/// error.
pub trait Match {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>>;
}

impl<M: Match + ?Sized> Match for &M {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        (**self).match_at(at)
    }
}

/// Forward the match capability through [`Either`], so a pattern can be
/// picked between two concrete matcher types at runtime.
impl<L: Match, R: Match> Match for Either<L, R> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        for_both!(self, m => m.match_at(at))
    }
}

/// Conversion into a [`Pattern`], letting `u8` and string literals stand in
/// for patterns at combinator call sites.
///
/// ```
/// use pegma::patterns::*;
///
/// // `b'-'` and `"1"` convert on the way into `maybe` and `check`:
/// let p = maybe(b'-') + check("1");
/// assert!(p.match_str("-1").is_some());
/// ```
pub trait IntoPattern {
    type Matcher: Match;

    fn into_pattern(self) -> Pattern<Self::Matcher>;
}

impl<M: Match> IntoPattern for Pattern<M> {
    type Matcher = M;

    fn into_pattern(self) -> Pattern<M> {
        self
    }
}

impl IntoPattern for u8 {
    type Matcher = Byte;

    fn into_pattern(self) -> Pattern<Byte> {
        super::primitives::byte(self)
    }
}

impl<'a> IntoPattern for &'a str {
    type Matcher = Literal<&'a str>;

    fn into_pattern(self) -> Pattern<Literal<&'a str>> {
        super::primitives::exactly(self)
    }
}

impl IntoPattern for String {
    type Matcher = Literal<String>;

    fn into_pattern(self) -> Pattern<Literal<String>> {
        super::primitives::exactly(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::classes::{integer, real};

    #[test]
    fn either_forwards_both_sides() {
        let int_only = true;
        let num = Pattern::new(if int_only {
            Either::Left(integer())
        } else {
            Either::Right(real())
        });
        let end = num.match_str("42.").unwrap();
        assert_eq!(end.offset(), 2);
    }

    #[test]
    fn reference_patterns_match() {
        let inner = integer();
        let by_ref = Pattern::new(&inner);
        assert!(by_ref.match_str("7").is_some());
    }
}
