use crate::cursor::Cursor;

use super::{IntoPattern, Match, Pattern};

/// Positive lookahead: matches what `inner` matches, then rewinds.
///
/// Side effects inside `inner` still fire; only the cursor advance is
/// discarded.
#[derive(Clone, Copy, Debug)]
pub struct Check<M> {
    inner: M,
}

impl<M: Match> Match for Check<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        self.inner.match_at(at).map(|_| at)
    }
}

/// Tests whether `pattern` matches at the current position without consuming
/// anything.
///
/// ```
/// use pegma::patterns::*;
///
/// // classify a keyword only when a delimiter follows it
/// let kw = exactly("let") + check(whitespace());
/// assert!(kw.match_str("let x").is_some());
/// assert!(kw.match_str("letter").is_none());
/// ```
pub fn check<P: IntoPattern>(pattern: P) -> Pattern<Check<P::Matcher>> {
    Pattern::new(Check {
        inner: pattern.into_pattern().into_inner(),
    })
}

/// Negative lookahead: succeeds, without consuming, exactly when `inner`
/// fails.
#[derive(Clone, Copy, Debug)]
pub struct Not<M> {
    inner: M,
}

impl<M: Match> Match for Not<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        match self.inner.match_at(at) {
            Some(_) => None,
            None => Some(at),
        }
    }
}

/// Succeeds when `pattern` does not match here. Also available as `!pattern`.
pub fn not<P: IntoPattern>(pattern: P) -> Pattern<Not<P::Matcher>> {
    Pattern::new(Not {
        inner: pattern.into_pattern().into_inner(),
    })
}

impl<M> std::ops::Not for Pattern<M> {
    type Output = Pattern<Not<M>>;

    fn not(self) -> Self::Output {
        Pattern::new(Not {
            inner: self.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::patterns::*;
    use std::cell::Cell;

    #[test]
    fn check_matches_iff_inner_matches() {
        assert!(check(empty() + b'a' + b'b').match_str("abcde").is_some());
        assert!(check("abcd").match_str("abcde").is_some());
        assert!(check("abcd").match_str("abc").is_none());
    }

    #[test]
    fn check_rewinds_after_testing() {
        let end = check("abcd").match_str("abcde").unwrap();
        assert_eq!(end.offset(), 0);
    }

    #[test]
    fn check_still_fires_inner_hooks() {
        let fired = Cell::new(0);
        let p = check(exactly("ab").on_match(|| fired.set(fired.get() + 1)));
        assert_eq!(p.match_str("abc").unwrap().offset(), 0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn not_inverts_without_consuming() {
        let end = not("ba").match_str("abcd").unwrap();
        assert_eq!(end.offset(), 0);
        assert!(not("ab").match_str("abcd").is_none());
    }

    #[test]
    fn not_operator_sugar() {
        let p = !exactly("ab");
        assert!(p.match_str("abcd").is_none());
        assert!(p.match_str("ba").is_some());
    }
}
