use crate::cursor::Cursor;

use super::{IntoPattern, Match, Pattern};

/// Greedy zero-or-more repetition. Never fails.
///
/// Each iteration starts where the previous one stopped; the first failure
/// ends the loop and whatever was consumed stays consumed. Repetitions are
/// never handed back to a following pattern. A zero-width success also ends
/// the loop, since no further iteration could advance the cursor.
#[derive(Clone, Copy, Debug)]
pub struct Star<M> {
    inner: M,
}

impl<M: Match> Match for Star<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let mut cur = at;
        while let Some(next) = self.inner.match_at(cur) {
            if next.offset() == cur.offset() {
                break;
            }
            cur = next;
        }
        Some(cur)
    }
}

pub fn star<P: IntoPattern>(pattern: P) -> Pattern<Star<P::Matcher>> {
    Pattern::new(Star {
        inner: pattern.into_pattern().into_inner(),
    })
}

/// One mandatory match followed by the greedy zero-or-more tail.
///
/// Fails exactly when the first attempt fails.
#[derive(Clone, Copy, Debug)]
pub struct OnePlus<M> {
    inner: M,
}

impl<M: Match> Match for OnePlus<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let first = self.inner.match_at(at)?;
        Star { inner: &self.inner }.match_at(first)
    }
}

pub fn plus<P: IntoPattern>(pattern: P) -> Pattern<OnePlus<P::Matcher>> {
    Pattern::new(OnePlus {
        inner: pattern.into_pattern().into_inner(),
    })
}

/// Scans forward to the first position where `inner` matches, without
/// consuming it.
///
/// The target is tested as a lookahead at every position from the current one
/// on, one byte at a time, so the cost is linear in the distance scanned and
/// unbounded in general. Reaching the terminator fails the scan; the
/// terminator position itself is never tested.
#[derive(Clone, Copy, Debug)]
pub struct Until<M> {
    inner: M,
}

impl<M: Match> Match for Until<M> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let mut cur = at;
        while !cur.at_terminator() {
            if self.inner.match_at(cur).is_some() {
                return Some(cur);
            }
            cur = cur.advance();
        }
        None
    }
}

/// ```
/// use pegma::patterns::*;
///
/// // skip to the closing quote, then consume it
/// let p = b'"' + until(byte(b'"')) + b'"';
/// assert_eq!(p.match_str("\"hi\" there").unwrap().offset(), 4);
/// ```
pub fn until<P: IntoPattern>(pattern: P) -> Pattern<Until<P::Matcher>> {
    Pattern::new(Until {
        inner: pattern.into_pattern().into_inner(),
    })
}

impl<M> Pattern<M> {
    /// Equivalent to [`star(self)`](star).
    pub fn star(self) -> Pattern<Star<M>> {
        Pattern::new(Star {
            inner: self.into_inner(),
        })
    }

    /// Equivalent to [`plus(self)`](plus).
    pub fn plus(self) -> Pattern<OnePlus<M>> {
        Pattern::new(OnePlus {
            inner: self.into_inner(),
        })
    }
}
