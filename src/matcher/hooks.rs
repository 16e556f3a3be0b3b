/*!
 * Side-effect wrappers: observe a sub-pattern's outcome without changing it.
 *
 * Handlers fire synchronously, before the wrapper returns, on *every*
 * evaluation of the wrapped node, including evaluations inside a choice
 * branch that is later abandoned, or inside a lookahead whose advance is
 * discarded. Nothing is ever retracted on backtrack; grammar authors who need
 * commit semantics put a [`check`](super::check) in front of the hook so the
 * ambiguity is resolved before the handler runs.
 */
use std::cell::RefCell;

use crate::cursor::Cursor;

use super::{Match, Pattern};

fn noop() {}

/// No-argument outcome hook.
///
/// Fires `on_match` after the wrapped pattern succeeds and `on_miss` after it
/// fails; either slot defaults to a no-op. The wrapped outcome is returned
/// unchanged.
pub struct Hook<M, F, G> {
    inner: M,
    on_match: RefCell<F>,
    on_miss: RefCell<G>,
}

impl<M, F, G> Match for Hook<M, F, G>
where
    M: Match,
    F: FnMut(),
    G: FnMut(),
{
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        match self.inner.match_at(at) {
            Some(end) => {
                (self.on_match.borrow_mut())();
                Some(end)
            }
            None => {
                (self.on_miss.borrow_mut())();
                None
            }
        }
    }
}

/// Span hook: receives the consumed span as half-open byte offsets, without
/// materializing a copy.
pub struct SpanHook<M, F> {
    inner: M,
    on_match: RefCell<F>,
}

impl<M, F> Match for SpanHook<M, F>
where
    M: Match,
    F: FnMut(usize, usize),
{
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let end = self.inner.match_at(at)?;
        (self.on_match.borrow_mut())(at.offset(), end.offset());
        Some(end)
    }
}

/// Text hook: receives an owned copy of the consumed span.
pub struct TextHook<M, F> {
    inner: M,
    on_match: RefCell<F>,
}

impl<M, F> Match for TextHook<M, F>
where
    M: Match,
    F: FnMut(String),
{
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let end = self.inner.match_at(at)?;
        let text = String::from_utf8_lossy(at.span_to(&end)).into_owned();
        (self.on_match.borrow_mut())(text);
        Some(end)
    }
}

impl<M> Pattern<M> {
    /// Invokes `hook` every time this pattern matches.
    ///
    /// ```
    /// use pegma::patterns::*;
    /// use std::cell::Cell;
    ///
    /// let words = Cell::new(0);
    /// let p = star(plus(alpha()).on_match(|| words.set(words.get() + 1)) + maybe(b' '));
    /// assert!(p.match_str("one two three").is_some());
    /// assert_eq!(words.get(), 3);
    /// ```
    pub fn on_match<F: FnMut()>(self, hook: F) -> Pattern<Hook<M, F, fn()>> {
        Pattern::new(Hook {
            inner: self.into_inner(),
            on_match: RefCell::new(hook),
            on_miss: RefCell::new(noop as fn()),
        })
    }

    /// Invokes `hook` every time this pattern fails.
    pub fn on_miss<G: FnMut()>(self, hook: G) -> Pattern<Hook<M, fn(), G>> {
        Pattern::new(Hook {
            inner: self.into_inner(),
            on_match: RefCell::new(noop as fn()),
            on_miss: RefCell::new(hook),
        })
    }

    /// Invokes `hook` with the consumed `[start, end)` offsets on each match.
    pub fn on_span<F: FnMut(usize, usize)>(self, hook: F) -> Pattern<SpanHook<M, F>> {
        Pattern::new(SpanHook {
            inner: self.into_inner(),
            on_match: RefCell::new(hook),
        })
    }

    /// Invokes `hook` with an owned copy of the consumed text on each match.
    pub fn on_text<F: FnMut(String)>(self, hook: F) -> Pattern<TextHook<M, F>> {
        Pattern::new(TextHook {
            inner: self.into_inner(),
            on_match: RefCell::new(hook),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::matcher::patterns::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn hooks_fire_even_when_the_whole_match_fails() {
        let a_found = Cell::new(false);
        let c_found = Cell::new(true);
        let p = byte(b'a').on_match(|| a_found.set(true))
            + byte(b'c').on_miss(|| c_found.set(false));
        assert!(p.match_str("abcdefg").is_none());
        assert!(a_found.get());
        assert!(!c_found.get());
    }

    #[test]
    fn hooks_track_external_state() {
        // bump a scope counter for 'a'..'c', record it at 'd', drop it after
        let scope = Cell::new(0);
        let d_scope = Cell::new(-1);
        let p = star((byte(b'a') | b'b' | b'c').on_match(|| scope.set(scope.get() + 1)))
            + byte(b'd').on_match(|| d_scope.set(scope.get()))
            + star((byte(b'e') | b'f' | b'g').on_match(|| scope.set(scope.get() - 1)));
        assert!(p.match_str("abcdefg").is_some());
        assert_eq!(scope.get(), 0);
        assert_eq!(d_scope.get(), 3);
    }

    #[test]
    fn hooks_in_abandoned_choice_branches_are_not_retracted() {
        let count = Cell::new(0);
        let p = (exactly("ab").on_match(|| count.set(count.get() + 1)) + b'z') | exactly("abc");
        assert!(p.match_str("abc").is_some());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn match_and_miss_hooks_compose_by_nesting() {
        let matched = Cell::new(0);
        let missed = Cell::new(0);
        let p = exactly("ab")
            .on_match(|| matched.set(matched.get() + 1))
            .on_miss(|| missed.set(missed.get() + 1));
        assert!(p.match_str("ab").is_some());
        assert!(p.match_str("xy").is_none());
        assert_eq!((matched.get(), missed.get()), (1, 1));
    }

    #[test]
    fn span_hook_reports_half_open_offsets() {
        let span = Cell::new((0, 0));
        let p = any() + exactly("bc").on_span(|start, end| span.set((start, end)));
        assert!(p.match_str("abcd").is_some());
        assert_eq!(span.get(), (1, 3));
    }

    #[test]
    fn span_hook_is_empty_for_zero_width_matches() {
        let span = Cell::new((9, 9));
        let p = eof().on_span(|start, end| span.set((start, end)));
        assert!(p.match_str("").is_some());
        assert_eq!(span.get(), (0, 0));
    }

    #[test]
    fn text_hook_materializes_the_span() {
        let seen = RefCell::new(Vec::new());
        let p = star(plus(alpha()).on_text(|word| seen.borrow_mut().push(word)) + maybe(b' '));
        assert!(p.match_str("ab cd").is_some());
        assert_eq!(*seen.borrow(), ["ab", "cd"]);
    }

    #[test]
    fn mutable_captures_work_after_the_pattern_is_dropped() {
        let mut count = 0;
        let p = plus(byte(b'a').on_match(|| count += 1));
        assert!(p.match_str("aaa").is_some());
        drop(p);
        assert_eq!(count, 3);
    }
}
