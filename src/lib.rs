/*!
 * Composable backtracking PEG matchers for hand-assembled recursive-descent
 * parsers.
 *
 * A grammar is an ordinary tree of values: primitives match single bytes or
 * literals, `+` sequences, `|` is ordered choice, [`star`](patterns::star) /
 * [`plus`](patterns::plus) repeat greedily, [`check`](patterns::check) and
 * `!` look ahead without consuming, and hook wrappers observe sub-matches to
 * drive whatever external state the parser accumulates. Matching is one
 * recursive walk over the tree: each node reads a [`Cursor`] and yields the
 * advanced cursor or `None`.
 *
 * ```
 * use pegma::patterns::*;
 * use std::cell::Cell;
 *
 * // key=value pairs, counting the pairs as a side effect
 * let pairs = Cell::new(0);
 * let pair = plus(alpha()) + b'=' + plus(digit());
 * let line = plus(pair.on_match(|| pairs.set(pairs.get() + 1)) + maybe(b';')) + check(eof());
 *
 * assert!(line.match_str("a=1;bc=22;d=3").is_some());
 * assert_eq!(pairs.get(), 3);
 * ```
 *
 * Recursive rules go through a [`Rules`] registry, which lets a pattern
 * reference a rule before the rule is bound:
 *
 * ```
 * use pegma::patterns::*;
 * use pegma::Rules;
 *
 * let rules = Rules::new();
 * let term = byte(b'a') | (b'(' + rules.rule(0) + b')');
 * rules.bind(0, plus(term));
 * assert!(rules.rule(0).match_str("(a)((a))a").is_some());
 * ```
 *
 * Failure is plain control flow: a miss carries no payload and costs nothing
 * beyond the bytes already examined. Hooks fire as soon as their node
 * matches and are never rolled back when an enclosing choice abandons the
 * branch; put a `check` in front of a hook when the grammar is ambiguous up
 * to that point.
 */
mod cursor;
mod matcher;

pub use cursor::{Cursor, TERMINATOR};
pub use matcher::classes;
pub use matcher::{
    any, byte, check, empty, exactly, from_fn, maybe, not, patterns, plus, range, star, until,
    AnyByte, Byte, ByteRange, Check, Choice, Empty, FromFn, Hook, IntoPattern, Literal, Match, Not,
    OnePlus, Pattern, RuleError, RuleFn, RuleRef, Rules, Seq, SpanHook, Star, TextHook, Until,
};
