/*!
 * Late binding for self-referential grammars.
 *
 * Patterns are eagerly constructed values, so a rule cannot name itself while
 * it is still being built. The registry breaks the knot with one layer of
 * indirection: [`Rules::rule`] hands out a matcher that forwards to "whatever
 * is bound under this key", and [`Rules::bind`] supplies the target once the
 * rule is complete. Binding is a one-time write and must happen before the
 * first match that can reach the reference; the registry checks both
 * directions and treats a violation as fatal.
 */
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use thiserror::Error;

use crate::cursor::Cursor;

use super::{IntoPattern, Match, Pattern};

/// A bound rule: the type-erased match capability stored in the registry.
pub type RuleFn<'p> = Rc<dyn for<'s> Fn(Cursor<'s>) -> Option<Cursor<'s>> + 'p>;

type Table<'p, K> = RefCell<SmallVec<[(K, RuleFn<'p>); 4]>>;

/// Misuse of the rule registry while assembling a grammar.
///
/// Both forms are programmer errors, not parse-time conditions: [`Rules::bind`]
/// and match-time resolution panic with these messages rather than limp on
/// toward an absent rule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule already bound for key {0}")]
    AlreadyBound(String),
    #[error("no rule bound for key {0}")]
    Unbound(String),
}

/// A table of keyed rules supporting reference-before-bind.
///
/// Registries are tiny (a handful of mutually recursive rules), so entries
/// live in an inline vector and lookups scan it. Single writer, many readers,
/// writer strictly before readers: fully populate the registry, then match.
///
/// ```
/// use pegma::patterns::*;
/// use pegma::Rules;
///
/// // term = 'a' | '(' term+ ')'
/// let rules = Rules::new();
/// let term = byte(b'a') | (b'(' + rules.rule("expr") + b')');
/// rules.bind("expr", plus(term));
///
/// let end = rules.rule("expr").match_str("(a)((a))").unwrap();
/// assert_eq!(end.offset(), 8);
/// ```
pub struct Rules<'p, K> {
    table: Rc<Table<'p, K>>,
}

impl<'p, K> Default for Rules<'p, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p, K> Rules<'p, K> {
    pub fn new() -> Self {
        Self {
            table: Rc::new(RefCell::new(SmallVec::new())),
        }
    }
}

impl<'p, K: PartialEq + fmt::Debug> Rules<'p, K> {
    /// Binds `key` to `pattern`, panicking if `key` is already bound.
    pub fn bind<P>(&self, key: K, pattern: P)
    where
        P: IntoPattern,
        P::Matcher: 'p,
    {
        self.try_bind(key, pattern).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Non-panicking form of [`bind`](Rules::bind) for construction-time
    /// validation.
    pub fn try_bind<P>(&self, key: K, pattern: P) -> Result<(), RuleError>
    where
        P: IntoPattern,
        P::Matcher: 'p,
    {
        let pat = pattern.into_pattern();
        let rule: RuleFn<'p> = Rc::new(move |at: Cursor<'_>| pat.match_at(at));
        let mut table = self.table.borrow_mut();
        if table.iter().any(|(bound, _)| *bound == key) {
            return Err(RuleError::AlreadyBound(format!("{key:?}")));
        }
        table.push((key, rule));
        Ok(())
    }

    /// An indirection matcher forwarding to whatever `key` is bound to.
    ///
    /// Usable before the bind happens; resolution is deferred to match time
    /// and panics if the key was never bound. The registry itself must
    /// outlive every match through the returned pattern.
    pub fn rule(&self, key: K) -> Pattern<RuleRef<'p, K>> {
        Pattern::new(RuleRef {
            table: Rc::downgrade(&self.table),
            key,
        })
    }
}

/// The indirection matcher: resolves its key against the registry on every
/// evaluation.
///
/// Holds only a weak handle, so rules that capture references back into the
/// registry cannot keep it alive in a cycle.
#[derive(Clone)]
pub struct RuleRef<'p, K> {
    table: Weak<Table<'p, K>>,
    key: K,
}

impl<'p, K: PartialEq + fmt::Debug> Match for RuleRef<'p, K> {
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        let table = self
            .table
            .upgrade()
            .expect("rule registry dropped while a rule reference was still in use");
        let rule = {
            let table = table.borrow();
            table
                .iter()
                .find(|(bound, _)| *bound == self.key)
                .map(|(_, rule)| Rc::clone(rule))
        };
        match rule {
            Some(rule) => (*rule)(at),
            None => panic!("{}", RuleError::Unbound(format!("{:?}", self.key))),
        }
    }
}

/// Wraps an arbitrary cursor-to-outcome function as a pattern.
///
/// The general-purpose escape hatch underneath the registry: anything that
/// can answer "does this match here" composes with the rest of a grammar.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> Match for FromFn<F>
where
    F: for<'s> Fn(Cursor<'s>) -> Option<Cursor<'s>>,
{
    fn match_at<'s>(&self, at: Cursor<'s>) -> Option<Cursor<'s>> {
        (self.f)(at)
    }
}

pub fn from_fn<F>(f: F) -> Pattern<FromFn<F>>
where
    F: for<'s> Fn(Cursor<'s>) -> Option<Cursor<'s>>,
{
    Pattern::new(FromFn { f })
}
