//! Condition sets and the predicate evaluation seam.
//!
//! A route is selected by named boolean conditions evaluated against the
//! current request, not by parsing the URI. A [`ConditionSet`] is the
//! declarative side: an ordered list of `(condition name, argument lists)`
//! entries. The host supplies the evaluating side through
//! [`ConditionProvider`].
//!
//! Matching is OR-shaped throughout: a route matches if *any* declared
//! condition entry matches, and an entry matches if the predicate returns
//! true for *any* of its argument lists. Conjunction is never expressed.

use crate::request::Request;
use std::fmt;

/// A scalar argument passed to a condition predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A string argument (slugs, template names, post types).
    Str(String),
    /// An integer argument (object identifiers).
    Int(i64),
    /// A boolean argument.
    Bool(bool),
}

impl Arg {
    /// Returns the string value, if this argument is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this argument is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Arg::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

/// One ordered list of arguments for a single predicate invocation.
pub type ArgList = Vec<Arg>;

/// One named condition together with the argument lists it is tried with.
///
/// The predicate is invoked once per argument list, in declaration order,
/// and the first list it returns true for matches the entry.
#[derive(Debug, Clone)]
pub struct ConditionEntry {
    name: String,
    arg_lists: Vec<ArgList>,
}

impl ConditionEntry {
    /// Create an entry for `name` tried with the given argument lists.
    ///
    /// An empty `arg_lists` normalizes to a single empty argument list, so
    /// the predicate is still invoked once, with zero arguments.
    pub fn new(name: impl Into<String>, mut arg_lists: Vec<ArgList>) -> Self {
        if arg_lists.is_empty() {
            arg_lists.push(ArgList::new());
        }
        Self {
            name: name.into(),
            arg_lists,
        }
    }

    /// The condition name looked up in the host's predicate registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument lists, in the order they are tried.
    pub fn arg_lists(&self) -> &[ArgList] {
        &self.arg_lists
    }
}

/// An ordered set of condition entries declared on one route.
///
/// All argument-shape normalization happens here, once, at construction;
/// the dispatcher only ever sees `(name, argument lists)` pairs.
///
/// # Example
///
/// ```rust,ignore
/// // Matches the "about" page, the "contact" page, or any archive.
/// let conditions = ConditionSet::new()
///     .when_any("page", ["about", "contact"])
///     .when("archive");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConditionSet {
    entries: Vec<ConditionEntry>,
}

impl ConditionSet {
    /// Create an empty condition set. A route with no entries never matches.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a condition invoked with zero arguments.
    pub fn when(mut self, name: impl Into<String>) -> Self {
        self.entries.push(ConditionEntry::new(name, Vec::new()));
        self
    }

    /// Declare a condition invoked with a single scalar argument.
    pub fn when_one(mut self, name: impl Into<String>, arg: impl Into<Arg>) -> Self {
        self.entries
            .push(ConditionEntry::new(name, vec![vec![arg.into()]]));
        self
    }

    /// Declare a condition tried once per scalar, matching if any succeeds.
    ///
    /// Each scalar becomes its own one-element argument list.
    pub fn when_any<I, A>(mut self, name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let lists = args.into_iter().map(|a| vec![a.into()]).collect();
        self.entries.push(ConditionEntry::new(name, lists));
        self
    }

    /// Declare a condition with explicit argument lists, taken verbatim.
    pub fn when_lists(mut self, name: impl Into<String>, lists: Vec<ArgList>) -> Self {
        self.entries.push(ConditionEntry::new(name, lists));
        self
    }

    /// The declared entries, in declaration order.
    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    /// Whether no conditions are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for ConditionSet {
    /// A bare condition name becomes a single zero-argument entry.
    fn from(name: &str) -> Self {
        ConditionSet::new().when(name)
    }
}

impl From<String> for ConditionSet {
    fn from(name: String) -> Self {
        ConditionSet::new().when(name)
    }
}

/// The outcome of evaluating one condition against the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    /// The predicate held for the given arguments.
    Matched,
    /// The predicate was evaluated and did not hold.
    NotMatched,
    /// The host does not know a predicate by this name.
    ///
    /// Distinct from [`NotMatched`](ConditionOutcome::NotMatched): the
    /// dispatcher skips the rest of the entry instead of treating it as a
    /// failed evaluation, so routes may declare conditions the host
    /// environment doesn't support without failing dispatch.
    Unsupported,
}

/// The predicate evaluation seam implemented by the host.
///
/// Implementations must be safe for concurrent read-only invocation; the
/// dispatcher calls them from whatever threads dispatch runs on.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot evaluate conditions for requests of type `{C}`",
    label = "missing `ConditionProvider` implementation",
    note = "Implement `ConditionProvider<{C}>` to supply named predicates."
)]
pub trait ConditionProvider<C: Request>: Send + Sync {
    /// Evaluate the named condition with the given arguments.
    fn evaluate(&self, name: &str, args: &[Arg], request: &C) -> ConditionOutcome;
}
