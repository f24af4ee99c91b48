//! Route-group attributes and the definition-time group stack.
//!
//! A group is a lexical scope during route definition: every route
//! registered inside it inherits the group's attributes. Nesting composes
//! attributes with fixed precedence; the merged result is computed once,
//! when the inner scope is pushed, and is immutable until popped.

use std::collections::BTreeMap;
use waymark_core::NAMESPACE_SEPARATOR;

/// A pass-through attribute value for keys the router has no special
/// handling for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A single scalar value. An inner scalar overrides an outer value.
    Scalar(String),
    /// An ordered list. Inner lists concatenate after outer values.
    List(Vec<String>),
}

impl AttrValue {
    fn into_list(self) -> Vec<String> {
        match self {
            AttrValue::Scalar(s) => vec![s],
            AttrValue::List(items) => items,
        }
    }
}

/// The inheritable attributes a route group contributes.
///
/// # Example
///
/// ```rust,ignore
/// let attrs = GroupAttributes::new()
///     .namespace("Admin")
///     .prefix("admin")
///     .alias("admin")
///     .middleware_str("auth|csrf");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupAttributes {
    /// Namespace segment prepended to named handler references.
    pub namespace: Option<String>,
    /// Path-prefix segment.
    pub prefix: Option<String>,
    /// Domain constraint. An inner domain replaces an outer one outright.
    pub domain: Option<String>,
    /// Name-alias fragment, dot-joined across nesting levels.
    pub alias: Option<String>,
    /// Path suffix. An inner suffix replaces an outer one.
    pub suffix: Option<String>,
    /// Middleware identifiers, in order. Duplicates are allowed.
    pub middleware: Vec<String>,
    /// Unrecognized attributes, carried through merging untouched except
    /// for the scalar-override / list-concatenate union rule.
    pub extra: BTreeMap<String, AttrValue>,
}

impl GroupAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace segment. A leading `\` makes it root-anchored:
    /// it then ignores any enclosing group namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the path-prefix segment.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the domain constraint.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the name-alias fragment.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the path suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Append middleware identifiers, in order.
    pub fn middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware.extend(middleware.into_iter().map(Into::into));
        self
    }

    /// Append middleware given as a `|`-delimited string.
    pub fn middleware_str(self, middleware: &str) -> Self {
        self.middleware(middleware.split('|').filter(|s| !s.is_empty()))
    }

    /// Set a pass-through attribute.
    pub fn attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Merge these attributes (the inner, nested scope) onto `outer` (the
    /// enclosing scope).
    ///
    /// Not commutative. Inner wins on scalar conflicts, except:
    /// - `namespace` appends to the outer namespace unless root-anchored;
    /// - `prefix` appends as a path segment;
    /// - `alias` dot-joins after the outer alias;
    /// - `middleware` concatenates, outer first.
    pub fn merge_onto(&self, outer: &Self) -> Self {
        let namespace = match &self.namespace {
            Some(inner) if !inner.starts_with(NAMESPACE_SEPARATOR) => Some(match &outer.namespace {
                Some(enclosing) => format!(
                    "{}{}{}",
                    enclosing.trim_matches(NAMESPACE_SEPARATOR),
                    NAMESPACE_SEPARATOR,
                    inner.trim_matches(NAMESPACE_SEPARATOR)
                ),
                None => inner.trim_matches(NAMESPACE_SEPARATOR).to_string(),
            }),
            // Root-anchored: the enclosing namespace is ignored.
            Some(inner) => Some(inner.trim_matches(NAMESPACE_SEPARATOR).to_string()),
            None => outer.namespace.clone(),
        };

        let prefix = match &self.prefix {
            Some(inner) => Some(format!(
                "{}/{}",
                outer.prefix.as_deref().unwrap_or("").trim_matches('/'),
                inner.trim_matches('/')
            )),
            None => outer.prefix.clone(),
        };

        let alias = match (&outer.alias, &self.alias) {
            (Some(enclosing), Some(inner)) => Some(format!("{}.{}", enclosing, inner)),
            (Some(enclosing), None) => Some(enclosing.clone()),
            (None, inner) => inner.clone(),
        };

        let mut middleware = outer.middleware.clone();
        middleware.extend(self.middleware.iter().cloned());

        let mut extra = outer.extra.clone();
        for (key, value) in &self.extra {
            match (extra.remove(key), value) {
                // Scalars from the inner scope override.
                (_, AttrValue::Scalar(s)) => {
                    extra.insert(key.clone(), AttrValue::Scalar(s.clone()));
                }
                // Lists union: outer values first, then inner.
                (Some(existing), AttrValue::List(items)) => {
                    let mut merged = existing.into_list();
                    merged.extend(items.iter().cloned());
                    extra.insert(key.clone(), AttrValue::List(merged));
                }
                (None, AttrValue::List(items)) => {
                    extra.insert(key.clone(), AttrValue::List(items.clone()));
                }
            }
        }

        Self {
            namespace,
            prefix,
            domain: self.domain.clone().or_else(|| outer.domain.clone()),
            alias,
            suffix: self.suffix.clone().or_else(|| outer.suffix.clone()),
            middleware,
            extra,
        }
    }
}

/// The push/pop stack of group scopes active during route definition.
///
/// Each pushed frame holds the *effective* attributes for its scope: the
/// incoming attributes already merged with everything enclosing them. The
/// stack lives only for the synchronous definition pass and must be empty
/// again once definition finishes.
#[derive(Debug, Default)]
pub struct GroupStack {
    frames: Vec<GroupAttributes>,
}

impl GroupStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a group scope: merge `attrs` with the current top (if any)
    /// and push the result.
    pub fn push(&mut self, attrs: GroupAttributes) {
        let merged = match self.frames.last() {
            Some(top) => attrs.merge_onto(top),
            None => attrs,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.frames.len() + 1, "entering route group");
        self.frames.push(merged);
    }

    /// Leave the current group scope.
    pub fn pop(&mut self) -> Option<GroupAttributes> {
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.frames.len(), "leaving route group");
        self.frames.pop()
    }

    /// The effective attributes of the innermost active scope.
    ///
    /// Merging an empty attribute set onto the top frame would return the
    /// frame unchanged, so the frame itself is the materialized result.
    pub fn active(&self) -> Option<&GroupAttributes> {
        self.frames.last()
    }

    /// Whether no group scope is active.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// How many scopes are active.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_segments_join_with_slash() {
        let outer = GroupAttributes::new().prefix("admin");
        let inner = GroupAttributes::new().prefix("users");
        assert_eq!(inner.merge_onto(&outer).prefix.as_deref(), Some("admin/users"));
    }

    #[test]
    fn test_prefix_inherited_when_inner_absent() {
        let outer = GroupAttributes::new().prefix("admin");
        let inner = GroupAttributes::new();
        assert_eq!(inner.merge_onto(&outer).prefix.as_deref(), Some("admin"));
    }

    #[test]
    fn test_namespace_appends_unless_root_anchored() {
        let outer = GroupAttributes::new().namespace("App\\Http");
        let relative = GroupAttributes::new().namespace("Admin");
        assert_eq!(
            relative.merge_onto(&outer).namespace.as_deref(),
            Some("App\\Http\\Admin")
        );

        let absolute = GroupAttributes::new().namespace("\\Vendor\\Pkg");
        assert_eq!(
            absolute.merge_onto(&outer).namespace.as_deref(),
            Some("Vendor\\Pkg")
        );
    }

    #[test]
    fn test_inner_domain_replaces_outer() {
        let outer = GroupAttributes::new().domain("example.com");
        let inner = GroupAttributes::new().domain("admin.example.com");
        assert_eq!(
            inner.merge_onto(&outer).domain.as_deref(),
            Some("admin.example.com")
        );
        // Outer-only domain is inherited untouched.
        let plain = GroupAttributes::new();
        assert_eq!(plain.merge_onto(&outer).domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_alias_dot_joins() {
        let outer = GroupAttributes::new().alias("admin");
        let inner = GroupAttributes::new().alias("list");
        assert_eq!(inner.merge_onto(&outer).alias.as_deref(), Some("admin.list"));

        let no_outer = GroupAttributes::new();
        assert_eq!(inner.merge_onto(&no_outer).alias.as_deref(), Some("list"));
    }

    #[test]
    fn test_suffix_kept_only_when_inner_absent() {
        let outer = GroupAttributes::new().suffix(".html");
        assert_eq!(
            GroupAttributes::new().merge_onto(&outer).suffix.as_deref(),
            Some(".html")
        );
        assert_eq!(
            GroupAttributes::new()
                .suffix(".xml")
                .merge_onto(&outer)
                .suffix
                .as_deref(),
            Some(".xml")
        );
    }

    #[test]
    fn test_middleware_concatenates_outer_first_duplicates_kept() {
        let outer = GroupAttributes::new().middleware(["auth", "csrf"]);
        let inner = GroupAttributes::new().middleware(["auth"]);
        assert_eq!(inner.merge_onto(&outer).middleware, &["auth", "csrf", "auth"]);
    }

    #[test]
    fn test_middleware_string_splits_on_pipe() {
        let attrs = GroupAttributes::new().middleware_str("auth|csrf");
        assert_eq!(attrs.middleware, &["auth", "csrf"]);
    }

    #[test]
    fn test_extra_scalar_overrides_list_unions() {
        let outer = GroupAttributes::new()
            .attr("theme", AttrValue::Scalar("light".into()))
            .attr("tags", AttrValue::List(vec!["a".into()]));
        let inner = GroupAttributes::new()
            .attr("theme", AttrValue::Scalar("dark".into()))
            .attr("tags", AttrValue::List(vec!["b".into()]));

        let merged = inner.merge_onto(&outer);
        assert_eq!(merged.extra["theme"], AttrValue::Scalar("dark".into()));
        assert_eq!(
            merged.extra["tags"],
            AttrValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_stack_push_merges_with_top() {
        let mut stack = GroupStack::new();
        stack.push(GroupAttributes::new().prefix("admin").alias("admin"));
        stack.push(GroupAttributes::new().prefix("users").alias("users"));

        let active = stack.active().unwrap();
        assert_eq!(active.prefix.as_deref(), Some("admin/users"));
        assert_eq!(active.alias.as_deref(), Some("admin.users"));

        stack.pop();
        assert_eq!(stack.active().unwrap().prefix.as_deref(), Some("admin"));
        stack.pop();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_nested_merge_equals_left_to_right_fold() {
        let a = GroupAttributes::new().prefix("a").namespace("A").alias("a");
        let b = GroupAttributes::new().prefix("b").namespace("B").alias("b");
        let c = GroupAttributes::new().prefix("c").namespace("C").alias("c");

        // Stack discipline: push a, then b, then c.
        let mut stack = GroupStack::new();
        stack.push(a.clone());
        stack.push(b.clone());
        stack.push(c.clone());
        let nested = stack.active().unwrap().clone();

        // Explicit fold: (c onto (b onto a)).
        let folded = c.merge_onto(&b.merge_onto(&a));
        assert_eq!(nested, folded);
        assert_eq!(folded.prefix.as_deref(), Some("a/b/c"));
        assert_eq!(folded.namespace.as_deref(), Some("A\\B\\C"));
        assert_eq!(folded.alias.as_deref(), Some("a.b.c"));
    }
}
