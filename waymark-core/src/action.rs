//! Actions: what a matched route hands back to its host.

use std::fmt;
use std::sync::Arc;

/// Separator between namespace segments in a handler reference.
///
/// A handler reference prefixed with this character is root-anchored and
/// ignores any enclosing group namespace during merging.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator for `|`-delimited middleware strings.
const MIDDLEWARE_SEPARATOR: char = '|';

/// What a route executes when it matches.
pub enum Handler<C> {
    /// A named handler reference, resolved by the host's kernel
    /// (e.g. `"App\Http\PageController@show"`).
    Uses(String),
    /// A direct callable, invoked with the matched request.
    Callback(Arc<dyn Fn(&C) + Send + Sync>),
}

impl<C> Handler<C> {
    /// The handler reference string, if this is a named handler.
    pub fn uses(&self) -> Option<&str> {
        match self {
            Handler::Uses(reference) => Some(reference),
            Handler::Callback(_) => None,
        }
    }
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        match self {
            Handler::Uses(reference) => Handler::Uses(reference.clone()),
            Handler::Callback(f) => Handler::Callback(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for Handler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Uses(reference) => f.debug_tuple("Uses").field(reference).finish(),
            Handler::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// The resolved handler descriptor a matched route yields to its host.
///
/// An action carries the handler itself, the middleware to run around it
/// (in order), and an optional name alias. Group attributes are folded in
/// at registration time through the `prepend_*` stages, applied in the
/// fixed order alias, middleware, namespace.
///
/// # Example
///
/// ```rust,ignore
/// let action = Action::uses("PageController@show")
///     .with_middleware(["auth"])
///     .with_alias("pages.show");
/// ```
pub struct Action<C> {
    handler: Handler<C>,
    middleware: Vec<String>,
    alias: Option<String>,
}

impl<C> Action<C> {
    /// Create an action from a named handler reference.
    pub fn uses(reference: impl Into<String>) -> Self {
        Self {
            handler: Handler::Uses(reference.into()),
            middleware: Vec::new(),
            alias: None,
        }
    }

    /// Create an action from a direct callable.
    pub fn callback(f: impl Fn(&C) + Send + Sync + 'static) -> Self {
        Self {
            handler: Handler::Callback(Arc::new(f)),
            middleware: Vec::new(),
            alias: None,
        }
    }

    /// Append middleware identifiers, in order. Duplicates are allowed.
    pub fn with_middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware.extend(middleware.into_iter().map(Into::into));
        self
    }

    /// Append middleware given as a `|`-delimited string.
    ///
    /// `"auth|csrf"` appends `["auth", "csrf"]`; an empty string appends
    /// nothing.
    pub fn with_middleware_str(self, middleware: &str) -> Self {
        let split = middleware
            .split(MIDDLEWARE_SEPARATOR)
            .filter(|s| !s.is_empty());
        self.with_middleware(split)
    }

    /// Set the action's name alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The handler this action executes.
    pub fn handler(&self) -> &Handler<C> {
        &self.handler
    }

    /// The middleware identifiers, in execution order.
    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }

    /// The name alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Group-folding stage 1: dot-prefix the alias with a group alias.
    ///
    /// An action with no alias of its own inherits the group alias alone.
    pub fn prepend_alias(mut self, group_alias: &str) -> Self {
        self.alias = Some(match self.alias.take() {
            Some(own) => format!("{}.{}", group_alias, own),
            None => group_alias.to_string(),
        });
        self
    }

    /// Group-folding stage 2: group middleware runs before the action's own.
    pub fn prepend_middleware(mut self, group_middleware: &[String]) -> Self {
        let mut merged = group_middleware.to_vec();
        merged.append(&mut self.middleware);
        self.middleware = merged;
        self
    }

    /// Group-folding stage 3: qualify a named handler with a group namespace.
    ///
    /// Callback handlers are untouched.
    pub fn prepend_namespace(mut self, namespace: &str) -> Self {
        if let Handler::Uses(reference) = &self.handler {
            self.handler = Handler::Uses(format!(
                "{}{}{}",
                namespace.trim_matches(NAMESPACE_SEPARATOR),
                NAMESPACE_SEPARATOR,
                reference
            ));
        }
        self
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            middleware: self.middleware.clone(),
            alias: self.alias.clone(),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("handler", &self.handler)
            .field("middleware", &self.middleware)
            .field("alias", &self.alias)
            .finish()
    }
}

impl<C> From<&str> for Action<C> {
    /// A bare string is a named handler reference.
    fn from(reference: &str) -> Self {
        Action::uses(reference)
    }
}

impl<C> From<String> for Action<C> {
    fn from(reference: String) -> Self {
        Action::uses(reference)
    }
}
