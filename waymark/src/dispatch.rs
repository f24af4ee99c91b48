//! The dispatcher: first-match scan over a verb bucket.

use crate::router::Router;
use std::fmt;
use waymark_core::{
    Action, ConditionOutcome, ConditionProvider, MatchContext, Method, Request, ResourceResolver,
};

/// The result of dispatching one request.
pub enum DispatchOutcome<'a, C> {
    /// A route matched: the action to execute and the context objects the
    /// match implies.
    Matched {
        /// The matched route's action.
        action: &'a Action<C>,
        /// The resolved request subject, keyed by role.
        context: MatchContext,
    },
    /// No registered route's conditions hold for this request.
    NoMatch,
}

impl<'a, C> DispatchOutcome<'a, C> {
    /// Whether a route matched.
    pub fn is_match(&self) -> bool {
        matches!(self, DispatchOutcome::Matched { .. })
    }

    /// The matched action, if any.
    pub fn action(&self) -> Option<&'a Action<C>> {
        match self {
            DispatchOutcome::Matched { action, .. } => Some(*action),
            DispatchOutcome::NoMatch => None,
        }
    }

    /// The matched context, if any.
    pub fn context(&self) -> Option<&MatchContext> {
        match self {
            DispatchOutcome::Matched { context, .. } => Some(context),
            DispatchOutcome::NoMatch => None,
        }
    }
}

impl<C> fmt::Debug for DispatchOutcome<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Matched { action, context } => f
                .debug_struct("Matched")
                .field("action", action)
                .field("context", context)
                .finish(),
            DispatchOutcome::NoMatch => f.write_str("NoMatch"),
        }
    }
}

impl<C, P, R> Router<C, P, R>
where
    C: Request,
    P: ConditionProvider<C>,
    R: ResourceResolver<C>,
{
    /// Find the first route under `method` whose conditions hold for
    /// `request`.
    ///
    /// Routes are scanned in registration order; within a route, condition
    /// entries and their argument lists are tried in declaration order.
    /// The first predicate invocation that holds selects the route — no
    /// specificity scoring. A condition the provider reports as
    /// [`Unsupported`](ConditionOutcome::Unsupported) is skipped, not
    /// treated as failed.
    ///
    /// Takes `&self` only; once definition is done this is safe to call
    /// concurrently.
    pub fn dispatch(&self, method: Method, request: &C) -> DispatchOutcome<'_, C> {
        for route in self.routes().bucket(method) {
            for entry in route.conditions().entries() {
                for args in entry.arg_lists() {
                    match self.provider.evaluate(entry.name(), args, request) {
                        ConditionOutcome::Matched => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(%method, condition = entry.name(), "route matched");
                            let context =
                                MatchContext::from_resource(self.resolver.resolve(request));
                            return DispatchOutcome::Matched {
                                action: route.action(),
                                context,
                            };
                        }
                        ConditionOutcome::NotMatched => continue,
                        // Unknown predicate: skip the rest of this entry.
                        ConditionOutcome::Unsupported => break,
                    }
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%method, "no route matched");
        DispatchOutcome::NoMatch
    }
}
