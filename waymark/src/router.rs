//! The router: group scoping and route registration.

use crate::group::{GroupAttributes, GroupStack};
use crate::table::RouteTable;
use waymark_core::{Action, ConditionSet, MethodSet, Route};

/// A condition-driven route registry and dispatcher.
///
/// `C` is the host's request descriptor, `P` its condition provider, `R`
/// its current-resource resolver. Registration (including [`group`]
/// scoping) mutates the router and is expected to finish once, up front;
/// dispatch afterwards only reads the table and is safe to call
/// concurrently.
///
/// [`group`]: Router::group
///
/// # Example
///
/// ```rust,ignore
/// let mut router = Router::new(provider, resolver);
/// router.group(GroupAttributes::new().namespace("App\\Http"), |r| {
///     r.get("front_page", "HomeController@show");
///     r.get(
///         ConditionSet::new().when_any("page", ["about", "contact"]),
///         Action::uses("PageController@show").with_middleware(["cache"]),
///     );
/// });
/// ```
pub struct Router<C, P, R> {
    pub(crate) provider: P,
    pub(crate) resolver: R,
    stack: GroupStack,
    table: RouteTable<C>,
}

impl<C, P, R> Router<C, P, R> {
    /// Create a router around the host's collaborators.
    pub fn new(provider: P, resolver: R) -> Self {
        Self {
            provider,
            resolver,
            stack: GroupStack::new(),
            table: RouteTable::new(),
        }
    }

    /// Open a group scope around `body`.
    ///
    /// Routes registered inside `body` see the merged attributes of this
    /// group and every enclosing one. The scope is popped when `body`
    /// returns.
    pub fn group(&mut self, attrs: GroupAttributes, body: impl FnOnce(&mut Self)) {
        self.stack.push(attrs);
        body(self);
        self.stack.pop();
    }

    /// Like [`group`](Router::group), for a fallible body.
    ///
    /// The scope is popped on every exit path; an error from `body`
    /// propagates only after the stack is restored.
    pub fn try_group<E>(
        &mut self,
        attrs: GroupAttributes,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<(), E> {
        self.stack.push(attrs);
        let result = body(self);
        self.stack.pop();
        result
    }

    /// Register a route under every verb in `methods`.
    ///
    /// The active group's attributes are folded into the action now, in
    /// the fixed order alias, middleware, namespace. Registration order is
    /// dispatch priority order.
    pub fn add_route(
        &mut self,
        methods: MethodSet,
        conditions: impl Into<ConditionSet>,
        action: impl Into<Action<C>>,
    ) {
        let mut action = action.into();
        if let Some(group) = self.stack.active() {
            if let Some(alias) = &group.alias {
                action = action.prepend_alias(alias);
            }
            if !group.middleware.is_empty() {
                action = action.prepend_middleware(&group.middleware);
            }
            if let Some(namespace) = &group.namespace {
                action = action.prepend_namespace(namespace);
            }
        }
        self.table.insert(Route::new(methods, conditions.into(), action));
    }

    /// Register a GET route.
    pub fn get(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::GET, conditions, action);
    }

    /// Register a POST route.
    pub fn post(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::POST, conditions, action);
    }

    /// Register a PUT route.
    pub fn put(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::PUT, conditions, action);
    }

    /// Register a PATCH route.
    pub fn patch(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::PATCH, conditions, action);
    }

    /// Register a DELETE route.
    pub fn delete(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::DELETE, conditions, action);
    }

    /// Register an OPTIONS route.
    pub fn options(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::OPTIONS, conditions, action);
    }

    /// Register a route under all six verbs.
    pub fn any(&mut self, conditions: impl Into<ConditionSet>, action: impl Into<Action<C>>) {
        self.add_route(MethodSet::ANY, conditions, action);
    }

    /// Read-only snapshot of the registered routes, keyed by verb.
    pub fn routes(&self) -> &RouteTable<C> {
        &self.table
    }

    /// How many group scopes are currently open. Zero outside a
    /// definition pass.
    pub fn group_depth(&self) -> usize {
        self.stack.depth()
    }
}
