//! The registered route record.

use crate::action::Action;
use crate::condition::ConditionSet;
use crate::method::MethodSet;

/// One registered route: the verbs it answers, the conditions that select
/// it, and the action it yields when selected.
///
/// Routes are immutable once registered. Registration order is significant:
/// within a verb bucket the first-registered route is the first evaluated.
#[derive(Debug, Clone)]
pub struct Route<C> {
    methods: MethodSet,
    conditions: ConditionSet,
    action: Action<C>,
}

impl<C> Route<C> {
    /// Create a route. Normalization of conditions and action has already
    /// happened in their constructors.
    pub fn new(methods: MethodSet, conditions: ConditionSet, action: Action<C>) -> Self {
        Self {
            methods,
            conditions,
            action,
        }
    }

    /// The verbs this route is registered under.
    pub fn methods(&self) -> MethodSet {
        self.methods
    }

    /// The condition set that selects this route.
    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    /// The action a match yields.
    pub fn action(&self) -> &Action<C> {
        &self.action
    }
}
