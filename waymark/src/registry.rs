//! Standard condition registry backed by typed predicate functions.

use std::collections::HashMap;
use waymark_core::{Arg, ConditionOutcome, ConditionProvider, Request};

type PredicateFn<C> = Box<dyn Fn(&C, &[Arg]) -> bool + Send + Sync>;

/// A [`ConditionProvider`] over predicate functions registered at startup.
///
/// Names the registry does not know evaluate to
/// [`ConditionOutcome::Unsupported`], so routes may declare conditions the
/// host never registered without failing dispatch.
pub struct ConditionRegistry<C> {
    predicates: HashMap<String, PredicateFn<C>>,
}

impl<C: Request> ConditionRegistry<C> {
    /// Start building a registry.
    pub fn builder() -> ConditionRegistryBuilder<C> {
        ConditionRegistryBuilder::new()
    }

    /// Whether a predicate is registered under `name`.
    pub fn supports(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether no predicates are registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<C: Request> ConditionProvider<C> for ConditionRegistry<C> {
    fn evaluate(&self, name: &str, args: &[Arg], request: &C) -> ConditionOutcome {
        match self.predicates.get(name) {
            Some(predicate) if predicate(request, args) => ConditionOutcome::Matched,
            Some(_) => ConditionOutcome::NotMatched,
            None => ConditionOutcome::Unsupported,
        }
    }
}

/// Builder for constructing a [`ConditionRegistry`].
pub struct ConditionRegistryBuilder<C> {
    predicates: HashMap<String, PredicateFn<C>>,
}

impl<C: Request> Default for ConditionRegistryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Request> ConditionRegistryBuilder<C> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Register a predicate under `name`. Re-registering a name replaces
    /// the earlier predicate.
    pub fn register<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C, &[Arg]) -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Box::new(predicate));
        self
    }

    /// Build the registry.
    pub fn build(self) -> ConditionRegistry<C> {
        ConditionRegistry {
            predicates: self.predicates,
        }
    }
}
