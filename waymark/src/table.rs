//! The route table: per-verb buckets in registration order.

use std::collections::HashMap;
use std::sync::Arc;
use waymark_core::{Method, Route};

/// Registered routes, keyed by HTTP verb.
///
/// Insertion order within a verb bucket is dispatch priority order. A route
/// registered under several verbs is stored once and shared across its
/// buckets; routes are immutable after registration.
#[derive(Debug)]
pub struct RouteTable<C> {
    buckets: HashMap<Method, Vec<Arc<Route<C>>>>,
}

impl<C> Default for RouteTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RouteTable<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Append a route to the bucket of every verb it is registered under.
    pub fn insert(&mut self, route: Route<C>) {
        let route = Arc::new(route);
        for method in route.methods().methods() {
            self.buckets
                .entry(method)
                .or_default()
                .push(Arc::clone(&route));
        }
    }

    /// The routes registered under `method`, in registration order.
    ///
    /// A verb nothing was registered under yields an empty slice.
    pub fn bucket(&self, method: Method) -> &[Arc<Route<C>>] {
        self.buckets.get(&method).map_or(&[], Vec::as_slice)
    }

    /// Iterate all verb buckets.
    pub fn iter(&self) -> impl Iterator<Item = (Method, &[Arc<Route<C>>])> {
        self.buckets.iter().map(|(m, b)| (*m, b.as_slice()))
    }

    /// Total number of bucket entries across all verbs.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
