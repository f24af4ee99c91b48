//! Testing utilities for Waymark.
//!
//! Reusable stand-ins for the host collaborators:
//!
//! - [`TestResource`]: a fixed-value domain object
//! - [`StaticResolver`]: a resolver that always returns the same subject
//! - [`RecordingProvider`]: wraps a provider and records evaluation order

use std::sync::{Arc, Mutex};
use waymark_core::{
    Arg, ConditionOutcome, ConditionProvider, Request, Resource, ResourceKind, ResourceResolver,
};

/// A fixed-value [`Resource`] for tests.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = StaticResolver::of(TestResource::post(42).with_type("page"));
/// ```
#[derive(Debug, Clone)]
pub struct TestResource {
    id: u64,
    kind: ResourceKind,
    type_name: Option<String>,
}

impl TestResource {
    /// A post-like resource with the given id.
    pub fn post(id: u64) -> Self {
        Self {
            id,
            kind: ResourceKind::Post,
            type_name: None,
        }
    }

    /// A term-like resource with the given id.
    pub fn term(id: u64) -> Self {
        Self {
            id,
            kind: ResourceKind::Term,
            type_name: None,
        }
    }

    /// A user-like resource with the given id.
    pub fn user(id: u64) -> Self {
        Self {
            id,
            kind: ResourceKind::User,
            type_name: None,
        }
    }

    /// Set the type discriminator (post type or taxonomy).
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

impl Resource for TestResource {
    fn id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

/// A resolver that resolves every request to the same subject (or none).
pub struct StaticResolver {
    resource: Option<Arc<dyn Resource>>,
}

impl StaticResolver {
    /// A resolver that never resolves a subject.
    pub fn none() -> Self {
        Self { resource: None }
    }

    /// A resolver that always resolves the given resource.
    pub fn of(resource: impl Resource + 'static) -> Self {
        Self {
            resource: Some(Arc::new(resource)),
        }
    }
}

impl<C: Request> ResourceResolver<C> for StaticResolver {
    fn resolve(&self, _request: &C) -> Option<Arc<dyn Resource>> {
        self.resource.clone()
    }
}

/// A provider wrapper that records every evaluation it delegates.
///
/// Useful for asserting evaluation order and short-circuiting.
///
/// # Example
///
/// ```rust,ignore
/// let provider = RecordingProvider::new(registry);
/// let router = Router::new(provider, StaticResolver::none());
/// // ... dispatch ...
/// assert_eq!(router_provider_calls, vec![("page".into(), vec![Arg::from("about")])]);
/// ```
pub struct RecordingProvider<P> {
    inner: P,
    calls: Arc<Mutex<Vec<(String, Vec<Arg>)>>>,
}

impl<P> RecordingProvider<P> {
    /// Wrap a provider.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handle to the recorded calls, shared with the wrapper.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<(String, Vec<Arg>)>>> {
        Arc::clone(&self.calls)
    }

    /// The `(name, args)` pairs evaluated so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<Arg>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl<C, P> ConditionProvider<C> for RecordingProvider<P>
where
    C: Request,
    P: ConditionProvider<C>,
{
    fn evaluate(&self, name: &str, args: &[Arg], request: &C) -> ConditionOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), args.to_vec()));
        self.inner.evaluate(name, args, request)
    }
}
