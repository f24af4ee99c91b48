//! The current-resource seam and the dispatch context built from it.

use crate::request::Request;
use std::fmt;
use std::sync::Arc;

/// The role a resolved domain object plays in a dispatch context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A post-like object (pages, posts, custom content types).
    Post,
    /// A taxonomy-term-like object (categories, tags).
    Term,
    /// A user-like object (author archives, profiles).
    User,
}

/// A resolved domain object for the currently requested subject.
///
/// The host decides what concrete types back these; the router only needs
/// an identifier and the role discriminator.
pub trait Resource: Send + Sync {
    /// The object's identifier.
    fn id(&self) -> u64;

    /// Which role this object plays.
    fn kind(&self) -> ResourceKind;

    /// The finer type discriminator, when one exists: the post type for
    /// posts, the taxonomy for terms.
    fn type_name(&self) -> Option<&str> {
        None
    }
}

/// The current-resource resolution seam implemented by the host.
///
/// Answers "what object is this request for", already resolved against the
/// host's lookup machinery. Returning `None` means the request has no
/// resolvable subject.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve resources for requests of type `{C}`",
    label = "missing `ResourceResolver` implementation",
    note = "Implement `ResourceResolver<{C}>` to supply the currently requested object."
)]
pub trait ResourceResolver<C: Request>: Send + Sync {
    /// Resolve the currently requested domain object, if any.
    fn resolve(&self, request: &C) -> Option<Arc<dyn Resource>>;
}

/// The context objects implied by a dispatch match.
///
/// At most one role is ever populated per dispatch; the variants make that
/// exclusivity structural rather than a convention over a map.
#[derive(Clone, Default)]
pub enum MatchContext {
    /// No subject was resolved for the request.
    #[default]
    Empty,
    /// The request is for a post-like object.
    Post(Arc<dyn Resource>),
    /// The request is for a taxonomy term.
    Term(Arc<dyn Resource>),
    /// The request is for a user.
    User(Arc<dyn Resource>),
}

impl MatchContext {
    /// Build a context from whatever the resolver returned, keyed by the
    /// object's role.
    pub fn from_resource(resource: Option<Arc<dyn Resource>>) -> Self {
        match resource {
            Some(r) => match r.kind() {
                ResourceKind::Post => MatchContext::Post(r),
                ResourceKind::Term => MatchContext::Term(r),
                ResourceKind::User => MatchContext::User(r),
            },
            None => MatchContext::Empty,
        }
    }

    /// The resolved post, if the context carries one.
    pub fn post(&self) -> Option<&dyn Resource> {
        match self {
            MatchContext::Post(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// The resolved term, if the context carries one.
    pub fn term(&self) -> Option<&dyn Resource> {
        match self {
            MatchContext::Term(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// The resolved user, if the context carries one.
    pub fn user(&self) -> Option<&dyn Resource> {
        match self {
            MatchContext::User(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// Whether no subject was resolved.
    pub fn is_empty(&self) -> bool {
        matches!(self, MatchContext::Empty)
    }

    /// The role of the resolved subject, if any.
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            MatchContext::Empty => None,
            MatchContext::Post(_) => Some(ResourceKind::Post),
            MatchContext::Term(_) => Some(ResourceKind::Term),
            MatchContext::User(_) => Some(ResourceKind::User),
        }
    }
}

impl fmt::Debug for MatchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchContext::Empty => f.write_str("Empty"),
            MatchContext::Post(r) => f.debug_tuple("Post").field(&r.id()).finish(),
            MatchContext::Term(r) => f.debug_tuple("Term").field(&r.id()).finish(),
            MatchContext::User(r) => f.debug_tuple("User").field(&r.id()).finish(),
        }
    }
}
