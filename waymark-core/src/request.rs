//! Request marker trait.

/// A marker trait for the request descriptor threaded through dispatch.
///
/// The router never inspects the request itself; it hands it to the host's
/// [`ConditionProvider`](crate::ConditionProvider) and
/// [`ResourceResolver`](crate::ResourceResolver). Passing the descriptor
/// explicitly keeps "what is currently being requested" out of ambient
/// global state.
///
/// # Example
///
/// ```rust,ignore
/// struct WebRequest { path: String, query: QueryState }
///
/// impl Request for WebRequest {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must be `Send + Sync + 'static`",
    note = "Request descriptors in Waymark must be thread-safe and static."
)]
pub trait Request: Send + Sync + 'static {}

// Common Request implementations
impl Request for () {}
impl<T: Request> Request for Box<T> {}
impl<T: Request> Request for std::sync::Arc<T> {}
