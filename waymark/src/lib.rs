//! # waymark - Condition-Driven Route Registry and Dispatcher
//!
//! `waymark` maps an incoming (HTTP verb, request) pair to a registered
//! handler action by evaluating named boolean conditions against the
//! current request — not by parsing the URI. URL-to-resource resolution
//! stays with the host; a route's selection criterion is any OR-combination
//! of named conditions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waymark::{Action, ConditionRegistry, ConditionSet, GroupAttributes, Method, Router};
//!
//! let registry = ConditionRegistry::builder()
//!     .register("front_page", |req: &MyRequest, _| req.is_front_page())
//!     .register("page", |req, args| req.is_page(args))
//!     .build();
//!
//! let mut router = Router::new(registry, my_resolver);
//! router.group(GroupAttributes::new().namespace("App\\Http").alias("site"), |r| {
//!     r.get("front_page", "HomeController@show");
//!     r.get(ConditionSet::new().when_any("page", ["about", "contact"]),
//!           Action::uses("PageController@show").with_alias("page"));
//! });
//!
//! match router.dispatch(Method::Get, &request) {
//!     outcome if outcome.is_match() => { /* run outcome.action() */ }
//!     _ => { /* fall through to the host's 404 */ }
//! }
//! ```
//!
//! Registration (group push/pop included) mutates the router and must
//! finish before dispatch begins; dispatch itself is read-only and safe to
//! call concurrently.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Modules
pub mod dispatch;
pub mod group;
pub mod registry;
pub mod router;
pub mod table;
pub mod testing;

// Re-export core contracts
pub use waymark_core::{
    Action, Arg, ArgList, BoxError, ConditionEntry, ConditionOutcome, ConditionProvider,
    ConditionSet, Handler, MatchContext, Method, MethodParseError, MethodSet, NAMESPACE_SEPARATOR,
    Request, Resource, ResourceKind, ResourceResolver, Route, WaymarkError,
};

pub use dispatch::DispatchOutcome;
pub use group::{AttrValue, GroupAttributes, GroupStack};
pub use registry::{ConditionRegistry, ConditionRegistryBuilder};
pub use router::Router;
pub use table::RouteTable;
