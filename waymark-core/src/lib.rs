//! # waymark-core
//!
//! Core traits and value objects for the Waymark conditional router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts and extensions that don't need the full `waymark` implementation.
//!
//! # Two-Layer Architecture
//!
//! Waymark is split into two layers:
//!
//! ## Layer 1: Contracts (this crate)
//!
//! The value objects a route is made of ([`Method`], [`ConditionSet`],
//! [`Action`], [`Route`]) and the collaborator seams the router calls out
//! through ([`ConditionProvider`], [`ResourceResolver`]). Hosts implement
//! the collaborator traits once, at startup, against whatever request
//! environment they run in.
//!
//! ## Layer 2: Machinery (`waymark`)
//!
//! The group stack, route table, and dispatcher. Routes are selected by
//! named boolean conditions evaluated against the current request — not by
//! URL patterns. The first registered route whose condition set holds wins.
//!
//! # Error Types
//!
//! - [`WaymarkError`] - Top-level error type
//! - [`MethodParseError`] - HTTP verb parse failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod condition;
mod error;
mod method;
mod request;
mod resource;
mod route;

// Re-exports
pub use action::{Action, Handler, NAMESPACE_SEPARATOR};
pub use condition::{Arg, ArgList, ConditionEntry, ConditionOutcome, ConditionProvider, ConditionSet};
pub use error::{BoxError, MethodParseError, WaymarkError};
pub use method::{Method, MethodSet};
pub use request::Request;
pub use resource::{MatchContext, Resource, ResourceKind, ResourceResolver};
pub use route::Route;
