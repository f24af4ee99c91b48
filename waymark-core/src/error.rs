//! Error types for Waymark.
//!
//! "No match" during dispatch is not an error; it is a variant of the
//! dispatch outcome. The types here cover input that cannot be understood
//! at all, plus an escape hatch for host-side failures.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Waymark operations.
#[derive(Error, Debug)]
pub enum WaymarkError {
    /// An HTTP verb name could not be parsed.
    #[error("method parse error: {0}")]
    Method(#[from] MethodParseError),

    /// A custom error from a host collaborator.
    #[error(transparent)]
    Custom(BoxError),
}

impl From<BoxError> for WaymarkError {
    fn from(err: BoxError) -> Self {
        WaymarkError::Custom(err)
    }
}

/// The given string does not name an HTTP verb the router recognizes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HTTP method: {0}")]
pub struct MethodParseError(pub(crate) String);

impl MethodParseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}
