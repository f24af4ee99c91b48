//! HTTP verb value objects.

use crate::error::MethodParseError;
use std::fmt;
use std::str::FromStr;

/// An HTTP verb the router can register routes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
}

impl Method {
    /// All verbs the router recognizes, in canonical order.
    pub const ALL: [Method; 6] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Options,
    ];

    /// The canonical upper-case name of this verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = MethodParseError;

    /// Parses a verb name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(MethodParseError(s.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// A set of HTTP verbs a single route is registered under.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodSet: u8 {
        /// GET
        const GET = 1;
        /// POST
        const POST = 1 << 1;
        /// PUT
        const PUT = 1 << 2;
        /// PATCH
        const PATCH = 1 << 3;
        /// DELETE
        const DELETE = 1 << 4;
        /// OPTIONS
        const OPTIONS = 1 << 5;
        /// Every verb the router recognizes.
        const ANY = Self::GET.bits()
            | Self::POST.bits()
            | Self::PUT.bits()
            | Self::PATCH.bits()
            | Self::DELETE.bits()
            | Self::OPTIONS.bits();
    }
}

impl MethodSet {
    /// Iterate the individual verbs contained in this set, in canonical order.
    pub fn methods(self) -> impl Iterator<Item = Method> {
        Method::ALL
            .into_iter()
            .filter(move |m| self.contains(MethodSet::from(*m)))
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => MethodSet::GET,
            Method::Post => MethodSet::POST,
            Method::Put => MethodSet::PUT,
            Method::Patch => MethodSet::PATCH,
            Method::Delete => MethodSet::DELETE,
            Method::Options => MethodSet::OPTIONS,
        }
    }
}
