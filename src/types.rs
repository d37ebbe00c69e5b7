use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const HTTP_METHOD_COUNT: usize = 7;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported http method '{method}'")]
pub struct ParseMethodError {
    pub method: String,
}

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    /// Method names are case-sensitive, as on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseMethodError {
                method: s.to_string(),
            })
    }
}

bitflags! {
    /// Set of methods with a route for some path, used for `Allow` headers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodSet: u8 {
        const GET = 1 << HttpMethod::Get as u8;
        const POST = 1 << HttpMethod::Post as u8;
        const PUT = 1 << HttpMethod::Put as u8;
        const DELETE = 1 << HttpMethod::Delete as u8;
        const PATCH = 1 << HttpMethod::Patch as u8;
        const HEAD = 1 << HttpMethod::Head as u8;
        const OPTIONS = 1 << HttpMethod::Options as u8;
    }
}

impl MethodSet {
    #[inline]
    pub fn of(method: HttpMethod) -> Self {
        MethodSet::from_bits_truncate(1 << method as u8)
    }

    #[inline]
    pub fn contains_method(&self, method: HttpMethod) -> bool {
        self.contains(MethodSet::of(method))
    }

    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter(move |m| self.contains_method(*m))
    }

    /// Renders the set as an `Allow` header value, e.g. `GET, POST, OPTIONS`.
    pub fn to_header_value(&self) -> String {
        let mut out = String::new();
        for method in self.methods() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(method.as_str());
        }
        out
    }
}

impl From<HttpMethod> for MethodSet {
    fn from(method: HttpMethod) -> Self {
        MethodSet::of(method)
    }
}
