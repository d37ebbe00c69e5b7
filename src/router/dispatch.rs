use crate::params::Params;
use crate::router::Handler;
use crate::types::MethodSet;
use std::fmt;

/// Outcome of routing one request. Everything except `Handled` is a
/// recommendation; the transport decides how to answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// The same resource lives at `location`. The location is a path only;
    /// the caller re-attaches any query string.
    Redirect { location: String },
    MethodNotAllowed { allowed: MethodSet },
    /// OPTIONS request answered from the registered routes.
    Options { allowed: MethodSet },
    NotFound,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled)
    }

    /// The `Allow` header value for outcomes that carry one.
    pub fn allow_header(&self) -> Option<String> {
        match self {
            Dispatch::MethodNotAllowed { allowed } | Dispatch::Options { allowed } => {
                Some(allowed.to_header_value())
            }
            _ => None,
        }
    }
}

/// A matched route, detached from the router lock.
pub struct RouteMatch<C> {
    pub handler: Handler<C>,
    pub params: Params,
}

impl<C> fmt::Debug for RouteMatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
