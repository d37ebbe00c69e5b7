pub mod context;
pub mod params;
pub mod path;
pub mod radix;
pub mod registry;
pub mod router;
pub mod types;

pub use context::{Context, RequestContext, Response};
pub use params::{Param, Params};
pub use path::clean_path;
pub use radix::{Lookup, Node, NodeKind, RadixError};
pub use registry::{RegistryMetrics, RouteInfo};
pub use router::{
    Dispatch, Group, Handler, HandlerError, HandlerResult, Middleware, RouteMatch, Router, RouterError,
    RouterOptions, RouterOptionsBuilder, RouterResult, Routes, handler_fn, middleware_fn,
};
pub use types::{HttpMethod, MethodSet, ParseMethodError};
