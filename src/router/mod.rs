mod dispatch;
mod errors;
mod group;
mod handler;
mod options;
mod routes;
mod service;

pub use dispatch::{Dispatch, RouteMatch};
pub use errors::{RouterError, RouterResult};
pub use group::Group;
pub use handler::{Handler, HandlerError, HandlerResult, Middleware, handler_fn, middleware_fn};
pub use options::{RouterOptions, RouterOptionsBuilder};
pub use routes::Routes;
pub use service::Router;
