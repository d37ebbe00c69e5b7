use crate::router::{Handler, Middleware, RouterResult};
use crate::types::HttpMethod;

/// Route registration shared by `Router` and `Group`. Only `route` is
/// required; the verb helpers register without route-level middleware.
pub trait Routes<C> {
    fn route(
        &self,
        method: HttpMethod,
        path: &str,
        handler: Handler<C>,
        middlewares: &[Middleware<C>],
    ) -> RouterResult<()>;

    fn get(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Get, path, handler, &[])
    }

    fn post(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Post, path, handler, &[])
    }

    fn put(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Put, path, handler, &[])
    }

    fn patch(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Patch, path, handler, &[])
    }

    fn delete(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Delete, path, handler, &[])
    }

    fn head(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Head, path, handler, &[])
    }

    fn options(&self, path: &str, handler: Handler<C>) -> RouterResult<()> {
        self.route(HttpMethod::Options, path, handler, &[])
    }
}
