use crate::path::join_paths;
use crate::router::{Handler, Middleware, Router, RouterResult, Routes};
use crate::types::HttpMethod;
use std::fmt;

/// A path prefix plus middlewares applied to every route registered through
/// it. Groups only exist at registration time; they leave no node behind.
pub struct Group<'r, C> {
    router: &'r Router<C>,
    prefix: String,
    middlewares: Vec<Middleware<C>>,
}

impl<'r, C> Group<'r, C> {
    pub(crate) fn new(router: &'r Router<C>, prefix: String, middlewares: Vec<Middleware<C>>) -> Self {
        Self {
            router,
            prefix,
            middlewares,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Appends to this group's middlewares. Only routes registered afterwards
    /// see them.
    pub fn use_middleware<I>(&mut self, middlewares: I)
    where
        I: IntoIterator<Item = Middleware<C>>,
    {
        self.middlewares.extend(middlewares);
    }

    /// Nested group: prefixes concatenate and this group's middlewares run
    /// before the nested ones.
    pub fn group(&self, prefix: &str, middlewares: &[Middleware<C>]) -> Group<'r, C> {
        let mut chain = self.middlewares.clone();
        chain.extend_from_slice(middlewares);
        Group::new(self.router, join_paths(&self.prefix, prefix), chain)
    }
}

impl<C> Routes<C> for Group<'_, C> {
    fn route(
        &self,
        method: HttpMethod,
        path: &str,
        handler: Handler<C>,
        middlewares: &[Middleware<C>],
    ) -> RouterResult<()> {
        let full_path = join_paths(&self.prefix, path);
        if middlewares.is_empty() {
            return self.router.route(method, &full_path, handler, &self.middlewares);
        }
        let mut chain = self.middlewares.clone();
        chain.extend_from_slice(middlewares);
        self.router.route(method, &full_path, handler, &chain)
    }
}

impl<C> fmt::Debug for Group<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("prefix", &self.prefix)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
