use crate::context::{Context, RequestContext};
use crate::params::Params;
use crate::path::clean_path;
use crate::radix::{Lookup, Node};
use crate::registry::{RegistryMetrics, RouteInfo, RouteRegistry};
use crate::router::handler::compose;
use crate::router::{
    Dispatch, Group, Handler, Middleware, RouteMatch, RouterError, RouterOptions, RouterResult, Routes,
};
use crate::types::{HttpMethod, MethodSet};
use parking_lot::RwLock;
use std::fmt;
use tracing::{Level, event};

struct RouterState<C> {
    registry: RouteRegistry<Handler<C>>,
    middlewares: Vec<Middleware<C>>,
    sealed: bool,
}

impl<C> RouterState<C> {
    fn new() -> Self {
        Self {
            registry: RouteRegistry::new(),
            middlewares: Vec::new(),
            sealed: false,
        }
    }
}

enum Resolved<C> {
    Route(Handler<C>),
    Fallback(Dispatch),
}

/// Per-method radix trees of composed handlers.
///
/// Registration takes the write lock; lookups share the read lock and drop
/// it before a handler runs, so handlers may call back into the router.
pub struct Router<C = RequestContext> {
    inner: RwLock<RouterState<C>>,
    options: RouterOptions,
}

impl<C> Router<C> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState::new()),
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Appends global middlewares. They wrap routes registered after this
    /// call; routes already in the tree keep their composed chain.
    pub fn use_middleware<I>(&self, middlewares: I)
    where
        I: IntoIterator<Item = Middleware<C>>,
    {
        self.inner.write().middlewares.extend(middlewares);
    }

    pub fn group(&self, prefix: &str, middlewares: &[Middleware<C>]) -> Group<'_, C> {
        Group::new(self, prefix.to_string(), middlewares.to_vec())
    }

    /// Rejects further registrations. Lookups are unaffected.
    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.sealed {
            return;
        }
        guard.sealed = true;
        event!(
            Level::DEBUG,
            operation = "seal",
            routes = guard.registry.routes().len() as u64,
            "router sealed"
        );
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> Option<RouteMatch<C>> {
        let guard = self.inner.read();
        let mut params = Params::new();
        let handler = guard.registry.search(method, path, &mut params).value()?.clone();
        Some(RouteMatch { handler, params })
    }

    /// Methods with a route for `path`, OPTIONS included when any exist.
    pub fn allowed(&self, path: &str) -> MethodSet {
        self.inner.read().registry.allowed(path, None)
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.inner.read().registry.routes().to_vec()
    }

    pub fn route_count(&self) -> usize {
        self.inner.read().registry.routes().len()
    }

    pub fn metrics(&self) -> RegistryMetrics {
        self.inner.read().registry.metrics().clone()
    }

    /// Runs `f` against the tree for `method`, if one exists.
    pub fn inspect_tree<R>(&self, method: HttpMethod, f: impl FnOnce(&Node<Handler<C>>) -> R) -> Option<R> {
        let guard = self.inner.read();
        guard.registry.tree(method).map(f)
    }

    fn resolve(&self, method: HttpMethod, path: &str, params: &mut Params) -> Resolved<C> {
        let guard = self.inner.read();
        let registry = &guard.registry;

        let trailing_slash = match registry.search(method, path, params) {
            Lookup::Found(handler) => return Resolved::Route(handler.clone()),
            Lookup::TrailingSlash => true,
            Lookup::Missing => false,
        };

        if path != "/" {
            if trailing_slash && self.options.redirect_trailing_slash {
                let location = match path.strip_suffix('/') {
                    Some(trimmed) => trimmed.to_string(),
                    None => format!("{path}/"),
                };
                return Resolved::Fallback(Dispatch::Redirect { location });
            }

            if self.options.redirect_fixed_path {
                let fixed = clean_path(path);
                if fixed != path && registry.search(method, &fixed, &mut Params::new()).is_found() {
                    return Resolved::Fallback(Dispatch::Redirect { location: fixed });
                }
            }
        }

        if method == HttpMethod::Options {
            if self.options.handle_options {
                let allowed = registry.allowed(path, Some(method));
                if !allowed.is_empty() {
                    return Resolved::Fallback(Dispatch::Options { allowed });
                }
            }
        } else if self.options.handle_method_not_allowed {
            let allowed = registry.allowed(path, Some(method));
            if !allowed.is_empty() {
                return Resolved::Fallback(Dispatch::MethodNotAllowed { allowed });
            }
        }

        Resolved::Fallback(Dispatch::NotFound)
    }
}

impl<C: Context> Router<C> {
    /// Routes one request. On a match the captured parameters are stored in
    /// `ctx` before the composed handler runs; a handler failure comes back
    /// as `RouterError::Handler`.
    pub fn dispatch(&self, method: HttpMethod, path: &str, ctx: &mut C) -> RouterResult<Dispatch> {
        let mut params = Params::new();
        match self.resolve(method, path, &mut params) {
            Resolved::Route(handler) => {
                ctx.set_params(params);
                handler(ctx).map_err(|source| RouterError::Handler {
                    method,
                    path: path.to_string(),
                    source,
                })?;
                Ok(Dispatch::Handled)
            }
            Resolved::Fallback(outcome) => Ok(outcome),
        }
    }

    /// `dispatch` using the method and path carried by `ctx`.
    pub fn serve(&self, ctx: &mut C) -> RouterResult<Dispatch> {
        let method = ctx.method();
        let path = ctx.path().to_string();
        self.dispatch(method, &path, ctx)
    }
}

impl<C> Routes<C> for Router<C> {
    fn route(
        &self,
        method: HttpMethod,
        path: &str,
        handler: Handler<C>,
        middlewares: &[Middleware<C>],
    ) -> RouterResult<()> {
        let sealed = || RouterError::AddWhileSealed {
            method,
            path: path.to_string(),
        };

        // middleware factories run without the lock held so they may call back
        // into the router
        let globals = {
            let guard = self.inner.read();
            if guard.sealed {
                return Err(sealed());
            }
            guard.middlewares.clone()
        };
        let composed = compose(handler, middlewares, &globals);

        let mut guard = self.inner.write();
        if guard.sealed {
            return Err(sealed());
        }
        guard.registry.insert(method, path, composed)?;

        event!(
            Level::DEBUG,
            operation = "route",
            method = %method,
            path = %path,
            middlewares = middlewares.len() as u64,
            "route registered"
        );
        Ok(())
    }
}

impl<C> Default for Router<C> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<C> fmt::Debug for Router<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("sealed", &guard.sealed)
            .field("registry", &guard.registry)
            .field("middlewares", &guard.middlewares.len())
            .finish()
    }
}
