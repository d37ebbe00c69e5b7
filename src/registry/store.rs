use crate::params::Params;
use crate::radix::{Lookup, Node, RadixResult};
use crate::registry::RegistryMetrics;
use crate::types::{HTTP_METHOD_COUNT, HttpMethod, MethodSet};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: HttpMethod,
    pub path: String,
}

/// One radix tree per method plus the list of registered routes.
pub struct RouteRegistry<T> {
    trees: [Option<Node<T>>; HTTP_METHOD_COUNT],
    routes: Vec<RouteInfo>,
    metrics: RegistryMetrics,
}

impl<T> Default for RouteRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteRegistry<T> {
    pub fn new() -> Self {
        Self {
            trees: std::array::from_fn(|_| None),
            routes: Vec::new(),
            metrics: RegistryMetrics::default(),
        }
    }

    pub fn insert(&mut self, method: HttpMethod, path: &str, value: T) -> RadixResult<()> {
        let slot = &mut self.trees[method.index()];
        let root = slot.get_or_insert_with(Node::new);

        if let Err(err) = root.add_route(path, value) {
            // a root created for this call and left empty is dropped again
            if root.is_empty() {
                *slot = None;
            }
            self.metrics.record_rejection();
            return Err(err);
        }

        self.routes.push(RouteInfo {
            method,
            path: path.to_string(),
        });
        self.metrics.record_insert();
        Ok(())
    }

    pub fn search<'a>(&'a self, method: HttpMethod, path: &str, params: &mut Params) -> Lookup<'a, T> {
        if !path.starts_with('/') {
            params.clear();
            return Lookup::Missing;
        }
        match self.trees[method.index()].as_ref() {
            Some(root) => root.search(path, params),
            None => {
                params.clear();
                Lookup::Missing
            }
        }
    }

    /// Methods other than `exclude` with a route matching `path`. The path
    /// `*` asks for every method with at least one route.
    pub fn allowed(&self, path: &str, exclude: Option<HttpMethod>) -> MethodSet {
        let mut allowed = MethodSet::empty();
        let mut params = Params::new();

        for method in HttpMethod::ALL {
            if Some(method) == exclude || method == HttpMethod::Options {
                continue;
            }
            let Some(root) = self.trees[method.index()].as_ref() else {
                continue;
            };
            if path == "*" || root.search(path, &mut params).is_found() {
                allowed |= MethodSet::of(method);
            }
        }

        if !allowed.is_empty() {
            allowed |= MethodSet::OPTIONS;
        }
        allowed
    }

    pub fn tree(&self, method: HttpMethod) -> Option<&Node<T>> {
        self.trees[method.index()].as_ref()
    }

    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl<T> fmt::Debug for RouteRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .field("metrics", &self.metrics)
            .finish()
    }
}
