use super::{Node, NodeKind};
use crate::params::Params;

/// Result of walking a tree for one request path.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    /// No exact match, but the same path with a trailing slash added or
    /// removed would match. Acting on it is left to the caller.
    TrailingSlash,
    Missing,
}

impl<'a, T> Lookup<'a, T> {
    pub fn value(self) -> Option<&'a T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_trailing_slash(&self) -> bool {
        matches!(self, Lookup::TrailingSlash)
    }
}

impl<T> Node<T> {
    /// Finds the value bound to `path`, pushing captured parameters into
    /// `params`. Never mutates the tree. `params` is cleared unless the result
    /// is `Lookup::Found`.
    pub fn search<'a>(&'a self, path: &str, params: &mut Params) -> Lookup<'a, T> {
        let outcome = self.walk_path(path, params);
        if !outcome.is_found() {
            params.clear();
        }
        outcome
    }

    fn walk_path<'a>(&'a self, full_path: &str, params: &mut Params) -> Lookup<'a, T> {
        let mut node = self;
        let mut path = full_path.as_bytes();
        // set once the walk passes a route that matches with the last '/' dropped
        let mut strip_slash = false;

        let outcome = loop {
            let segment = node.segment.as_slice();

            if path.len() > segment.len() && path.starts_with(segment) {
                path = &path[segment.len()..];
                if path == b"/" && node.value.is_some() {
                    strip_slash = true;
                }

                if !node.wildcard_child {
                    match node.child_position(path[0]) {
                        Some(pos) => {
                            node = &node.children[pos];
                            continue;
                        }
                        None => break Lookup::Missing,
                    }
                }

                // captures start right after a '/' or an ASCII literal, so the
                // offsets fall on character boundaries of `full_path`
                let offset = full_path.len() - path.len();
                let child = &node.children[0];
                match child.kind {
                    NodeKind::Param => {
                        let end = memchr::memchr(b'/', path).unwrap_or(path.len());
                        if end == 0 {
                            break Lookup::Missing;
                        }
                        let Some(captured) = full_path.get(offset..offset + end) else {
                            break Lookup::Missing;
                        };
                        params.push(child.param_name().unwrap_or_default(), captured);

                        if end < path.len() {
                            path = &path[end..];
                            if path == b"/" && child.value.is_some() {
                                strip_slash = true;
                            }
                            match child.children.first() {
                                Some(next) => {
                                    node = next;
                                    continue;
                                }
                                None => break Lookup::Missing,
                            }
                        }

                        if let Some(value) = child.value.as_ref() {
                            break Lookup::Found(value);
                        }
                        let gains_slash = child.children.first().is_some_and(|next| {
                            (next.segment == b"/" && next.value.is_some())
                                || (next.segment.is_empty() && next.slash_child_matches())
                        });
                        break if gains_slash {
                            Lookup::TrailingSlash
                        } else {
                            Lookup::Missing
                        };
                    }
                    NodeKind::CatchAll => {
                        let Some(rest) = full_path.get(offset..) else {
                            break Lookup::Missing;
                        };
                        params.push(
                            child.param_name().unwrap_or_default(),
                            rest.strip_prefix('/').unwrap_or(rest),
                        );
                        break match child.value.as_ref() {
                            Some(value) => Lookup::Found(value),
                            None => Lookup::Missing,
                        };
                    }
                    NodeKind::Static | NodeKind::Root => break Lookup::Missing,
                }
            }

            if path == segment {
                if let Some(value) = node.value.as_ref() {
                    break Lookup::Found(value);
                }
                // "/x" can gain a slash when "/x/" or "/x/*rest" is a route
                break if node.slash_child_matches() {
                    Lookup::TrailingSlash
                } else {
                    Lookup::Missing
                };
            }

            let adds_slash = segment.len() == path.len() + 1
                && segment.ends_with(b"/")
                && segment.starts_with(path)
                && node.value.is_some();
            break if adds_slash {
                Lookup::TrailingSlash
            } else {
                Lookup::Missing
            };
        };

        match outcome {
            Lookup::Missing if strip_slash => Lookup::TrailingSlash,
            other => other,
        }
    }

    /// True when a path ending exactly at this node would match with a `/`
    /// appended, either through a `/` leaf or a catch-all hanging off `/`.
    fn slash_child_matches(&self) -> bool {
        let Some(pos) = self.child_position(b'/') else {
            return false;
        };
        let child = &self.children[pos];
        let slash_leaf = child.segment == b"/" && child.value.is_some();
        let catch_all = child.kind == NodeKind::CatchAll
            && child.children.first().is_some_and(|leaf| leaf.value.is_some());
        slash_leaf || catch_all
    }
}
