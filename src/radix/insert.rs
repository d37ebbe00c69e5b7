use super::wildcard::{Wildcard, find_wildcard, is_wildcard_marker, lossy, validate_route_path};
use super::{Node, NodeKind, RadixError, RadixResult};
use smallvec::smallvec;

impl<T> Node<T> {
    /// Registers `value` at `path` in the tree rooted at this node.
    ///
    /// The path must start with `/`. Wildcard syntax is checked up front; the
    /// remaining failures (duplicates and conflicts with existing routes) are
    /// detected during the walk and leave every previously registered route
    /// reachable.
    pub fn add_route(&mut self, path: &str, value: T) -> RadixResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "add_route", path = %path);
        validate_route_path(path)?;
        self.priority += 1;

        if self.segment.is_empty() && self.children.is_empty() {
            self.insert_child(path.as_bytes(), path, value)?;
            self.kind = NodeKind::Root;
            return Ok(());
        }

        self.insert_route(path.as_bytes(), path, value)
    }

    /// `path` is relative to this node; `full_path` is only used for errors.
    fn insert_route(&mut self, path: &[u8], full_path: &str, value: T) -> RadixResult<()> {
        let common = longest_common_prefix(path, &self.segment);

        if common < self.segment.len() {
            self.split_at(common);
        }

        if common == path.len() {
            if self.value.is_some() {
                return Err(RadixError::DuplicateRoute {
                    path: full_path.to_string(),
                });
            }
            self.value = Some(value);
            return Ok(());
        }

        let rest = &path[common..];

        if self.wildcard_child {
            let child = &mut self.children[0];
            child.priority += 1;

            if child.kind == NodeKind::CatchAll {
                if child.segment == rest {
                    return Err(RadixError::DuplicateRoute {
                        path: full_path.to_string(),
                    });
                }
                return Err(wildcard_conflict(child, rest, full_path));
            }

            let seg_len = child.segment.len();
            let continues_wildcard = rest.starts_with(&child.segment)
                && (seg_len == rest.len() || rest[seg_len] == b'/');
            if !continues_wildcard {
                return Err(wildcard_conflict(child, rest, full_path));
            }
            return child.insert_route(rest, full_path, value);
        }

        let first = rest[0];

        // slash after a param
        if self.kind == NodeKind::Param && first == b'/' && self.children.len() == 1 {
            let child = &mut self.children[0];
            child.priority += 1;
            return child.insert_route(rest, full_path, value);
        }

        if let Some(pos) = self.child_position(first) {
            let pos = self.increment_child_priority(pos);
            return self.children[pos].insert_route(rest, full_path, value);
        }

        if !is_wildcard_marker(first) {
            self.indices.push(first);
            self.children.push(Node::new());
            let pos = self.increment_child_priority(self.children.len() - 1);
            return self.children[pos].insert_child(rest, full_path, value);
        }

        self.insert_child(rest, full_path, value)
    }

    /// Moves everything past `at` into a new static child.
    fn split_at(&mut self, at: usize) {
        let suffix = self.segment.split_off(at);
        let first = suffix[0];

        let child = Node {
            segment: suffix,
            indices: std::mem::take(&mut self.indices),
            children: std::mem::take(&mut self.children),
            value: self.value.take(),
            kind: NodeKind::Static,
            wildcard_child: self.wildcard_child,
            priority: self.priority.saturating_sub(1),
            param_name: None,
        };

        self.indices = smallvec![first];
        self.children = vec![child];
        self.wildcard_child = false;
    }

    /// Inserts `path` below a node that has no matching child, creating the
    /// wildcard nodes it names.
    fn insert_child(&mut self, path: &[u8], full_path: &str, value: T) -> RadixResult<()> {
        let Some(wildcard) = find_wildcard(path, 0) else {
            self.segment = path.to_vec();
            self.value = Some(value);
            return Ok(());
        };

        // a literal child would make the wildcard ambiguous
        if !self.children.is_empty() {
            return Err(RadixError::WildcardLiteralConflict {
                wildcard: lossy(wildcard.text(path)),
                path: full_path.to_string(),
            });
        }

        if wildcard.is_catch_all(path) {
            return self.insert_catch_all(path, wildcard, full_path, value);
        }

        if wildcard.start > 0 {
            self.segment = path[..wildcard.start].to_vec();
        }

        let mut param = Node::with_segment(wildcard.text(path), NodeKind::Param);
        param.param_name = Some(lossy(wildcard.name(path)).into_boxed_str());
        param.priority = 1;

        if wildcard.end < path.len() {
            let mut next = Node::new();
            next.priority = 1;
            next.insert_child(&path[wildcard.end..], full_path, value)?;
            param.indices.push(b'/');
            param.children.push(next);
        } else {
            param.value = Some(value);
        }

        self.children.push(param);
        self.wildcard_child = true;
        Ok(())
    }

    fn insert_catch_all(
        &mut self,
        path: &[u8],
        wildcard: Wildcard,
        full_path: &str,
        value: T,
    ) -> RadixResult<()> {
        // the '/' in front of the marker already ends this node's segment,
        // which belongs to an existing route
        if wildcard.start == 0 {
            return Err(RadixError::CatchAllConflict {
                path: full_path.to_string(),
            });
        }

        let slash = wildcard.start - 1;
        self.segment = path[..slash].to_vec();

        let mut leaf = Node::with_segment(&path[slash..], NodeKind::CatchAll);
        leaf.param_name = Some(lossy(wildcard.name(path)).into_boxed_str());
        leaf.value = Some(value);
        leaf.priority = 1;

        let mut placeholder = Node::with_segment(b"", NodeKind::CatchAll);
        placeholder.wildcard_child = true;
        placeholder.priority = 1;
        placeholder.children.push(leaf);

        self.indices.push(b'/');
        self.children.push(placeholder);
        Ok(())
    }
}

fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn wildcard_conflict<T>(existing: &Node<T>, rest: &[u8], full_path: &str) -> RadixError {
    let segment = if existing.kind == NodeKind::CatchAll {
        rest
    } else {
        rest.split(|&b| b == b'/').next().unwrap_or(rest)
    };
    let consumed = &full_path.as_bytes()[..full_path.len() - rest.len()];
    let wildcard = existing.segment.as_slice();

    RadixError::WildcardConflict {
        segment: lossy(segment),
        path: full_path.to_string(),
        wildcard: lossy(wildcard),
        prefix: format!("{}{}", lossy(consumed), lossy(wildcard)),
    }
}
