use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    #[default]
    Static,
    Root,
    Param,
    CatchAll,
}

/// A vertex of a compressed prefix tree. Each node owns its children outright;
/// nothing is shared or aliased between nodes.
#[derive(Debug)]
pub struct Node<T> {
    // raw bytes; an edge split may fall inside a multi-byte character
    pub(super) segment: Vec<u8>,
    // first byte of each child's segment, parallel to `children`
    pub(super) indices: SmallVec<[u8; 8]>,
    pub(super) children: Vec<Node<T>>,
    pub(super) value: Option<T>,
    pub(super) kind: NodeKind,
    pub(super) wildcard_child: bool,
    pub(super) priority: u32,
    pub(super) param_name: Option<Box<str>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            segment: Vec::new(),
            indices: SmallVec::new(),
            children: Vec::new(),
            value: None,
            kind: NodeKind::Static,
            wildcard_child: false,
            priority: 0,
            param_name: None,
        }
    }
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn with_segment(segment: &[u8], kind: NodeKind) -> Self {
        Self {
            segment: segment.to_vec(),
            kind,
            ..Self::default()
        }
    }

    pub fn segment(&self) -> &[u8] {
        &self.segment
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn has_wildcard_child(&self) -> bool {
        self.wildcard_child
    }

    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// True when no route has been inserted below this node.
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty() && self.children.is_empty() && self.value.is_none()
    }

    #[inline]
    pub(super) fn child_position(&self, byte: u8) -> Option<usize> {
        self.indices.iter().position(|&b| b == byte)
    }

    /// Bumps the priority of the child at `pos` and moves it ahead of any
    /// sibling with a lower priority, keeping `indices` aligned. Returns the
    /// child's new position.
    pub(super) fn increment_child_priority(&mut self, pos: usize) -> usize {
        self.children[pos].priority += 1;
        let priority = self.children[pos].priority;

        let mut new_pos = pos;
        while new_pos > 0 && self.children[new_pos - 1].priority < priority {
            new_pos -= 1;
        }

        if new_pos != pos {
            self.children[new_pos..=pos].rotate_right(1);
            self.indices[new_pos..=pos].rotate_right(1);
        }

        new_pos
    }

    /// Visits every node of the subtree, parents before children.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut stack: Vec<&Node<T>> = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.iter().rev());
        }
    }
}
