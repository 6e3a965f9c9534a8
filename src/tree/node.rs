//! Arena-backed path tree with per-node sizes

use std::cmp::Ordering;
use std::collections::HashMap;

use super::utils::format_size;

/// Index of a node in the [`PathTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    /// Path segment; empty only for the root.
    name: String,
    /// Size a record assigned directly to this exact path, if any.
    explicit_size: Option<u64>,
    /// Memoized sum of the children's effective sizes, filled by `finalize`.
    aggregate_size: Option<u64>,
    parent: Option<NodeId>,
    children: HashMap<String, NodeId>,
    /// Root = 0, child = parent + 1. Set at creation, never changed.
    depth: usize,
}

/// Tree of path segments rebuilt from flat `size<TAB>path` records.
///
/// Nodes live in an arena indexed by [`NodeId`] with the root at index 0.
/// Intermediate segments are created parent-first during [`PathTree::insert`],
/// so a child's index is always greater than its parent's.
///
/// The tree is write-once-then-read: perform all inserts, call
/// [`PathTree::finalize`] exactly once, then read sizes. Inserting after
/// `finalize` leaves stale aggregates behind.
pub struct PathTree {
    nodes: Vec<Node>,
    finalized: bool,
}

impl PathTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::new(),
                explicit_size: None,
                aggregate_size: None,
                parent: None,
                children: HashMap::new(),
                depth: 0,
            }],
            finalized: false,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Insert a record, creating any missing intermediate segments.
    ///
    /// The path is split on `/`; empty segments (doubled or leading slashes)
    /// are skipped. The terminal node gets `size` as its explicit size, and a
    /// later insert for the same exact path overwrites the earlier one.
    pub fn insert(&mut self, path: &str, size: u64) {
        debug_assert!(!self.finalized, "insert after finalize leaves stale aggregates");
        let mut cursor = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            cursor = self.child_or_create(cursor, segment);
        }
        self.nodes[cursor.0].explicit_size = Some(size);
    }

    fn child_or_create(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(&existing) = self.nodes[parent.0].children.get(name) {
            return existing;
        }
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            name: name.to_string(),
            explicit_size: None,
            aggregate_size: None,
            parent: Some(parent),
            children: HashMap::new(),
            depth,
        });
        self.nodes[parent.0].children.insert(name.to_string(), id);
        id
    }

    /// Compute every node's memoized aggregate size.
    ///
    /// One reverse-index sweep: children always sit at higher indices than
    /// their parents, so each sum only reads already-computed values. Call
    /// exactly once, after the last insert and before the first size read.
    pub fn finalize(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            let sum: u64 = self.nodes[index]
                .children
                .values()
                .map(|child| self.effective(*child))
                .sum();
            self.nodes[index].aggregate_size = Some(sum);
        }
        self.finalized = true;
    }

    fn effective(&self, id: NodeId) -> u64 {
        let node = &self.nodes[id.0];
        node.explicit_size.or(node.aggregate_size).unwrap_or(0)
    }

    /// Effective size: the explicit size if a record assigned one, otherwise
    /// the memoized children sum (0 for a childless node without a record).
    ///
    /// An explicit size on a node that also has children wins over the
    /// children sum; the two are not reconciled.
    pub fn size(&self, id: NodeId) -> u64 {
        debug_assert!(self.finalized, "size read before finalize");
        self.effective(id)
    }

    /// Effective size formatted with binary suffixes, e.g. `"1.5 KB"`.
    pub fn human_size(&self, id: NodeId) -> String {
        format_size(self.size(id))
    }

    /// Size-ascending ordering between two nodes; reporting reverses it for
    /// size-descending output.
    pub fn cmp_by_size(&self, a: NodeId, b: NodeId) -> Ordering {
        self.size(a).cmp(&self.size(b))
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[id.0].children.get(name).copied()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].children.len()
    }

    /// Direct children in insertion order. Arena ids grow monotonically, so
    /// sorting by id recovers creation order.
    pub fn children_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes[id.0].children.values().copied().collect();
        ids.sort_by_key(|child| child.0);
        ids
    }

    /// Full path from the root, `/`-joined; the root itself is `"/"`.
    pub fn full_path(&self, id: NodeId) -> String {
        if self.nodes[id.0].parent.is_none() {
            return "/".to_string();
        }
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            if node.parent.is_some() {
                segments.push(node.name.as_str());
            }
            cursor = node.parent;
        }
        segments.reverse();
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}
