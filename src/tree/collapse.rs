//! Collapse single-child chains to the first interesting node

use super::node::{NodeId, PathTree};

/// Ceiling on chain descent. The tree is acyclic by construction, so this is
/// a safety net against malformed input, not a limit hit in practice.
const MAX_DESCENT: usize = 9999;

/// Walk down from `start` while the current node has exactly one child,
/// returning the first node with zero children (a leaf) or more than one
/// (a true branch point).
///
/// Long single-path prefixes like `/data/jobs/<uuid>/output` carry no
/// information on their own; reporting starts below them.
pub fn find_first_branch(tree: &PathTree, start: NodeId) -> NodeId {
    let mut cursor = start;
    for _ in 0..MAX_DESCENT {
        let children = tree.children_ids(cursor);
        if children.len() != 1 {
            break;
        }
        cursor = children[0];
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(records: &[(&str, u64)]) -> PathTree {
        let mut tree = PathTree::new();
        for (path, size) in records {
            tree.insert(path, *size);
        }
        tree.finalize();
        tree
    }

    #[test]
    fn test_single_chain_collapses_to_leaf() {
        let tree = build(&[("a/b/c/d", 7)]);
        let branch = find_first_branch(&tree, tree.root());
        assert_eq!(tree.full_path(branch), "/a/b/c/d");
        assert_eq!(tree.child_count(branch), 0);
    }

    #[test]
    fn test_stops_at_first_node_with_two_children() {
        let tree = build(&[("a/b1", 1), ("a/b2", 2)]);
        let branch = find_first_branch(&tree, tree.root());
        assert_eq!(tree.full_path(branch), "/a");
        assert_eq!(tree.child_count(branch), 2);
    }

    #[test]
    fn test_branching_root_is_returned_unchanged() {
        let tree = build(&[("a", 1), ("b", 2)]);
        let branch = find_first_branch(&tree, tree.root());
        assert_eq!(branch, tree.root());
    }

    #[test]
    fn test_empty_tree_returns_root() {
        let tree = build(&[]);
        assert_eq!(find_first_branch(&tree, tree.root()), tree.root());
    }

    #[test]
    fn test_chain_then_branch() {
        let tree = build(&[("data/jobs/run-1/out.bin", 100), ("data/jobs/run-1/log.txt", 5)]);
        let branch = find_first_branch(&tree, tree.root());
        assert_eq!(tree.full_path(branch), "/data/jobs/run-1");
    }
}
