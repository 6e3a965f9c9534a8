//! Depth-bounded, size-sorted report construction

use serde::Serialize;

use super::node::{NodeId, PathTree};

/// One node of the final report.
///
/// `children` is present only when the node has children and sits above the
/// depth ceiling, and is ordered by `size` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportNode {
    pub path: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ReportNode>>,
}

/// Build the report subtree rooted at `start`, expanding `max_relative_depth`
/// levels below it.
///
/// Pure function of its arguments. Nodes deeper than
/// `start.depth + max_relative_depth` are omitted entirely; nodes at the
/// final permitted level keep their sizes but expose no `children`, even
/// when they have some.
pub fn build_report(tree: &PathTree, start: NodeId, max_relative_depth: usize) -> ReportNode {
    let ceiling = tree.depth(start) + max_relative_depth;
    build_node(tree, start, ceiling)
}

fn build_node(tree: &PathTree, id: NodeId, ceiling: usize) -> ReportNode {
    let mut child_ids = tree.children_ids(id);
    // stable sort keeps insertion order among equal sizes
    child_ids.sort_by(|a, b| tree.cmp_by_size(*a, *b).reverse());
    let children = if !child_ids.is_empty() && tree.depth(id) < ceiling {
        Some(
            child_ids
                .into_iter()
                .map(|child| build_node(tree, child, ceiling))
                .collect(),
        )
    } else {
        None
    };
    ReportNode {
        path: tree.full_path(id),
        size: tree.size(id),
        children,
    }
}
