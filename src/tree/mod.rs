//! Path tree construction and reporting
//!
//! This module rebuilds a directory tree from flat `size<TAB>path` records
//! and turns it into a compact report:
//!
//! - `node` - the arena-backed [`PathTree`] with insert/finalize/size
//! - `collapse` - skipping uninteresting single-child chains
//! - `report` - the depth-bounded, size-sorted [`ReportNode`] builder
//! - `utils` - human-readable size formatting

mod collapse;
mod node;
mod report;
mod utils;

// Re-export public types
pub use collapse::find_first_branch;
pub use node::{NodeId, PathTree};
pub use report::{ReportNode, build_report};
pub use utils::format_size;
