//! Duscope - summarize recursive `du` output as a depth-bounded, size-sorted tree

pub mod error;
pub mod ingest;
pub mod output;
pub mod tree;

pub use error::{Error, Result};
pub use ingest::ingest;
pub use output::{TextFormatter, render_json, write_json};
pub use tree::{NodeId, PathTree, ReportNode, build_report, find_first_branch, format_size};
