//! Record ingestion: flat `size<TAB>path` lines into a [`PathTree`]

use std::io::BufRead;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::PathTree;

/// Read newline-terminated `<size>\t<path>` records and insert each into the
/// tree, returning the number of records ingested.
///
/// Each line is trimmed and split once on its first tab, so the path may
/// itself contain tabs; there is no field validation beyond the two-column
/// split. A later record for the same exact path overwrites the earlier size.
///
/// Malformed lines (missing tab, non-integer size, empty path) abort
/// ingestion with the 1-based line number and the offending content. All
/// input is consumed before any output is produced, so a failed ingest never
/// emits a partial report.
pub fn ingest<R: BufRead>(reader: R, tree: &mut PathTree) -> Result<usize> {
    let mut records = 0;
    for (index, line) in reader.lines().enumerate() {
        let raw = line?;
        let trimmed = raw.trim();
        let (size_field, path) =
            trimmed.split_once('\t').ok_or_else(|| Error::MalformedRecord {
                line: index + 1,
                content: raw.clone(),
                reason: "missing tab separator".to_string(),
            })?;
        let size: u64 = size_field.parse().map_err(|_| Error::MalformedRecord {
            line: index + 1,
            content: raw.clone(),
            reason: format!("invalid size field {size_field:?}"),
        })?;
        if path.is_empty() {
            return Err(Error::MalformedRecord {
                line: index + 1,
                content: raw.clone(),
                reason: "empty path".to_string(),
            });
        }
        tree.insert(path, size);
        records += 1;
    }
    debug!(records, "ingest complete");
    Ok(records)
}
