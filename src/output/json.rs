//! JSON report rendering

use std::io::{self, Write};

use crate::tree::ReportNode;

/// Render the report as pretty-printed JSON with a trailing newline.
pub fn render_json(report: &ReportNode) -> io::Result<String> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    json.push('\n');
    Ok(json)
}

/// Write the rendered report to any writer.
pub fn write_json<W: Write>(writer: &mut W, report: &ReportNode) -> io::Result<()> {
    let json = render_json(report)?;
    writer.write_all(json.as_bytes())
}
