//! Human-readable tree listing
//!
//! Renders a [`ReportNode`] in the manner of `tree`: one line per node with
//! branch connectors and the effective size in human-readable form. The
//! report is already size-sorted and depth-bounded, so this is display only.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{ReportNode, format_size};

/// Formatter for the text report.
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the report to a plain string (never colorized).
    pub fn format(&self, report: &ReportNode) -> String {
        let mut output = String::new();
        format_node(report, &mut output, "", true, true);
        output
    }

    /// Print the report to stdout, colorized when enabled.
    pub fn print(&self, report: &ReportNode) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_node(&mut stdout, report, "", true, true)
    }

    fn print_node(
        &self,
        stdout: &mut StandardStream,
        node: &ReportNode,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            let connector = if is_last { "└── " } else { "├── " };
            write!(stdout, "{}{}", prefix, connector)?;
        }
        if node.children.is_some() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(stdout, "{}", label(node, is_root))?;
        stdout.reset()?;
        write!(stdout, "  ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "[{}]", format_size(node.size))?;
        stdout.reset()?;
        writeln!(stdout)?;

        if let Some(children) = &node.children {
            let child_prefix = child_prefix(prefix, is_last, is_root);
            for (index, child) in children.iter().enumerate() {
                self.print_node(
                    stdout,
                    child,
                    &child_prefix,
                    index + 1 == children.len(),
                    false,
                )?;
            }
        }
        Ok(())
    }
}

fn format_node(node: &ReportNode, output: &mut String, prefix: &str, is_last: bool, is_root: bool) {
    if !is_root {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(connector);
    }
    output.push_str(label(node, is_root));
    output.push_str(&format!("  [{}]\n", format_size(node.size)));

    if let Some(children) = &node.children {
        let child_prefix = child_prefix(prefix, is_last, is_root);
        for (index, child) in children.iter().enumerate() {
            format_node(child, output, &child_prefix, index + 1 == children.len(), false);
        }
    }
}

/// The start node shows its full path; descendants show their last segment.
fn label(node: &ReportNode, is_root: bool) -> &str {
    if is_root {
        &node.path
    } else {
        node.path.rsplit('/').next().unwrap_or(&node.path)
    }
}

fn child_prefix(prefix: &str, is_last: bool, is_root: bool) -> String {
    if is_root {
        String::new()
    } else {
        format!("{}{}", prefix, if is_last { "    " } else { "│   " })
    }
}
