//! CLI entry point for duscope

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser, ValueEnum};
use duscope::{
    Error, PathTree, Result, TextFormatter, build_report, find_first_branch, ingest, render_json,
};
use tracing::{Level, debug, info};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Pretty-printed JSON for machine consumption
    #[default]
    Json,
    /// Tree listing with human-readable sizes
    Text,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "duscope")]
#[command(about = "Summarize recursive du output as a depth-bounded, size-sorted tree")]
#[command(version)]
struct Args {
    /// Input file of `<size>\t<path>` records (reads standard input when piped)
    file: Option<PathBuf>,

    /// Levels to expand below the first branching directory
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Write the report to a file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "json")]
    format: Format,

    /// Control color output for text reports: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("duscope: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let reader = open_input(args)?;

    let mut tree = PathTree::new();
    let started = Instant::now();
    let records = ingest(reader, &mut tree)?;
    tree.finalize();

    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    info!(
        "parsed {} records into {} nodes in {}",
        records,
        tree.len(),
        humantime::format_duration(elapsed)
    );

    let start = find_first_branch(&tree, tree.root());
    debug!(
        "reporting from {} (depth {}, {})",
        tree.full_path(start),
        tree.depth(start),
        tree.human_size(start)
    );

    let report = build_report(&tree, start, args.depth);

    match &args.output {
        Some(path) => {
            // render fully before touching the destination so a failed run
            // leaves no partial file
            let rendered = match args.format {
                Format::Json => render_json(&report)?,
                Format::Text => TextFormatter::new(false).format(&report),
            };
            std::fs::write(path, rendered).map_err(|source| Error::OutputUnwritable {
                path: path.clone(),
                source,
            })
        }
        None => match args.format {
            Format::Json => {
                let rendered = render_json(&report)?;
                io::stdout().write_all(rendered.as_bytes()).map_err(Error::Io)
            }
            Format::Text => TextFormatter::new(should_use_color(args.color))
                .print(&report)
                .map_err(Error::Io),
        },
    }
}

fn open_input(args: &Args) -> Result<Box<dyn io::BufRead>> {
    match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::InputUnavailable {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                // nothing piped in and no file given
                Args::command().print_help().ok();
                process::exit(1);
            }
            Ok(Box::new(BufReader::new(stdin)))
        }
    }
}
