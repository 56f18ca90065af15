// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) so progress and warnings go to stderr
// 2. Parse command-line arguments using clap
// 3. Check the directory, load its .gitignore, and crawl it
// 4. Write every matching file into the output snapshot
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Iterators: The crawl produces records lazily, the writer consumes them
// =============================================================================

// Import items we need from the library half of this crate
use clap::Parser;  // Parser trait enables the parse() method
use tree_snapshot::cli::Cli;
use tree_snapshot::{crawl, output};
use tree_snapshot::{CrawlConfig, CrawlError, CrawlSummary, IgnoreRuleSet, SnapshotWriter};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, report it and exit with code 2
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with --json output on stdout
// RUST_LOG overrides the default level (e.g. RUST_LOG=tree_snapshot=debug)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tree_snapshot=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = snapshot written (even if it holds zero files)
//   Err = invalid directory or output file problem
fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let config = cli.crawl_config();

    match config.max_depth {
        Some(depth) => info!(
            "Crawling directory: {} with a maximum depth of {}.",
            config.root.display(),
            depth
        ),
        None => info!(
            "Crawling directory: {} with full recursion (--full specified).",
            config.root.display()
        ),
    }
    info!("Output file: {}", cli.output.display());

    let summary = handle_snapshot(&config, &cli.output)?;

    print_summary(&config, &cli.output, &summary, cli.json)?;
    Ok(0)
}

// Crawls `config.root` and writes the snapshot to `output_path`
//
// The root is checked BEFORE the output file is created, so a bad
// directory never leaves an empty snapshot behind
fn handle_snapshot(config: &CrawlConfig, output_path: &Path) -> Result<CrawlSummary, CrawlError> {
    crawl::check_root(&config.root)?;

    // Read gitignore patterns only once, from the starting directory
    let rules = IgnoreRuleSet::load_named(&config.root, &config.ignore_file_name);
    for pattern in rules.patterns() {
        debug!("Ignore pattern: {}", pattern.as_str());
    }
    let mut records = crawl::crawl(config, &rules)?;

    let mut writer =
        SnapshotWriter::create(output_path).map_err(|e| CrawlError::output(output_path, e))?;
    output::write_all(&mut records, &mut writer).map_err(|e| CrawlError::output(output_path, e))?;
    writer
        .finish()
        .map_err(|e| CrawlError::output(output_path, e))?;

    Ok(records.summary().clone())
}

// What --json prints
#[derive(Serialize)]
struct Report<'a> {
    directory: &'a Path,
    output: &'a Path,
    max_depth: Option<usize>,
    #[serde(flatten)]
    summary: &'a CrawlSummary,
}

// Prints the summary either as JSON or as a few human-readable lines
fn print_summary(
    config: &CrawlConfig,
    output_path: &Path,
    summary: &CrawlSummary,
    json: bool,
) -> Result<()> {
    if json {
        let report = Report {
            directory: &config.root,
            output: output_path,
            max_depth: config.max_depth,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Successfully saved content of relevant {} files to: {}",
            config.extension,
            display_path(output_path).display()
        );
        println!("   Written: {}", summary.files_written);
        println!("   Ignored: {}", summary.files_ignored + summary.dirs_pruned);
        println!(
            "   Errors:  {}",
            summary.files_unreadable + summary.dirs_unreadable
        );
    }
    Ok(())
}

// Absolute form of the output path when we can get it, for a clearer message
fn display_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
