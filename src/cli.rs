// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    CrawlConfig, DEFAULT_EXTENSION, DEFAULT_IGNORE_FILE, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_FILE,
};

// This struct represents our entire CLI application
//
// There are no subcommands: one invocation = one snapshot
#[derive(Parser, Debug)]
#[command(
    name = "tree-snapshot",
    version = "0.1.0",
    about = "Snapshot every matching source file in a directory into one text file",
    long_about = "tree-snapshot walks a directory, skips anything matched by the root .gitignore, \
                  and writes the name and content of every matching file into a single text file. \
                  Handy for feeding a codebase to another tool."
)]
pub struct Cli {
    /// The path to the directory to crawl
    ///
    /// This is a positional argument (required)
    pub directory: PathBuf,

    /// Crawl with full recursion (no maximum depth)
    ///
    /// Overrides --max-depth when both are given
    #[arg(long)]
    pub full: bool,

    /// The name of the output text file
    ///
    /// Created fresh on every run, never appended to
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// The maximum recursion depth (ignored if --full is used)
    ///
    /// Depth 0 = only files directly in the directory
    /// Depth 1 = those + files one folder down
    /// etc.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Only files whose name ends with this suffix are included (case-sensitive)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Name of the ignore file read from the crawl directory
    #[arg(long, default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: String,

    /// Visit entries in file-name order so repeated runs produce identical output
    #[arg(long)]
    pub sort: bool,

    /// Print the crawl summary as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Turns the parsed arguments into the crawl configuration
    pub fn crawl_config(&self) -> CrawlConfig {
        let config = CrawlConfig::new(&self.directory)
            .with_max_depth(self.max_depth)
            .with_extension(&self.extension)
            .with_ignore_file(&self.ignore_file)
            .sorted(self.sort);

        if self.full {
            config.unbounded()
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tree-snapshot", "web"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("web"));
        assert_eq!(cli.output, PathBuf::from("tsx_content.txt"));
        assert_eq!(cli.max_depth, 3);
        assert!(!cli.full);

        let config = cli.crawl_config();
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.extension, ".tsx");
    }

    #[test]
    fn test_full_overrides_max_depth() {
        let cli = Cli::try_parse_from(["tree-snapshot", "web", "--max-depth", "1", "--full"]).unwrap();
        assert_eq!(cli.crawl_config().max_depth, None);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "tree-snapshot",
            "web",
            "--max-depth",
            "5",
            "--output",
            "out.txt",
            "--extension",
            ".rs",
            "--ignore-file",
            ".snapshotignore",
            "--sort",
            "--json",
        ])
        .unwrap();

        let config = cli.crawl_config();
        assert_eq!(config.max_depth, Some(5));
        assert_eq!(config.extension, ".rs");
        assert_eq!(config.ignore_file_name, ".snapshotignore");
        assert!(config.sort_entries);
        assert!(cli.json);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Cli::try_parse_from(["tree-snapshot"]).is_err());
    }
}
