// src/lib.rs
// =============================================================================
// Library root: everything the tree-snapshot binary is built from.
//
// Flow of one run:
//   CrawlConfig -> IgnoreRuleSet::load_named() -> crawl() -> SnapshotWriter
//
// Keeping this in a library (instead of only main.rs) means the crawl can be
// reused by other tools and tested without going through the command line.
// =============================================================================

// Module declarations - tells Rust about our other source files
pub mod cli;        // src/cli.rs - command-line parsing
pub mod config;     // src/config.rs - crawl configuration
pub mod crawl;      // src/crawl/ - directory walking
pub mod error;      // src/error.rs - fatal error types
pub mod ignore;     // src/ignore/ - .gitignore patterns
pub mod output;     // src/output/ - snapshot file format

pub use config::CrawlConfig;
pub use crawl::{crawl, Crawl, CrawlSummary, OutputRecord};
pub use error::CrawlError;
pub use ignore::{IgnorePattern, IgnoreRuleSet};
pub use output::{RecordSink, SnapshotWriter};
