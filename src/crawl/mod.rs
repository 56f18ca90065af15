// src/crawl/mod.rs
// =============================================================================
// This module handles directory crawling.
//
// Features:
// - Depth-first walk starting from a root directory
// - Configurable depth limit (or unbounded with --full)
// - Ignored directories are pruned before we descend into them
// - Never follows symbolic links
// - Lazy: records are produced one at a time as the walk advances
//
// Depth convention:
// - The root directory is depth 0
// - A directory N levels below the root is depth N
// - A file has the depth of the directory it lives in
// =============================================================================

mod record;
mod walker;

// Re-export the main crawling API
pub use record::{CrawlSummary, OutputRecord};
pub use walker::{check_root, crawl, Crawl};
