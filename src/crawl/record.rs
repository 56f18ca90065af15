// src/crawl/record.rs
// =============================================================================
// Data produced by a crawl.
// =============================================================================

use serde::Serialize;

/// One matching file: where it is (relative to the root) and what's in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub relative_path: String,
    pub content: String,
}

/// Running tally of what the crawl did.
///
/// Only `files_written` corresponds to output records; the other counters
/// track the contained errors and exclusions that were logged along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    /// Matching files emitted as records
    pub files_written: usize,
    /// Matching files left out because an ignore pattern matched them
    pub files_ignored: usize,
    /// Matching files we couldn't open or that weren't valid UTF-8
    pub files_unreadable: usize,
    /// Directories pruned because an ignore pattern matched them
    pub dirs_pruned: usize,
    /// Entries the walker couldn't access (usually unlistable directories)
    pub dirs_unreadable: usize,
}
