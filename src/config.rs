// src/config.rs
// =============================================================================
// Everything one crawl needs to know, passed in explicitly.
//
// There are no globals here: the CLI builds a CrawlConfig and hands it to
// crawl::crawl(). Tests build their own with the builder methods.
// =============================================================================

use std::path::PathBuf;

/// Default recursion depth when neither --max-depth nor --full is given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Only files whose name ends with this suffix are snapshotted.
pub const DEFAULT_EXTENSION: &str = ".tsx";

/// Name of the single ignore file read from the crawl root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Where the snapshot goes when --output isn't given.
pub const DEFAULT_OUTPUT_FILE: &str = "tsx_content.txt";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Directory the crawl starts from (depth 0).
    pub root: PathBuf,
    /// Deepest directory level whose files are read. None = unbounded.
    pub max_depth: Option<usize>,
    /// Case-sensitive filename suffix, e.g. ".tsx".
    pub extension: String,
    /// File name of the ignore file inside `root`.
    pub ignore_file_name: String,
    /// Visit directory entries in file-name order instead of filesystem order.
    pub sort_entries: bool,
}

impl CrawlConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            extension: DEFAULT_EXTENSION.to_string(),
            ignore_file_name: DEFAULT_IGNORE_FILE.to_string(),
            sort_entries: false,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Crawl every level (the --full flag).
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file_name = name.into();
        self
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("src");
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.extension, ".tsx");
        assert_eq!(config.ignore_file_name, ".gitignore");
        assert!(!config.sort_entries);
    }

    #[test]
    fn test_unbounded_overrides_depth() {
        let config = CrawlConfig::new("src").with_max_depth(7).unbounded();
        assert_eq!(config.max_depth, None);
    }
}
