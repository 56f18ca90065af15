// src/crawl/walker.rs
// =============================================================================
// This module implements the directory walk.
//
// How it works:
// 1. Check the root exists and is a directory (anything else is fatal)
// 2. Walk depth-first with walkdir, never following symlinks
// 3. For each directory: if it matches an ignore pattern, skip it and
//    everything below it
// 4. For each file: keep it only if its name ends with the target extension
//    and its relative path isn't ignored, then read it as UTF-8
// 5. Hand back one OutputRecord per kept file
//
// Nothing here is fatal except a bad root. Unreadable files and directories
// are logged, counted in the summary, and skipped.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::record::{CrawlSummary, OutputRecord};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::ignore::IgnoreRuleSet;

/// Fails unless `root` is an existing directory.
pub fn check_root(root: &Path) -> Result<(), CrawlError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CrawlError::InvalidRoot {
            path: root.to_path_buf(),
        })
    }
}

// Starts a crawl described by `config`, filtering with `rules`
//
// Returns: a lazy iterator of OutputRecords, in the order the filesystem
// lists entries (or by file name when config.sort_entries is set)
//
// Example, with .gitignore containing "b.txt":
//   root/a.tsx, root/b.txt, root/sub/c.tsx
//   -> "a.tsx", "sub/c.tsx"
pub fn crawl<'a>(config: &CrawlConfig, rules: &'a IgnoreRuleSet) -> Result<Crawl<'a>, CrawlError> {
    check_root(&config.root)?;

    let mut walker = WalkDir::new(&config.root).follow_links(false);

    // Directories at max_depth + 1 are still listed as entries of their
    // parent, but walkdir won't open them
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth.saturating_add(1));
    }

    if config.sort_entries {
        walker = walker.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    }

    Ok(Crawl {
        root: config.root.clone(),
        extension: config.extension.clone(),
        max_depth: config.max_depth,
        rules,
        entries: walker.into_iter(),
        summary: CrawlSummary::default(),
    })
}

/// An in-progress crawl. Iterate it to get the records.
pub struct Crawl<'a> {
    root: PathBuf,
    extension: String,
    max_depth: Option<usize>,
    rules: &'a IgnoreRuleSet,
    entries: walkdir::IntoIter,
    summary: CrawlSummary,
}

impl Crawl<'_> {
    /// What the crawl has done so far. Complete once the iterator is drained.
    pub fn summary(&self) -> &CrawlSummary {
        &self.summary
    }

    // Handles a directory entry: prunes it if the rules say so
    fn visit_dir(&mut self, entry: &DirEntry, relative: &str) {
        // Beyond the limit walkdir doesn't descend anyway, and calling
        // skip_current_dir() here would pop the parent instead
        if self.max_depth.is_some_and(|max| entry.depth() > max) {
            debug!("Depth limit reached, not listing: {}", relative);
            return;
        }

        if self.rules.matches(relative) {
            info!("Ignored directory (not recursing): {} (matches ignore file)", relative);
            self.summary.dirs_pruned += 1;
            self.entries.skip_current_dir();
        }
    }

    // Handles a file entry: returns a record if it should be in the snapshot
    fn visit_file(&mut self, entry: &DirEntry, relative: String) -> Option<OutputRecord> {
        if !entry.file_name().to_string_lossy().ends_with(&self.extension) {
            return None;
        }

        if self.rules.matches(&relative) {
            info!("Ignored: {} (matches ignore file)", relative);
            self.summary.files_ignored += 1;
            return None;
        }

        match fs::read_to_string(entry.path()) {
            Ok(content) => {
                info!("Processed: {}", relative);
                self.summary.files_written += 1;
                Some(OutputRecord {
                    relative_path: relative,
                    content,
                })
            }
            Err(e) => {
                warn!("Error reading file {}: {}", entry.path().display(), e);
                self.summary.files_unreadable += 1;
                None
            }
        }
    }
}

impl Iterator for Crawl<'_> {
    type Item = OutputRecord;

    fn next(&mut self) -> Option<OutputRecord> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Cannot access {}: {}", error_path(&e), e);
                    self.summary.dirs_unreadable += 1;
                    continue;
                }
            };

            // The root itself is never filtered
            if entry.depth() == 0 {
                continue;
            }

            let relative = relative_path(&self.root, entry.path());
            let file_type = entry.file_type();

            if file_type.is_dir() {
                self.visit_dir(&entry, &relative);
                continue;
            }

            // Symlinks aren't followed: a link to a directory is a dead end,
            // a link to a regular file is read like a file. A dangling link
            // goes through visit_file too, so its read failure gets reported
            if file_type.is_symlink() {
                let target = entry.path();
                if target.is_dir() || (target.exists() && !target.is_file()) {
                    debug!("Not following symlink: {}", relative);
                    continue;
                }
            }

            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            if let Some(record) = self.visit_file(&entry, relative) {
                return Some(record);
            }
        }
    }
}

// Path of `path` below `root`, always '/'-separated
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn error_path(e: &walkdir::Error) -> String {
    e.path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why implement Iterator instead of returning a Vec?
//    - Nothing is read until the caller asks for the next record
//    - A huge tree never has to fit in memory all at once
//    - The caller decides where records go (file, stdout, tests)
//
// 2. What does skip_current_dir() do?
//    - walkdir has just handed us a directory entry
//    - Calling skip_current_dir() tells it not to descend into that
//      directory, so nothing below an ignored directory is ever visited
//
// 3. What is the <'a> on Crawl?
//    - A lifetime: Crawl borrows the IgnoreRuleSet instead of copying it
//    - The compiler makes sure the rules outlive the crawl
//
// 4. Why loop inside next()?
//    - Most entries (other extensions, directories) produce no record
//    - We keep pulling entries until one does, or the walk ends
// -----------------------------------------------------------------------------
