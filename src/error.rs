// src/error.rs
// =============================================================================
// Errors that stop a snapshot run.
//
// Only two things are fatal:
// - the root directory is missing or is not a directory
// - the output file cannot be created or written
//
// Everything else (unreadable ignore file, unreadable source file, a
// directory we can't list) is logged and counted, never returned.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Directory not found or is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("Failed to write output file: {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrawlError::Output {
            path: path.into(),
            source,
        }
    }
}
