// src/output/mod.rs
// =============================================================================
// This module writes crawl records out.
//
// Submodules:
// - writer: The RecordSink trait and the text snapshot format
//
// The crawl knows nothing about files on disk: it hands records to whatever
// sink the caller picked.
// =============================================================================

mod writer;

pub use writer::{write_all, RecordSink, SnapshotWriter, SEPARATOR};
