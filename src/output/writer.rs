// src/output/writer.rs
// =============================================================================
// The snapshot text format.
//
// Every record becomes one block:
//
//   Filename: sub/c.tsx
//   Content:
//   <the file's content>
//   ----------------------------------------
//
// The output file is created fresh (truncated) on every run.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::crawl::OutputRecord;

/// Line written after every record: 40 dashes.
pub const SEPARATOR: &str = "----------------------------------------";

/// Anything that can receive records one at a time.
pub trait RecordSink {
    fn write_record(&mut self, record: &OutputRecord) -> io::Result<()>;
}

/// Writes records in the snapshot block format.
pub struct SnapshotWriter<W: Write> {
    inner: W,
}

impl SnapshotWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flushes and gives back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> RecordSink for SnapshotWriter<W> {
    fn write_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        writeln!(self.inner, "Filename: {}", record.relative_path)?;
        writeln!(self.inner, "Content:\n{}", record.content)?;
        writeln!(self.inner, "{}", SEPARATOR)
    }
}

// Drains `records` into `sink`
//
// Returns: how many records were written
pub fn write_all<I, S>(records: I, sink: &mut S) -> io::Result<usize>
where
    I: IntoIterator<Item = OutputRecord>,
    S: RecordSink + ?Sized,
{
    let mut count = 0;
    for record in records {
        sink.write_record(&record)?;
        count += 1;
    }
    Ok(count)
}
