//! Reporting of fixture records as they are produced.
//!
//! ## Reporter Trait
//!
//! The driver hands each record to a [`Reporter`] as soon as it exists, so output appears fixture by fixture rather
//! than after the whole batch. Implement the trait to add output formats.

use std::io::{self, Write};
use std::time::Duration;

use saltrun_core::FixtureRecord;

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    /// Records whose validator did not exit with code 0
    pub nonzero_exits: usize,
    pub duration: Duration,
}

/// Receives run events from the driver.
pub trait Reporter {
    /// Called once before the first fixture is launched
    fn on_run_start(&mut self, _fixture_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called once per fixture, in fixture order
    fn on_record(&mut self, record: &FixtureRecord) -> io::Result<()>;

    /// Called after the last record when every fixture succeeded
    fn on_run_complete(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Collects records in memory.
impl Reporter for Vec<FixtureRecord> {
    fn on_record(&mut self, record: &FixtureRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// One mapping-like line per record.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn on_record(&mut self, record: &FixtureRecord) -> io::Result<()> {
        writeln!(self.out, "{record}")?;
        self.out.flush()
    }
}

/// One JSON object per record, newline separated.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_record(&mut self, record: &FixtureRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
