//! Overflow file writer for duplicate-on-arrival records
//!
//! The overflow file is recreated on every run with a fixed header
//! line, even when no duplicates occur. Records are written as plain
//! comma joins with quoting disabled.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use tracing::debug;

use crate::app::models::TripRecord;
use crate::constants::OVERFLOW_HEADER;
use crate::{Error, Result};

/// Writer for the overflow-duplicates file
#[derive(Debug)]
pub struct OverflowWriter {
    writer: Writer<File>,
    path: String,
}

impl OverflowWriter {
    /// Create (or truncate) the overflow file and write the header line
    pub fn create(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_path(path)
            .map_err(|e| Error::csv(display.clone(), "Failed to create overflow file", Some(e)))?;

        writer
            .write_record(OVERFLOW_HEADER)
            .map_err(|e| Error::csv(display.clone(), "Failed to write overflow header", Some(e)))?;

        Ok(Self {
            writer,
            path: display,
        })
    }

    /// Append a diverted record as one unescaped comma-joined line
    pub fn write_record(&mut self, record: &TripRecord) -> Result<()> {
        self.writer
            .write_record(record.to_fields())
            .map_err(|e| {
                Error::csv(
                    self.path.clone(),
                    format!("Failed to write diverted record {}", record.natural_key()),
                    Some(e),
                )
            })?;
        debug!("Diverted record {}", record.natural_key());
        Ok(())
    }

    /// Flush buffered output to disk
    ///
    /// The file handle itself is released on drop regardless of whether
    /// the batch succeeded.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush overflow file {}", self.path), e))
    }
}
