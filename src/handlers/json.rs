//! JSON handler for structured log shipping

use crate::core::{Handler, Message, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each message as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. The logfmt
/// line still goes to the logger's sink; this handler produces a second,
/// machine-oriented copy.
pub struct JsonHandler<W: Write + Send = BufWriter<File>> {
    writer: Mutex<W>,
    pretty: bool,
}

impl JsonHandler {
    /// Append to the file at `path`, creating it if needed
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Pretty-print each object across several lines
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Handler for JsonHandler<W> {
    fn handle(&self, messages: &[Message]) -> Result<()> {
        let mut writer = self.writer.lock();
        for message in messages {
            if self.pretty {
                serde_json::to_writer_pretty(&mut *writer, message)?;
            } else {
                serde_json::to_writer(&mut *writer, message)?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
