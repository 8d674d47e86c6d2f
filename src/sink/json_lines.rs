//! JSON-lines sink: one serialized tuple per line over any writer.
//!
//! This is a transport layering over the core tuple stream: no framing or
//! versioning beyond one JSON object per line.

use std::io::Write;

use crate::error::{DumpError, Result};
use crate::record::ReplicantTuple;

use super::WriteSink;

/// Streams tuples as newline-delimited JSON.
///
/// The writer is supplied by the caller and handed back by
/// [`into_inner`](Self::into_inner); flushing and closing it is the
/// caller's responsibility.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WriteSink for JsonLinesSink<W> {
    fn write(&mut self, tuple: ReplicantTuple) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &tuple)
            .map_err(|e| DumpError::serialization("Failed to serialize tuple", Some(e)))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| DumpError::sink_write("Failed to write tuple line", Some(e)))?;
        Ok(())
    }
}
