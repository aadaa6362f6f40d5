//! Debug-text output sink
//!
//! The report is written through an injected sink rather than a hardwired
//! output so tests (and future front ends) can capture it. The core planning
//! crate never touches this layer.

use std::io::Write;

/// Destination for the rendered plan report
pub trait DebugSink {
    fn write_debug_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Writes the report to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DebugSink for StdoutSink {
    fn write_debug_text(&mut self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")
    }
}

/// Captures the report in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    pub buffer: String,
}

impl DebugSink for BufferSink {
    fn write_debug_text(&mut self, text: &str) -> std::io::Result<()> {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        Ok(())
    }
}
