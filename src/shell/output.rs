//! Output sinks
//!
//! The shell never writes anywhere itself; it hands each line to an
//! [`OutputSink`].

use std::io::Write;

/// Append-only, line-oriented destination for command output.
pub trait OutputSink {
    fn emit_line(&mut self, line: &str);
}

impl OutputSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit_line(&mut self, line: &str) {
        (**self).emit_line(line);
    }
}

/// Writes each line to an `io::Write`, usually stdout.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit_line(&mut self, line: &str) {
        // A closed stdout is not a command failure.
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            log::warn!("failed to write output: {}", e);
        }
    }
}

/// Collects lines in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the collected lines.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// All lines joined with newlines.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for BufferSink {
    fn emit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
