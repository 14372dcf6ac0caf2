use crate::application::errors::SinkError;

/// OutputSink trait - line-oriented destination for aggregated output
pub trait OutputSink {
    /// Write a single line; the sink adds the line terminator
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    /// Flush any buffered lines
    fn flush(&mut self) -> Result<(), SinkError>;
}
