use crate::domain::charge::ChargeRequest;
use crate::error::Result;
use std::io::Write;

/// Writes charge requests, one per line.
pub struct ChargeWriter<W: Write> {
    writer: W,
}

impl<W: Write> ChargeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes each request as its diagnostic string.
    pub fn write_diagnostics(&mut self, requests: &[ChargeRequest]) -> Result<()> {
        for request in requests {
            writeln!(self.writer, "{}", request)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes each request as a single-line JSON object.
    pub fn write_json_lines(&mut self, requests: &[ChargeRequest]) -> Result<()> {
        for request in requests {
            serde_json::to_writer(&mut self.writer, request)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
