//! Delimited pass table.

use std::io::Write;

use vantage_engine::PassRow;

use crate::error::{check_delimiter, ExportError};
use crate::DEFAULT_DELIMITER;

/// Column names, in order.
pub const PASS_TABLE_HEADER: [&str; 8] = [
    "pass",
    "observer_x",
    "observer_y",
    "pass_vis",
    "observer_vis",
    "pass_coverage_pct",
    "observer_coverage_pct",
    "cumulative_coverage_pct",
];

/// Streams pass rows to a delimited table.
///
/// The header is written before the first row. Percentages are written
/// with two decimals, coordinates with full precision.
///
/// # Examples
///
/// ```
/// use vantage_export::PassTableWriter;
///
/// let mut buf = Vec::new();
/// let mut writer = PassTableWriter::new(&mut buf);
/// writer.write_rows(&[]).unwrap();
/// drop(writer);
/// assert!(String::from_utf8(buf).unwrap().starts_with("pass,observer_x"));
/// ```
pub struct PassTableWriter<W: Write> {
    writer: W,
    delimiter: char,
    header_written: bool,
    rows_written: usize,
}

impl<W: Write> PassTableWriter<W> {
    /// Comma-delimited writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: DEFAULT_DELIMITER,
            header_written: false,
            rows_written: 0,
        }
    }

    /// Writer with a custom field delimiter.
    ///
    /// # Errors
    ///
    /// [`ExportError::InvalidDelimiter`] for alphanumerics, `.`, `-`,
    /// quotes, line breaks and the pass-list separator.
    pub fn with_delimiter(writer: W, delimiter: char) -> Result<Self, ExportError> {
        check_delimiter(delimiter)?;
        Ok(Self {
            delimiter,
            ..Self::new(writer)
        })
    }

    /// Write one row, preceded by the header if nothing was written yet.
    pub fn write_row(&mut self, row: &PassRow) -> Result<(), ExportError> {
        self.ensure_header()?;
        let r = &row.result;
        let s = &row.stats;
        let d = self.delimiter;
        writeln!(
            self.writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{:.2}{d}{:.2}{d}{:.2}",
            r.pass,
            r.location.x,
            r.location.y,
            r.pass_vis,
            r.total_vis,
            s.pass_coverage_pct,
            s.observer_coverage_pct,
            s.cumulative_coverage_pct,
        )?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write every row. An empty slice still produces the header.
    pub fn write_rows(&mut self, rows: &[PassRow]) -> Result<(), ExportError> {
        self.ensure_header()?;
        for row in rows {
            self.write_row(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Number of data rows written.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_header(&mut self) -> Result<(), ExportError> {
        if !self.header_written {
            let header = PASS_TABLE_HEADER.join(&self.delimiter.to_string());
            writeln!(self.writer, "{header}")?;
            self.header_written = true;
        }
        Ok(())
    }
}
