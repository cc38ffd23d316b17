//! Per-target observer table.

use std::io::Write;

use vantage_core::TargetUniverse;
use vantage_engine::ObserverAssignment;

use crate::error::{check_delimiter, ExportError};
use crate::{DEFAULT_DELIMITER, PASS_LIST_SEPARATOR};

/// Writes one row per target: `target_id`, `x`, `y`, `observers`.
///
/// `observers` joins the pass indices with [`PASS_LIST_SEPARATOR`];
/// a target no chosen observer sees gets an empty field.
pub struct AnnotationWriter<W: Write> {
    writer: W,
    delimiter: char,
}

impl<W: Write> AnnotationWriter<W> {
    /// Comma-delimited writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Writer with a custom field delimiter.
    pub fn with_delimiter(writer: W, delimiter: char) -> Result<Self, ExportError> {
        check_delimiter(delimiter)?;
        Ok(Self { writer, delimiter })
    }

    /// Write the header and every target of `universe`, in universe
    /// order. Returns the number of rows written.
    pub fn write(
        &mut self,
        universe: &TargetUniverse,
        assignment: &ObserverAssignment,
    ) -> Result<usize, ExportError> {
        let d = self.delimiter;
        writeln!(self.writer, "target_id{d}x{d}y{d}observers")?;
        let sep = PASS_LIST_SEPARATOR.to_string();
        let mut rows = 0;
        for point in universe.iter() {
            let observers = assignment
                .passes_for(point.id)
                .unwrap_or_default()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(&sep);
            writeln!(
                self.writer,
                "{}{d}{}{d}{}{d}{observers}",
                point.id, point.location.x, point.location.y
            )?;
            rows += 1;
        }
        self.writer.flush()?;
        Ok(rows)
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
