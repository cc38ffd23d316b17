//! Result artifacts for Vantage runs.
//!
//! - [`PassTableWriter`]: one delimited row per pass with the three
//!   coverage percentages.
//! - [`AnnotationWriter`]: one delimited row per target listing the
//!   passes whose observer sees it.
//! - [`geojson`]: the chosen observers as a GeoJSON point dataset.
//!
//! All writers are generic over [`std::io::Write`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod annotation;
pub mod error;
pub mod geojson;
pub mod table;

pub use annotation::AnnotationWriter;
pub use error::ExportError;
pub use geojson::{observer_collection, write_observers, Feature, FeatureCollection};
pub use table::{PassTableWriter, PASS_TABLE_HEADER};

/// Default field delimiter for delimited tables.
pub const DEFAULT_DELIMITER: char = ',';

/// Separator between pass indices inside the annotation `observers`
/// field. Never equal to a sensible field delimiter.
pub const PASS_LIST_SEPARATOR: char = ';';
