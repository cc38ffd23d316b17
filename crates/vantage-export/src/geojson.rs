//! GeoJSON observer point dataset.
//!
//! One `Point` feature per recorded pass, carrying the pass statistics
//! as properties. The collection is tagged with a named CRS so the
//! points can be placed back on the surface they were chosen from.

use std::io::Write;

use serde::Serialize;
use vantage_engine::PassRow;

use crate::error::ExportError;

/// Top-level GeoJSON object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    crs: Option<Crs>,
    /// One feature per pass, in pass order.
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Crs {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: CrsProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct CrsProperties {
    name: String,
}

/// A single observer point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Point,
    /// Pass statistics for this observer.
    pub properties: ObserverProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Point {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

/// Properties attached to each observer feature.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObserverProperties {
    /// 1-based pass index.
    pub pass: u32,
    /// Targets newly covered in this pass.
    pub pass_vis: usize,
    /// Targets this observer sees across the universe.
    pub observer_vis: usize,
    /// Share of the remaining targets covered by this pass.
    pub pass_coverage_pct: f64,
    /// Share of the universe this observer sees.
    pub observer_coverage_pct: f64,
    /// Cumulative coverage after this pass.
    pub cumulative_coverage_pct: f64,
}

impl Feature {
    /// The point's `[x, y]` coordinates.
    pub fn coordinates(&self) -> [f64; 2] {
        self.geometry.coordinates
    }
}

/// Build a feature collection from pass rows. `crs_name` is written as
/// a named CRS (e.g. `"EPSG:32633"`); `None` omits the member.
pub fn observer_collection(rows: &[PassRow], crs_name: Option<&str>) -> FeatureCollection {
    let features = rows
        .iter()
        .map(|row| Feature {
            kind: "Feature",
            geometry: Point {
                kind: "Point",
                coordinates: [row.result.location.x, row.result.location.y],
            },
            properties: ObserverProperties {
                pass: row.result.pass.0,
                pass_vis: row.result.pass_vis,
                observer_vis: row.result.total_vis,
                pass_coverage_pct: row.stats.pass_coverage_pct,
                observer_coverage_pct: row.stats.observer_coverage_pct,
                cumulative_coverage_pct: row.stats.cumulative_coverage_pct,
            },
        })
        .collect();
    FeatureCollection {
        kind: "FeatureCollection",
        crs: crs_name.map(|name| Crs {
            kind: "name",
            properties: CrsProperties {
                name: name.to_owned(),
            },
        }),
        features,
    }
}

/// Serialize the observer collection for `rows` as pretty JSON.
pub fn write_observers<W: Write>(
    mut writer: W,
    rows: &[PassRow],
    crs_name: Option<&str>,
) -> Result<(), ExportError> {
    let collection = observer_collection(rows, crs_name);
    serde_json::to_writer_pretty(&mut writer, &collection)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
