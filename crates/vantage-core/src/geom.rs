//! Planar geometry: [`Location`] and mean-center computation.

use std::fmt;

/// A point in the planar coordinate system shared by targets,
/// candidate observers, and the underlying surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    /// Easting / column-axis coordinate.
    pub x: f64,
    /// Northing / row-axis coordinate.
    pub y: f64,
}

impl Location {
    /// Construct a location from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Arithmetic mean of a set of locations (the "mean center").
///
/// Returns `None` for an empty input.
pub fn mean_center<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Option<Location> {
    let mut n = 0usize;
    let (mut sx, mut sy) = (0.0f64, 0.0f64);
    for loc in locations {
        sx += loc.x;
        sy += loc.y;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let n = n as f64;
    Some(Location::new(sx / n, sy / n))
}
