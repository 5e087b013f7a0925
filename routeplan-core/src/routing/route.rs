//! Materialization of a node path into an ordered coordinate sequence.

use geo::{Coord, LineString};

use crate::Error;
use crate::model::CoordinateIndex;
use crate::routing::Path;

/// Ordered coordinate sequence derived from a [`Path`], suitable for
/// rendering as connected line segments.
///
/// Degenerate geometries (zero or one coordinate) are valid and arise from
/// empty and single-node paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGeometry {
    coords: Vec<Coord<f64>>,
}

impl RouteGeometry {
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn into_line_string(self) -> LineString<f64> {
        LineString::new(self.coords)
    }
}

/// Maps each node id of `path`, in order, to its coordinate.
///
/// # Errors
///
/// Returns [`Error::MissingCoordinate`] if any path node lacks an index
/// entry. A path produced from the same link batch as the index cannot
/// trigger this; hitting it means the caller mixed structures from
/// different batches.
pub fn assemble_route(path: &Path, index: &CoordinateIndex) -> Result<RouteGeometry, Error> {
    let mut coords = Vec::with_capacity(path.len());
    for &node in path.nodes() {
        let point = index.get(node).ok_or(Error::MissingCoordinate(node))?;
        coords.push(Coord {
            x: point.x(),
            y: point.y(),
        });
    }

    Ok(RouteGeometry { coords })
}
