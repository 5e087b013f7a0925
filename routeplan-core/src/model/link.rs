//! Raw network links as supplied by the link data provider.

use geo::Point;

use crate::{NodeId, Weight};

/// One directed traversable edge between two coordinate-bearing endpoints.
///
/// Coordinates are planar EPSG:3857. The rendering attributes (`color`,
/// `width`) are carried through for display callers and never read by the
/// planning algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub start_id: NodeId,
    pub end_id: NodeId,
    pub start: Point<f64>,
    pub end: Point<f64>,
    /// Non-negative traversal cost (distance, time or similar).
    pub weight: Weight,
    pub color: Option<String>,
    pub width: Option<f64>,
}

/// Immutable batch of links for one planning session.
///
/// Links are never mutated after ingestion; duplicate links between the same
/// endpoints are retained and become parallel edges in the graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSet {
    links: Vec<Link>,
}

impl LinkSet {
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }
}

impl From<Vec<Link>> for LinkSet {
    fn from(links: Vec<Link>) -> Self {
        Self::new(links)
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
