//! Raw link records as the network-data service delivers them.
//!
//! The provider sends a flat JSON array of camelCase records; this module
//! deserializes that shape and converts it into the internal [`LinkSet`].
//! Transport (HTTP or otherwise) stays outside the core.

use geo::Point;
use serde::Deserialize;

use crate::model::{Link, LinkSet};
use crate::{Error, NodeId};

/// One link record on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub start_id: NodeId,
    pub end_id: NodeId,
    /// Planar `[x, y]` of the start endpoint.
    pub coordinate_start: [f64; 2],
    /// Planar `[x, y]` of the end endpoint.
    pub coordinate_end: [f64; 2],
    pub weight: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
}

impl From<LinkRecord> for Link {
    fn from(record: LinkRecord) -> Self {
        Link {
            start_id: record.start_id,
            end_id: record.end_id,
            start: Point::new(record.coordinate_start[0], record.coordinate_start[1]),
            end: Point::new(record.coordinate_end[0], record.coordinate_end[1]),
            weight: record.weight,
            color: record.color,
            width: record.width,
        }
    }
}

/// Parses a provider payload (JSON array of link records) into a [`LinkSet`].
///
/// # Errors
///
/// Returns [`Error::InvalidData`] when the payload is not a valid record
/// array. An empty array parses fine; the builder rejects it later.
pub fn link_set_from_json(payload: &str) -> Result<LinkSet, Error> {
    let records: Vec<LinkRecord> = serde_json::from_str(payload)
        .map_err(|e| Error::InvalidData(format!("malformed link payload: {e}")))?;

    Ok(LinkSet::new(records.into_iter().map(Link::from).collect()))
}
