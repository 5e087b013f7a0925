//! Proximity search: resolving an arbitrary query coordinate to candidate
//! graph nodes within a metric radius.
//!
//! The planning projection is not metric, so the radius test runs on the
//! geographic frame: query and node coordinates are reprojected to WGS84
//! and compared with great-circle distance. The R-tree only prefilters on
//! the plane with a conservative radius; the haversine test is what admits
//! or rejects a node.

use geo::{Distance, Haversine, Point};

use crate::model::LinkGraph;
use crate::{NodeId, projection};

/// A node whose coordinate lies within the requested buffer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    /// Great-circle distance from the query point, meters.
    pub distance_m: f64,
}

/// How the caller picks one node out of the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidatePick {
    /// Smallest distance to the query point.
    #[default]
    Nearest,
    /// Lowest node id among the matches. Deterministic replacement for the
    /// historical "first spatial match" behavior; mostly useful to keep old
    /// results reproducible.
    FirstIndexed,
}

/// Inflation applied to the planar prefilter radius so that the Mercator
/// scale varying across the buffer cannot exclude a node the exact test
/// would admit.
const PREFILTER_MARGIN: f64 = 1.05;

/// Finds every graph node within `radius_m` of `query` (planar EPSG:3857),
/// ranked by great-circle distance with ties broken by node id.
///
/// An empty result means "no route possible from this endpoint" and is an
/// ordinary outcome, never an error.
pub fn find_candidates(graph: &LinkGraph, query: Point<f64>, radius_m: f64) -> Vec<Candidate> {
    if radius_m <= 0.0 {
        return Vec::new();
    }

    let query_geo = projection::to_lon_lat(query);
    let planar_radius = projection::planar_length(radius_m, query_geo.y()) * PREFILTER_MARGIN;

    let mut candidates: Vec<Candidate> = graph
        .rtree()
        .locate_within_distance([query.x(), query.y()], planar_radius * planar_radius)
        .filter_map(|entry| {
            let [x, y] = *entry.geom();
            let node_geo = projection::to_lon_lat(Point::new(x, y));
            let distance_m = Haversine.distance(query_geo, node_geo);

            if distance_m <= radius_m {
                Some(Candidate {
                    node: graph.node_id(entry.data),
                    distance_m,
                })
            } else {
                log::trace!(
                    "node {} prefiltered at {distance_m:.1} m, outside {radius_m} m buffer",
                    graph.node_id(entry.data)
                );
                None
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance_m
            .total_cmp(&b.distance_m)
            .then_with(|| a.node.cmp(&b.node))
    });
    candidates
}

/// Applies the selection policy to a candidate list produced by
/// [`find_candidates`]. Returns `None` on an empty list.
pub fn pick_candidate(candidates: &[Candidate], pick: CandidatePick) -> Option<NodeId> {
    match pick {
        CandidatePick::Nearest => candidates.first().map(|c| c.node),
        CandidatePick::FirstIndexed => candidates.iter().map(|c| c.node).min(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::Point;

    use super::*;
    use crate::loading::build_link_graph;
    use crate::model::{Link, LinkSet};

    /// Nodes laid out around 30.3 E, 59.9 N; planar coordinates derived by
    /// projecting known lon/lat offsets.
    fn graph_around(offsets_deg: &[(NodeId, f64, f64)]) -> LinkGraph {
        let mut links = Vec::new();
        for window in offsets_deg.windows(2) {
            let (a_id, a_lon, a_lat) = window[0];
            let (b_id, b_lon, b_lat) = window[1];
            links.push(Link {
                start_id: a_id,
                end_id: b_id,
                start: projection::from_lon_lat(Point::new(a_lon, a_lat)),
                end: projection::from_lon_lat(Point::new(b_lon, b_lat)),
                weight: 1.0,
                color: None,
                width: None,
            });
        }
        build_link_graph(&LinkSet::new(links)).unwrap()
    }

    #[test]
    fn finds_nodes_inside_radius_only() {
        // ~0.001 deg of longitude at 59.9 N is ~56 m of ground distance.
        let graph = graph_around(&[
            (1, 30.3, 59.9),
            (2, 30.301, 59.9),
            (3, 30.36, 59.9), // kilometers away
        ]);
        let query = projection::from_lon_lat(Point::new(30.3, 59.9));

        let candidates = find_candidates(&graph, query, 200.0);
        let ids: Vec<NodeId> = candidates.iter().map(|c| c.node).collect();

        assert_eq!(ids, vec![1, 2]);
        for candidate in &candidates {
            assert!(candidate.distance_m <= 200.0);
        }
        assert_relative_eq!(candidates[0].distance_m, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn candidates_are_ranked_by_distance() {
        let graph = graph_around(&[
            (1, 30.302, 59.9),
            (2, 30.301, 59.9),
            (3, 30.3005, 59.9),
        ]);
        let query = projection::from_lon_lat(Point::new(30.3, 59.9));

        let candidates = find_candidates(&graph, query, 500.0);
        let ids: Vec<NodeId> = candidates.iter().map(|c| c.node).collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn far_query_returns_empty() {
        let graph = graph_around(&[(1, 30.3, 59.9), (2, 30.301, 59.9)]);
        let query = projection::from_lon_lat(Point::new(31.0, 59.9));

        assert!(find_candidates(&graph, query, 500.0).is_empty());
    }

    #[test]
    fn pick_policies_differ() {
        let candidates = vec![
            Candidate {
                node: 9,
                distance_m: 10.0,
            },
            Candidate {
                node: 2,
                distance_m: 40.0,
            },
        ];

        assert_eq!(pick_candidate(&candidates, CandidatePick::Nearest), Some(9));
        assert_eq!(
            pick_candidate(&candidates, CandidatePick::FirstIndexed),
            Some(2)
        );
        assert_eq!(pick_candidate(&[], CandidatePick::Nearest), None);
    }
}
