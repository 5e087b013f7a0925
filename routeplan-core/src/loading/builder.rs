use hashbrown::HashMap;
use itertools::Itertools;
use log::info;
use petgraph::graph::{DiGraph, NodeIndex};
use rstar::RTree;

use crate::model::{CoordinateIndex, IndexedPoint, LinkEdge, LinkGraph, LinkNode, LinkSet};
use crate::{Error, NodeId};

/// Builds the routing graph, coordinate index and spatial index from one
/// batch of links.
///
/// Node identity is implicit: every id that appears as a link endpoint
/// becomes a node. When the same id arrives with different coordinates the
/// last-seen coordinate wins, in both the coordinate index and the graph
/// node weight. Every link becomes exactly one directed edge; reverse
/// travel requires the reverse link in the input.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty batch and
/// [`Error::InvalidData`] for a link with a negative or non-finite weight.
pub fn build_link_graph(links: &LinkSet) -> Result<LinkGraph, Error> {
    if links.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut graph = DiGraph::with_capacity(links.len(), links.len());
    let mut node_lookup: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(links.len());
    let mut coords = CoordinateIndex::default();

    for link in links {
        if !link.weight.is_finite() || link.weight < 0.0 {
            return Err(Error::InvalidData(format!(
                "link {} -> {} has weight {}, expected a non-negative number",
                link.start_id, link.end_id, link.weight
            )));
        }

        let start = intern_node(&mut graph, &mut node_lookup, &mut coords, link.start_id, link.start);
        let end = intern_node(&mut graph, &mut node_lookup, &mut coords, link.end_id, link.end);

        // Parallel edges between the same endpoints are all kept.
        graph.add_edge(start, end, LinkEdge { weight: link.weight });
    }

    let rtree = RTree::bulk_load(
        node_lookup
            .iter()
            .map(|(&id, &index)| {
                // The index entry always carries the final (last-written)
                // coordinate for the id.
                let point = coords.get(id).unwrap_or(graph[index].geometry);
                IndexedPoint::new([point.x(), point.y()], index)
            })
            .collect(),
    );

    let distinct_endpoints = links
        .iter()
        .flat_map(|link| [link.start_id, link.end_id])
        .unique()
        .count();
    info!(
        "built link graph: {} nodes ({distinct_endpoints} distinct endpoints), {} edges from {} links",
        graph.node_count(),
        graph.edge_count(),
        links.len()
    );

    Ok(LinkGraph::new(graph, node_lookup, coords, rtree))
}

fn intern_node(
    graph: &mut DiGraph<LinkNode, LinkEdge>,
    node_lookup: &mut HashMap<NodeId, NodeIndex>,
    coords: &mut CoordinateIndex,
    id: NodeId,
    geometry: geo::Point<f64>,
) -> NodeIndex {
    let index = match node_lookup.entry(id) {
        hashbrown::hash_map::Entry::Vacant(entry) => {
            let index = graph.add_node(LinkNode { id, geometry });
            entry.insert(index);
            index
        }
        hashbrown::hash_map::Entry::Occupied(entry) => {
            let index = *entry.get();
            // Last write wins; keep the graph weight in step with the index.
            graph[index].geometry = geometry;
            index
        }
    };
    coords.insert(id, geometry);
    index
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::Link;

    fn link(start_id: NodeId, end_id: NodeId, start: (f64, f64), end: (f64, f64), weight: f64) -> Link {
        Link {
            start_id,
            end_id,
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            weight,
            color: None,
            width: None,
        }
    }

    #[test]
    fn empty_link_set_is_rejected() {
        let result = build_link_graph(&LinkSet::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let links = LinkSet::new(vec![link(1, 2, (0.0, 0.0), (10.0, 0.0), -1.0)]);
        assert!(matches!(build_link_graph(&links), Err(Error::InvalidData(_))));
    }

    #[test]
    fn node_universe_equals_distinct_endpoints() {
        let links = LinkSet::new(vec![
            link(1, 2, (0.0, 0.0), (10.0, 0.0), 1.0),
            link(2, 3, (10.0, 0.0), (20.0, 0.0), 2.0),
            link(1, 3, (0.0, 0.0), (20.0, 0.0), 5.0),
        ]);
        let graph = build_link_graph(&links).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        for id in [1, 2, 3] {
            assert!(graph.contains(id));
            assert!(graph.coordinates().contains(id));
        }
        assert!(!graph.contains(4));
    }

    #[test]
    fn duplicate_links_become_parallel_edges() {
        let links = LinkSet::new(vec![
            link(1, 2, (0.0, 0.0), (10.0, 0.0), 1.0),
            link(1, 2, (0.0, 0.0), (10.0, 0.0), 4.0),
        ]);
        let graph = build_link_graph(&links).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn last_seen_coordinate_wins() {
        let links = LinkSet::new(vec![
            link(1, 2, (0.0, 0.0), (10.0, 0.0), 1.0),
            link(2, 1, (10.0, 0.0), (3.0, 4.0), 1.0),
        ]);
        let graph = build_link_graph(&links).unwrap();

        let coord = graph.coordinates().get(1).unwrap();
        assert_eq!((coord.x(), coord.y()), (3.0, 4.0));
    }

    #[test]
    fn edges_stay_directed() {
        let links = LinkSet::new(vec![link(1, 2, (0.0, 0.0), (10.0, 0.0), 1.0)]);
        let graph = build_link_graph(&links).unwrap();

        // One directed edge only; no implicit reverse edge.
        assert_eq!(graph.edge_count(), 1);
    }
}
