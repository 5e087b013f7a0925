//! Derived routing structures: weighted graph, coordinate index and the
//! spatial index used for proximity search.
//!
//! All three are built once per link batch by [`crate::loading`] and are
//! read-only afterward; a planning session that needs different links must
//! build a fresh [`LinkGraph`].

use geo::Point;
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::{NodeId, Weight};

/// Entry of the node R-tree: planar `[x, y]` with the petgraph index.
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Graph node weight: the stable link-endpoint id and its coordinate.
#[derive(Debug, Clone)]
pub struct LinkNode {
    pub id: NodeId,
    /// Planar EPSG:3857 coordinate.
    pub geometry: Point<f64>,
}

/// Graph edge weight: the traversal cost of the originating link.
#[derive(Debug, Clone, Copy)]
pub struct LinkEdge {
    pub weight: Weight,
}

/// Mapping from node id to its planar coordinate.
///
/// Built in one pass over the link batch with a last-write-wins overwrite
/// rule: if the same id appears with two different coordinates, the
/// last-seen coordinate is the one kept. Shares its id universe with the
/// graph by construction.
#[derive(Debug, Clone, Default)]
pub struct CoordinateIndex {
    coords: HashMap<NodeId, Point<f64>>,
}

impl CoordinateIndex {
    pub fn get(&self, id: NodeId) -> Option<Point<f64>> {
        self.coords.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.coords.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point<f64>)> + '_ {
        self.coords.iter().map(|(&id, &point)| (id, point))
    }

    pub(crate) fn insert(&mut self, id: NodeId, point: Point<f64>) {
        self.coords.insert(id, point);
    }
}

/// Weighted directed graph derived from one [`crate::model::LinkSet`].
///
/// Edges are directed exactly as the links are; bidirectional travel
/// requires the reverse link to be present in the input. Parallel edges
/// between the same endpoints are kept.
pub struct LinkGraph {
    graph: DiGraph<LinkNode, LinkEdge>,
    node_lookup: HashMap<NodeId, NodeIndex>,
    coords: CoordinateIndex,
    rtree: RTree<IndexedPoint>,
}

impl LinkGraph {
    pub(crate) fn new(
        graph: DiGraph<LinkNode, LinkEdge>,
        node_lookup: HashMap<NodeId, NodeIndex>,
        coords: CoordinateIndex,
        rtree: RTree<IndexedPoint>,
    ) -> Self {
        Self {
            graph,
            node_lookup,
            coords,
            rtree,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node_lookup.contains_key(&id)
    }

    pub fn coordinates(&self) -> &CoordinateIndex {
        &self.coords
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    /// Stable id of a node the graph itself handed out.
    pub(crate) fn node_id(&self, index: NodeIndex) -> NodeId {
        self.graph[index].id
    }

    pub(crate) fn edges(
        &self,
        node: NodeIndex,
    ) -> petgraph::graph::Edges<'_, LinkEdge, petgraph::Directed> {
        self.graph.edges(node)
    }

    pub(crate) fn rtree(&self) -> &RTree<IndexedPoint> {
        &self.rtree
    }
}

impl std::fmt::Debug for LinkGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
