use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::model::LinkGraph;
use crate::{Error, NodeId, Weight};

#[derive(Copy, Clone)]
struct State {
    cost: Weight,
    /// Monotonic push counter. Equal-cost entries pop in insertion order,
    /// which keeps expansion deterministic for a fixed graph.
    seq: u64,
    node: NodeIndex,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // then min-heap by insertion sequence.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Ordered node sequence from start to goal with its accumulated cost.
///
/// Empty when the endpoints are disconnected; a start equal to the goal
/// yields a single-node path of cost 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: Weight,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Weight) -> Self {
        Self { nodes, cost }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of traversed edge weights.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Dijkstra's algorithm between two node ids, with early exit at the goal.
///
/// Costs are the link weights; the builder guarantees they are non-negative,
/// which is what makes greedy frontier expansion correct.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] when either endpoint is not part of the
/// graph, checked before the search starts. Disconnected endpoints are not
/// an error; they yield an empty [`Path`].
pub fn find_path(graph: &LinkGraph, start: NodeId, goal: NodeId) -> Result<Path, Error> {
    let start_index = graph.node_index(start).ok_or(Error::UnknownNode(start))?;
    let goal_index = graph.node_index(goal).ok_or(Error::UnknownNode(goal))?;

    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Weight> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4 + 1);
    let mut next_seq = 0u64;

    heap.push(State {
        cost: 0.0,
        seq: next_seq,
        node: start_index,
    });
    distances.insert(start_index, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == goal_index {
            break;
        }

        // Skip stale entries superseded by a cheaper path.
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    next_seq += 1;
                    heap.push(State {
                        cost: next_cost,
                        seq: next_seq,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        next_seq += 1;
                        heap.push(State {
                            cost: next_cost,
                            seq: next_seq,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let Some(&total_cost) = distances.get(&goal_index) else {
        return Ok(Path::empty());
    };

    // Follow predecessors backward from goal to start.
    let mut nodes = Vec::new();
    let mut current = goal_index;
    while current != start_index {
        nodes.push(graph.node_id(current));
        match predecessors.get(&current) {
            Some(&previous) => current = previous,
            None => return Ok(Path::empty()),
        }
    }
    nodes.push(graph.node_id(start_index));
    nodes.reverse();

    Ok(Path::new(nodes, total_cost))
}
