use log::trace;
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::data_structures::MinPriorityQueue;
use crate::graph::undirected::edge_key;
use crate::graph::{NodeId, Path, UndirectedGraph};

/// Shortest-path tree produced by a full single-source Dijkstra run.
///
/// Holds the final distance and one predecessor for every node reachable
/// from the source. Nodes absent from the distance map are unreachable,
/// which is a normal graph property rather than an error.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    source: NodeId,
    distances: HashMap<NodeId, W>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the source node the tree is rooted at
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the shortest distance from the source to the given node,
    /// or `None` if it is unreachable
    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(&node).copied()
    }

    /// Returns an iterator over all nodes reachable from the source,
    /// including the source itself
    pub fn reachable_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.distances.keys().copied()
    }

    /// Reconstructs the primary shortest path from the source to `target`
    /// by walking predecessor links backwards, or returns `None` if the
    /// target is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Path<W>> {
        let length = self.distance(target)?;

        let mut nodes = Vec::new();
        let mut current = target;
        while current != self.source {
            nodes.push(current);
            match self.predecessors.get(&current) {
                Some(&pred) => current = pred,
                // A reachable non-source node always has a predecessor.
                None => {
                    debug_assert!(false, "broken predecessor chain at {current}");
                    return None;
                }
            }
        }
        nodes.push(self.source);
        nodes.reverse();

        Some(Path::from_parts(nodes, length))
    }
}

/// Runs Dijkstra's algorithm from `source` over the full graph.
///
/// Every reachable node is settled, so the resulting tree carries exact
/// distances for all of them; the query cache reuses this to answer later
/// queries rooted at the same source. The frontier breaks distance ties by
/// node id and a predecessor is only replaced on a strict improvement,
/// which makes the reconstructed paths deterministic for a fixed edge
/// construction order.
pub fn shortest_path_tree<W>(graph: &UndirectedGraph<W>, source: NodeId) -> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let mut distances: HashMap<NodeId, W> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();

    distances.insert(source, W::zero());
    let mut frontier = MinPriorityQueue::new();
    frontier.push(source, W::zero());

    while let Some((u, dist_u)) = frontier.pop() {
        // Stale frontier entry for an already settled node
        if !settled.insert(u) {
            continue;
        }
        debug_assert!(
            distances.get(&u) == Some(&dist_u),
            "settled distance must match the tentative distance"
        );

        for (v, weight) in graph.neighbors(u) {
            if settled.contains(&v) {
                continue;
            }
            let new_dist = dist_u + weight;
            let improves = match distances.get(&v) {
                None => true,
                Some(&current) => new_dist < current,
            };
            if improves {
                distances.insert(v, new_dist);
                predecessors.insert(v, u);
                frontier.push(v, new_dist);
            }
        }
    }

    trace!(
        "settled {} of {} nodes from source {source}",
        settled.len(),
        graph.node_count()
    );

    ShortestPathTree {
        source,
        distances,
        predecessors,
    }
}

/// Runs Dijkstra from `source` to `target` on the graph minus the banned
/// nodes and edges, stopping as soon as the target is settled.
///
/// This is the spur computation of Yen's algorithm: `banned_nodes` holds
/// the root-prefix nodes a spur path must avoid and `banned_edges` the
/// normalized node pairs whose edges are removed from consideration.
/// Returns the spur path's node sequence and length, or `None` if the
/// target is unreachable under these constraints.
pub(crate) fn constrained_shortest_path<W>(
    graph: &UndirectedGraph<W>,
    source: NodeId,
    target: NodeId,
    banned_nodes: &HashSet<NodeId>,
    banned_edges: &HashSet<(NodeId, NodeId)>,
) -> Option<(Vec<NodeId>, W)>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let mut distances: HashMap<NodeId, W> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();

    distances.insert(source, W::zero());
    let mut frontier = MinPriorityQueue::new();
    frontier.push(source, W::zero());

    while let Some((u, dist_u)) = frontier.pop() {
        if !settled.insert(u) {
            continue;
        }
        if u == target {
            let mut nodes = vec![target];
            let mut current = target;
            while current != source {
                current = predecessors[&current];
                nodes.push(current);
            }
            nodes.reverse();
            return Some((nodes, dist_u));
        }

        for (v, weight) in graph.neighbors(u) {
            if settled.contains(&v)
                || banned_nodes.contains(&v)
                || banned_edges.contains(&edge_key(u, v))
            {
                continue;
            }
            let new_dist = dist_u + weight;
            let improves = match distances.get(&v) {
                None => true,
                Some(&current) => new_dist < current,
            };
            if improves {
                distances.insert(v, new_dist);
                predecessors.insert(v, u);
                frontier.push(v, new_dist);
            }
        }
    }

    None
}
