use log::trace;
use num_traits::{Float, Zero};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;

use crate::algorithm::dijkstra::constrained_shortest_path;
use crate::graph::undirected::edge_key;
use crate::graph::{NodeId, Path, UndirectedGraph};

/// Enumerates every simple path between the primary path's endpoints whose
/// length does not exceed `bound`, using a bounded variant of Yen's
/// algorithm seeded with the primary shortest path.
///
/// Candidate paths are ranked by length with the node sequence as
/// tie-break, so discovery order is deterministic. The returned vector is
/// sorted in that same order and contains no duplicates.
pub(crate) fn enumerate_within_bound<W>(
    graph: &UndirectedGraph<W>,
    primary: Path<W>,
    bound: W,
) -> Vec<Path<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let end = primary.end();

    let mut seen: HashSet<Vec<NodeId>> = HashSet::new();
    seen.insert(primary.nodes().to_vec());

    let mut accepted: Vec<Path<W>> = vec![primary];
    let mut candidates: BinaryHeap<Reverse<Path<W>>> = BinaryHeap::new();

    let mut k = 0;
    while k < accepted.len() {
        let base = accepted[k].clone();
        let base_nodes = base.nodes();

        // Cumulative length of the prefix ending at each index of the base
        // path, for pricing the spliced candidates.
        let mut prefix_lengths = Vec::with_capacity(base_nodes.len());
        let mut running = W::zero();
        prefix_lengths.push(running);
        for pair in base_nodes.windows(2) {
            match graph.edge_between(pair[0], pair[1]) {
                Some(edge) => running = running + edge.length(),
                None => unreachable!("accepted paths satisfy the chain invariant"),
            }
            prefix_lengths.push(running);
        }

        for i in 0..base_nodes.len() - 1 {
            let spur = base_nodes[i];
            let root = &base_nodes[..=i];

            // Remove the edge every accepted path sharing this root takes
            // out of the spur node, forcing the spur path to diverge.
            let mut banned_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
            for path in &accepted {
                let nodes = path.nodes();
                if nodes.len() > i + 1 && nodes[..=i] == *root {
                    banned_edges.insert(edge_key(nodes[i], nodes[i + 1]));
                }
            }
            // Remove the root's interior nodes so spur paths stay simple.
            let banned_nodes: HashSet<NodeId> = root[..i].iter().copied().collect();

            if let Some((spur_nodes, spur_length)) =
                constrained_shortest_path(graph, spur, end, &banned_nodes, &banned_edges)
            {
                let total = prefix_lengths[i] + spur_length;
                if total > bound {
                    continue;
                }
                let mut nodes = root[..i].to_vec();
                nodes.extend(spur_nodes);
                if seen.insert(nodes.clone()) {
                    candidates.push(Reverse(Path::from_parts(nodes, total)));
                }
            }
        }

        // The cheapest undetermined candidate is the next accepted path;
        // once it exceeds the bound, so does everything after it.
        match candidates.pop() {
            Some(Reverse(path)) if path.length() <= bound => accepted.push(path),
            _ => break,
        }
        k += 1;
    }

    trace!(
        "accepted {} paths within bound between {} and {end}",
        accepted.len(),
        accepted[0].start()
    );

    accepted.sort();
    accepted
}
