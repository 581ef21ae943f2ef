use log::debug;
use num_traits::{Float, NumCast, Zero};
use std::fmt::Debug;

use crate::algorithm::dijkstra::shortest_path_tree;
use crate::algorithm::yen;
use crate::cache::QueryCache;
use crate::graph::{NodeId, Path, UndirectedGraph};
use crate::{Error, Result};

/// Slack absorbing floating-point noise around a tolerance factor of 1.0.
const TOLERANCE_EPSILON: f64 = 1e-9;

/// The shortest-path query engine.
///
/// Owns the [`QueryCache`] that amortizes repeated queries sharing a start
/// node: a full single-source run primes the cache with the primary
/// shortest path to every node it reached, not only the queried end.
///
/// A finder serves concurrent queries against one shared, immutable graph;
/// all methods take `&self` and the cache serializes its own access.
#[derive(Debug)]
pub struct PathFinder<W>
where
    W: Float + Zero + Debug + Copy,
{
    cache: QueryCache<W>,
}

impl<W> PathFinder<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a finder with an empty query cache
    pub fn new() -> Self {
        PathFinder {
            cache: QueryCache::new(),
        }
    }

    /// Returns the query cache
    pub fn cache(&self) -> &QueryCache<W> {
        &self.cache
    }

    /// Computes all simple paths from `start` to `end` whose length does
    /// not exceed `tolerance_factor` times the shortest-path length,
    /// ascending by length with the node sequence breaking ties.
    ///
    /// A tolerance factor of exactly 1.0 yields the single primary shortest
    /// path: one deterministic canonical representative even when several
    /// shortest paths tie in length. An unreachable `end` yields an empty
    /// vector, not an error.
    ///
    /// Fails with [`Error::InvalidTolerance`] if the factor is below 1.0
    /// and with [`Error::UnknownNode`] if either endpoint is absent from
    /// the graph.
    pub fn find_paths(
        &self,
        graph: &UndirectedGraph<W>,
        start: NodeId,
        end: NodeId,
        tolerance_factor: f64,
    ) -> Result<Vec<Path<W>>> {
        if !(tolerance_factor >= 1.0 - TOLERANCE_EPSILON) {
            return Err(Error::InvalidTolerance(tolerance_factor));
        }
        if !graph.contains(start) {
            return Err(Error::UnknownNode(start));
        }
        if !graph.contains(end) {
            return Err(Error::UnknownNode(end));
        }

        let primary = match self.cache.get(start, end) {
            Some(path) => {
                debug!("cache hit for ({start}, {end})");
                Some(path)
            }
            None => {
                let tree = shortest_path_tree(graph, start);
                // Amortization: prime the cache for every node the full
                // run reached, not only the queried end. The source itself
                // gains its trivial zero-length path, so repeated
                // start == end queries are served from the cache too.
                for node in tree.reachable_nodes() {
                    if let Some(path) = tree.path_to(node) {
                        self.cache.put(start, node, path);
                    }
                }
                debug!(
                    "computed shortest-path tree from {start}, cache now holds {} entries",
                    self.cache.len()
                );
                tree.path_to(end)
            }
        };

        // Unreachability is a normal graph property, not an error.
        let Some(primary) = primary else {
            return Ok(Vec::new());
        };

        if tolerance_factor <= 1.0 + TOLERANCE_EPSILON {
            return Ok(vec![primary]);
        }

        let factor: W = NumCast::from(tolerance_factor)
            .ok_or(Error::InvalidTolerance(tolerance_factor))?;
        let bound = primary.length() * factor;
        Ok(yen::enumerate_within_bound(graph, primary, bound))
    }
}

impl<W> Default for PathFinder<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
