use num_traits::{Float, Zero};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use crate::graph::undirected::{NodeId, UndirectedEdge, UndirectedGraph};
use crate::{Error, Result};

/// A simple path through an undirected graph: an ordered sequence of at
/// least one node where every consecutive pair is connected by an edge.
///
/// Paths are value objects. Extension via [`Path::append`] and
/// [`Path::prepend`] produces a new path; an existing path is never mutated.
///
/// Equality compares node sequences. The total order compares lengths first
/// and falls back to the node sequence, which keeps ranking by length while
/// making the order of equal-length paths deterministic.
#[derive(Debug, Clone)]
pub struct Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<NodeId>,
    length: W,
}

impl<W> Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a path from a node sequence, validating the chain invariant.
    ///
    /// The length is derived from the graph's own edge lengths, never taken
    /// from the caller. Fails with [`Error::DisconnectedPath`] if any
    /// consecutive pair lacks a connecting edge, and with
    /// [`Error::UnknownNode`] if a single-node path names an absent node.
    pub fn new(graph: &UndirectedGraph<W>, nodes: Vec<NodeId>) -> Result<Self> {
        assert!(!nodes.is_empty(), "a path holds at least one node");

        if nodes.len() == 1 && !graph.contains(nodes[0]) {
            return Err(Error::UnknownNode(nodes[0]));
        }

        let mut length = W::zero();
        for pair in nodes.windows(2) {
            let edge = graph
                .edge_between(pair[0], pair[1])
                .ok_or(Error::DisconnectedPath(pair[0], pair[1]))?;
            length = length + edge.length();
        }

        Ok(Path { nodes, length })
    }

    /// Assembles a path from an already validated node sequence and length.
    /// Callers must guarantee the chain invariant.
    pub(crate) fn from_parts(nodes: Vec<NodeId>, length: W) -> Self {
        debug_assert!(!nodes.is_empty());
        Path { nodes, length }
    }

    /// Returns the ordered node sequence
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the total length: the sum of the connecting edges' lengths
    pub fn length(&self) -> W {
        self.length
    }

    /// Returns the first node of the path
    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    /// Returns the last node of the path
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns true if no node occurs twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|id| seen.insert(*id))
    }

    /// Returns a new path extended at the end by the given edge.
    ///
    /// The added node is the edge endpoint that is not the path's current
    /// end. Fails with [`Error::NonAdjacentEdge`] if neither endpoint of the
    /// edge matches the current end.
    pub fn append(&self, graph: &UndirectedGraph<W>, edge: &UndirectedEdge<W>) -> Result<Self> {
        let end = self.end();
        if !edge.connects(end) {
            let (a, b) = edge.endpoints();
            return Err(Error::NonAdjacentEdge { a, b, endpoint: end });
        }
        let mut nodes = self.nodes.clone();
        nodes.push(edge.other_end(end));
        Path::new(graph, nodes)
    }

    /// Returns a new path extended at the start by the given edge.
    ///
    /// Fails with [`Error::NonAdjacentEdge`] if neither endpoint of the edge
    /// matches the current start.
    pub fn prepend(&self, graph: &UndirectedGraph<W>, edge: &UndirectedEdge<W>) -> Result<Self> {
        let start = self.start();
        if !edge.connects(start) {
            let (a, b) = edge.endpoints();
            return Err(Error::NonAdjacentEdge { a, b, endpoint: start });
        }
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.push(edge.other_end(start));
        nodes.extend_from_slice(&self.nodes);
        Path::new(graph, nodes)
    }
}

/// Two paths are equal iff their node sequences are equal.
impl<W> PartialEq for Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<W> Eq for Path<W> where W: Float + Zero + Debug + Copy {}

impl<W> Hash for Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
    }
}

/// Length-first order with the node sequence as tie-break.
impl<W> Ord for Path<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

impl<W> PartialOrd for Path<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> fmt::Display for Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "]")
    }
}
