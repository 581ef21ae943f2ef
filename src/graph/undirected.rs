use num_traits::{Float, ToPrimitive, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Identity value of a node; two nodes are equal iff their ids are equal.
pub type NodeId = u64;

/// Normalized key for an unordered node pair.
pub(crate) fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An undirected edge: an unordered pair of node ids with a strictly
/// positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    a: NodeId,
    b: NodeId,
    length: W,
}

impl<W> UndirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns both end node ids in the order they were supplied
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Returns the length of the edge
    pub fn length(&self) -> W {
        self.length
    }

    /// Returns true if the given node is one of the edge's endpoints
    pub fn connects(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Returns the other end of the edge, given one of the end nodes
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.b == node {
            self.a
        } else {
            self.b
        }
    }

    /// Returns whether this edge shares an endpoint with the given edge
    pub fn is_adjacent(&self, other: &UndirectedEdge<W>) -> bool {
        other.connects(self.a) || other.connects(self.b)
    }
}

/// An immutable undirected graph with length-attributed edges.
///
/// Built once from an edge list and never mutated afterwards, which makes
/// shared concurrent reads safe without synchronization. Each node keeps a
/// list of its incident edges for adjacency queries; self-loops are stored
/// but never linked into an incident-edge list, since they cannot take part
/// in a simple path between distinct nodes.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// All edges, in construction order
    edges: Vec<UndirectedEdge<W>>,

    /// Unordered node pair -> index into `edges`
    edge_index: HashMap<(NodeId, NodeId), usize>,

    /// Node id -> indices of its incident edges (excluding self-loops)
    incident: HashMap<NodeId, Vec<usize>>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph from `(node_a, node_b, length)` triples.
    ///
    /// Fails with [`Error::InvalidEdge`] if any length is not strictly
    /// positive, and with [`Error::DuplicateEdge`] if two triples connect
    /// the same unordered node pair.
    pub fn build<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        let mut graph = UndirectedGraph {
            edges: Vec::new(),
            edge_index: HashMap::new(),
            incident: HashMap::new(),
        };

        for (a, b, length) in edges {
            if length <= W::zero() {
                return Err(Error::InvalidEdge {
                    a,
                    b,
                    length: length.to_f64().unwrap_or(f64::NAN),
                });
            }

            let index = graph.edges.len();
            if graph.edge_index.insert(edge_key(a, b), index).is_some() {
                return Err(Error::DuplicateEdge(a, b));
            }
            graph.edges.push(UndirectedEdge { a, b, length });

            // Both endpoints become known nodes, but a self-loop is not
            // linked into any incident-edge list.
            graph.incident.entry(a).or_default();
            graph.incident.entry(b).or_default();
            if a != b {
                graph.incident.entry(a).or_default().push(index);
                graph.incident.entry(b).or_default().push(index);
            }
        }

        Ok(graph)
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.incident.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the node id appears in the graph
    pub fn contains(&self, id: NodeId) -> bool {
        self.incident.contains_key(&id)
    }

    /// Returns an iterator over all node ids (in no particular order)
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.incident.keys().copied()
    }

    /// Returns all edges in construction order
    pub fn edges(&self) -> &[UndirectedEdge<W>] {
        &self.edges
    }

    /// Returns a view of the node with the given id, or fails with
    /// [`Error::UnknownNode`] if it is absent.
    pub fn node(&self, id: NodeId) -> Result<Node<'_, W>> {
        if self.contains(id) {
            Ok(Node { id, graph: self })
        } else {
            Err(Error::UnknownNode(id))
        }
    }

    /// Returns the edge connecting `a` and `b` if one exists.
    ///
    /// Absence is a normal outcome, not an error. Self-loops carry no
    /// adjacency, so `a == b` always yields `None`.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&UndirectedEdge<W>> {
        if a == b {
            return None;
        }
        self.edge_index.get(&edge_key(a, b)).map(|&i| &self.edges[i])
    }

    /// Returns whether there is an edge between the two nodes
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Returns an iterator over the edges incident to the given node
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &UndirectedEdge<W>> + '_ {
        self.incident
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.edges[i])
    }

    /// Returns an iterator over `(neighbor, edge length)` pairs for the
    /// given node
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.incident_edges(id)
            .map(move |edge| (edge.other_end(id), edge.length))
    }
}

/// A borrowed view of one node in a graph.
///
/// Couples a node id with the graph that owns its incident edges, so the
/// adjacency queries of the node itself stay available without the node
/// owning any edge data.
#[derive(Debug, Clone, Copy)]
pub struct Node<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    id: NodeId,
    graph: &'g UndirectedGraph<W>,
}

impl<'g, W> Node<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the identity of the node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns an iterator over the edges incident to this node
    pub fn incident_edges(&self) -> impl Iterator<Item = &'g UndirectedEdge<W>> + '_ {
        self.graph.incident_edges(self.id)
    }

    /// Returns the edge between this node and the given one (if existing)
    pub fn edge_to(&self, other: NodeId) -> Option<&'g UndirectedEdge<W>> {
        self.graph.edge_between(self.id, other)
    }

    /// Returns whether there is an edge between this node and the given one
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.graph.are_adjacent(self.id, other)
    }
}

impl<'g, W> PartialEq for Node<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'g, W> Eq for Node<'g, W> where W: Float + Zero + Debug + Copy {}
