//! Path Discovery - Bounded Shortest-Path Enumeration on Undirected Graphs
//!
//! This library computes, for a fixed undirected weighted graph with strictly
//! positive edge lengths, all simple paths between two designated nodes whose
//! length does not exceed `tolerance_factor` times the shortest-path length,
//! ordered by increasing length.
//!
//! Repeated queries against the same graph are amortized: every full
//! single-source computation rooted at a start node populates a query cache
//! with primary shortest paths for all nodes it reached.

pub mod algorithm;
pub mod cache;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::ShortestPathTree, finder::PathFinder};
pub use cache::QueryCache;
/// Re-export main types for convenient use
pub use graph::{NodeId, Path, UndirectedEdge, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Edge between {a} and {b}: non-positive length {length} not supported")]
    InvalidEdge { a: NodeId, b: NodeId, length: f64 },

    #[error("Duplicate edge between {0} and {1}")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("Tolerance factor {0} is below 1.0")]
    InvalidTolerance(f64),

    #[error("Path nodes must form a chain: no edge between {0} and {1}")]
    DisconnectedPath(NodeId, NodeId),

    #[error("Edge between {a} and {b} is not adjacent to path endpoint {endpoint}")]
    NonAdjacentEdge { a: NodeId, b: NodeId, endpoint: NodeId },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
