pub mod path;
pub mod undirected;

pub use path::Path;
pub use undirected::{Node, NodeId, UndirectedEdge, UndirectedGraph};
