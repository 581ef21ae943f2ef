pub mod dijkstra;
pub mod finder;
mod yen;

pub use dijkstra::ShortestPathTree;
pub use finder::PathFinder;
