//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Bounded breadth-first neighbor search
//! - `dijkstra`: Weighted shortest path over parallel edges

pub mod bfs;
pub mod dijkstra;

pub use bfs::neighbors_within_distance;
pub use dijkstra::shortest_path;
