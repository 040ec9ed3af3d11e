//! Directed multigraph model and the queries that run over it
//!
//! Provides:
//! - `MultiDiGraph`, the in-memory multigraph built by the loader
//! - `GraphProvider`, the read-only view the algorithms use
//! - Bounded BFS neighbor search
//! - Dijkstra shortest paths and edge-level trail reconstruction

pub mod algos;
pub mod model;
pub mod trail;
pub mod traversal;
pub mod types;

pub use algos::{neighbors_within_distance, shortest_path};
pub use model::MultiDiGraph;
pub use trail::{shortest_trail, Trail, TrailSegment};
pub use traversal::{AdjList, GraphProvider};
pub use types::{Distance, Edge, EdgeKey, PathResult, VertexId, Weight};
