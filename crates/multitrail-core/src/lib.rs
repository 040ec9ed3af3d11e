//! Multitrail Core Library
//!
//! Bounded neighbor search and shortest edge-level trails over directed,
//! weighted multigraphs loaded from a flat edge list.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;

pub use error::{Result, TrailError};
pub use format::format_trail;
pub use graph::{
    neighbors_within_distance, shortest_path, shortest_trail, MultiDiGraph, Trail, TrailSegment,
};
pub use loader::{load_from_source, load_from_str, GraphLoader};
