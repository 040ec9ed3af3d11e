//! In-memory directed multigraph

use crate::error::{Result, TrailError};
use crate::graph::types::{Edge, EdgeKey, VertexId, Weight};
use std::collections::HashMap;

/// Directed multigraph with per-pair edge keys.
///
/// Vertices keep their insertion order, and so do the outgoing edges of each
/// vertex. Any number of edges may connect the same ordered pair; each gets a
/// key from a per-pair counter.
#[derive(Debug, Clone, Default)]
pub struct MultiDiGraph {
    vertices: Vec<VertexId>,
    /// Vertex id -> position in `vertices` and `adjacency`
    index: HashMap<VertexId, usize>,
    /// Outgoing edges, aligned with `vertices`
    adjacency: Vec<Vec<Edge>>,
    /// Next key for each ordered pair
    next_key: HashMap<(VertexId, VertexId), u32>,
    edge_count: usize,
}

impl MultiDiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; no-op if it already exists
    pub fn add_vertex(&mut self, id: VertexId) {
        if self.index.contains_key(&id) {
            return;
        }
        self.index.insert(id, self.vertices.len());
        self.vertices.push(id);
        self.adjacency.push(Vec::new());
    }

    /// Add an edge between two existing vertices and return its key.
    ///
    /// Self-loops and duplicates of existing edges are accepted; each call
    /// creates a new parallel edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<EdgeKey> {
        if !weight.is_valid() {
            return Err(TrailError::InvalidWeight {
                weight: weight.value(),
            });
        }
        let Some(&slot) = self.index.get(&from) else {
            crate::bail_invalid_reference!(from);
        };
        if !self.index.contains_key(&to) {
            crate::bail_invalid_reference!(to);
        }

        let counter = self.next_key.entry((from, to)).or_insert(0);
        let key = EdgeKey::new(*counter);
        *counter += 1;

        self.adjacency[slot].push(Edge {
            from,
            to,
            key,
            weight,
        });
        self.edge_count += 1;

        tracing::trace!(from, to, key = key.value(), weight = weight.value(), "added edge");
        Ok(key)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown vertices
    pub fn neighbors_of(&self, id: VertexId) -> &[Edge] {
        self.index
            .get(&id)
            .map(|&slot| self.adjacency[slot].as_slice())
            .unwrap_or(&[])
    }

    /// All parallel edges `from -> to` in key order
    pub fn edges_between(&self, from: VertexId, to: VertexId) -> impl Iterator<Item = &Edge> {
        self.neighbors_of(from).iter().filter(move |e| e.to == to)
    }

    /// Every edge, grouped by source in vertex insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
