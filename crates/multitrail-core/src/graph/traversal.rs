use crate::graph::model::MultiDiGraph;
use crate::graph::types::{Edge, EdgeKey, VertexId, Weight};
use std::collections::HashMap;

/// Plain adjacency list: vertex -> successors, one entry per edge.
///
/// Every entry counts as an edge of weight 1.0; repeated successors are
/// parallel edges keyed by their order of appearance.
pub type AdjList = HashMap<VertexId, Vec<VertexId>>;

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    fn contains_vertex(&self, id: VertexId) -> bool;
    /// Outgoing edges of `id` in a stable order
    fn get_outbound_edges(&self, id: VertexId) -> Vec<Edge>;
}

impl GraphProvider for MultiDiGraph {
    fn contains_vertex(&self, id: VertexId) -> bool {
        MultiDiGraph::contains_vertex(self, id)
    }

    fn get_outbound_edges(&self, id: VertexId) -> Vec<Edge> {
        self.neighbors_of(id).to_vec()
    }
}

impl GraphProvider for AdjList {
    /// Vertices are the keys plus every vertex named as a successor.
    ///
    /// A key lookup answers most queries; successor-only vertices cost a scan
    /// of every list.
    fn contains_vertex(&self, id: VertexId) -> bool {
        self.contains_key(&id) || self.values().any(|succ| succ.contains(&id))
    }

    fn get_outbound_edges(&self, id: VertexId) -> Vec<Edge> {
        let Some(successors) = self.get(&id) else {
            return Vec::new();
        };
        let mut seen: HashMap<VertexId, u32> = HashMap::new();
        successors
            .iter()
            .map(|&to| {
                let counter = seen.entry(to).or_insert(0);
                let key = EdgeKey::new(*counter);
                *counter += 1;
                Edge {
                    from: id,
                    to,
                    key,
                    weight: Weight::new(1.0),
                }
            })
            .collect()
    }
}
