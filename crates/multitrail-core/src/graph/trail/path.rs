//! Path to trail reconstruction

use crate::error::{Result, TrailError};
use crate::graph::trail::{Trail, TrailSegment};
use crate::graph::types::{Edge, VertexId};
use crate::graph::GraphProvider;

/// Cheapest edge `from -> to`; among equal weights the first in adjacency
/// order (lowest key) wins
pub fn cheapest_edge(provider: &dyn GraphProvider, from: VertexId, to: VertexId) -> Option<Edge> {
    provider
        .get_outbound_edges(from)
        .into_iter()
        .filter(|edge| edge.to == to)
        .min_by(|a, b| a.weight.total_cmp(&b.weight))
}

/// Turn a vertex path into a trail by taking the cheapest parallel edge for
/// every consecutive pair.
///
/// Uses the same minimum rule as the cost relaxation in Dijkstra, which keeps
/// the trail weight equal to the path cost.
pub fn reconstruct_trail(provider: &dyn GraphProvider, path: &[VertexId]) -> Result<Trail> {
    let mut trail = Trail::default();
    for pair in path.windows(2) {
        let (begin, end) = (pair[0], pair[1]);
        let edge = cheapest_edge(provider, begin, end).ok_or(TrailError::NoPath {
            from: begin,
            to: end,
        })?;
        tracing::trace!(begin, end, key = edge.key.value(), weight = edge.weight.value(), "selected edge");
        trail.push(TrailSegment::from(edge));
    }
    Ok(trail)
}
