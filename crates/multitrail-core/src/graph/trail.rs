//! Edge-level trails and the shortest-trail query

mod path;

use crate::error::{Result, TrailError};
use crate::graph::algos::shortest_path;
use crate::graph::types::{Edge, EdgeKey, VertexId, Weight};
use crate::graph::GraphProvider;
use serde::{Deserialize, Serialize};

pub use path::{cheapest_edge, reconstruct_trail};

/// One edge actually traversed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub begin: VertexId,
    pub end: VertexId,
    pub key: EdgeKey,
    pub weight: Weight,
}

impl From<Edge> for TrailSegment {
    fn from(edge: Edge) -> Self {
        TrailSegment {
            begin: edge.from,
            end: edge.to,
            key: edge.key,
            weight: edge.weight,
        }
    }
}

/// Ordered sequence of segments where each segment begins where the
/// previous one ended. Serializes as a plain segment array; deserializing
/// checks continuity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<TrailSegment>", try_from = "Vec<TrailSegment>")]
pub struct Trail {
    segments: Vec<TrailSegment>,
}

impl TryFrom<Vec<TrailSegment>> for Trail {
    type Error = TrailError;

    fn try_from(segments: Vec<TrailSegment>) -> Result<Self> {
        Trail::from_segments(segments)
    }
}

impl From<Trail> for Vec<TrailSegment> {
    fn from(trail: Trail) -> Self {
        trail.segments
    }
}

impl Trail {
    /// Build a trail, checking that consecutive segments connect
    pub fn from_segments(segments: Vec<TrailSegment>) -> Result<Self> {
        if let Some(pair) = segments.windows(2).find(|pair| pair[0].end != pair[1].begin) {
            return Err(TrailError::Other(format!(
                "trail segments do not connect: {} -> {} followed by {} -> {}",
                pair[0].begin, pair[0].end, pair[1].begin, pair[1].end
            )));
        }
        Ok(Trail { segments })
    }

    pub(crate) fn push(&mut self, segment: TrailSegment) {
        debug_assert!(self.segments.last().is_none_or(|last| last.end == segment.begin));
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of segment weights, added left to right
    pub fn total_weight(&self) -> Weight {
        self.segments.iter().map(|s| s.weight).sum()
    }

    /// Vertices visited, including both ends; empty for an empty trail
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.segments.iter().map(|s| s.begin).collect();
        if let Some(last) = self.segments.last() {
            vertices.push(last.end);
        }
        vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrailSegment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a TrailSegment;
    type IntoIter = std::slice::Iter<'a, TrailSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Find the minimum-weight trail from `from` to `to`.
///
/// The vertex path comes from Dijkstra; each hop then takes the cheapest of
/// its parallel edges, so the trail weight equals the path cost exactly.
/// A trail from a vertex to itself is empty.
#[tracing::instrument(skip(provider))]
pub fn shortest_trail(provider: &dyn GraphProvider, from: VertexId, to: VertexId) -> Result<Trail> {
    let start = std::time::Instant::now();
    let path = shortest_path(provider, from, to)?;
    let trail = reconstruct_trail(provider, &path.path)?;

    debug_assert_eq!(trail.total_weight(), path.cost);
    crate::trace_time!(start, "shortest_trail", segments = trail.len());
    Ok(trail)
}
