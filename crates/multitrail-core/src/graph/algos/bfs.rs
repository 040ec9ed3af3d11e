use crate::error::Result;
use crate::graph::types::{Distance, VertexId};
use crate::graph::GraphProvider;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Per-vertex search state. Transitions only go forward:
/// Unvisited -> Frontier -> Settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Color {
    #[default]
    Unvisited,
    Frontier,
    Settled,
}

/// State tracked during a bounded BFS
struct BfsState {
    colors: HashMap<VertexId, Color>,
    queue: VecDeque<(VertexId, Distance)>,
    reached: BTreeSet<VertexId>,
}

impl BfsState {
    fn new(start: VertexId) -> Self {
        let mut state = Self {
            colors: HashMap::new(),
            queue: VecDeque::new(),
            reached: BTreeSet::new(),
        };
        state.colors.insert(start, Color::Frontier);
        state.queue.push_back((start, 0));
        state
    }

    fn color(&self, id: VertexId) -> Color {
        self.colors.get(&id).copied().unwrap_or_default()
    }
}

/// Collect every vertex reachable from `start` in at most `max_distance` hops.
///
/// `start` itself is never part of the result, even when a cycle leads back
/// to it. The queue is ordered by non-decreasing distance, so the first entry
/// beyond the bound ends the whole search.
#[tracing::instrument(skip(provider))]
pub fn neighbors_within_distance(
    provider: &dyn GraphProvider,
    start: VertexId,
    max_distance: Distance,
) -> Result<BTreeSet<VertexId>> {
    if !provider.contains_vertex(start) {
        crate::bail_invalid_reference!(start);
    }

    let mut state = BfsState::new(start);

    while let Some((current, distance)) = state.queue.pop_front() {
        if distance > max_distance {
            break;
        }

        if current != start {
            state.reached.insert(current);
        }

        for edge in provider.get_outbound_edges(current) {
            if state.color(edge.to) == Color::Unvisited {
                state.colors.insert(edge.to, Color::Frontier);
                state.queue.push_back((edge.to, distance + 1));
            }
        }
        state.colors.insert(current, Color::Settled);
    }

    tracing::debug!(reached = state.reached.len(), "bounded search finished");
    Ok(state.reached)
}
