use crate::error::{Result, TrailError};
use crate::graph::types::{PathResult, VertexId, Weight};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then by push order)
#[derive(Debug, Clone)]
struct HeapEntry {
    vertex: VertexId,
    accumulated_cost: Weight,
    sequence: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState {
    settled: HashSet<VertexId>,
    best: HashMap<VertexId, Weight>,
    predecessors: HashMap<VertexId, VertexId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pushed: u64,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            settled: HashSet::new(),
            best: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, vertex: VertexId, accumulated_cost: Weight) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            accumulated_cost,
            sequence: self.pushed,
        }));
        self.pushed += 1;
    }

    /// Record `cost` for `vertex` if it strictly improves on the best known
    fn relax(&mut self, from: VertexId, vertex: VertexId, cost: Weight) {
        let improves = self
            .best
            .get(&vertex)
            .is_none_or(|known| cost.total_cmp(known).is_lt());
        if improves {
            self.best.insert(vertex, cost);
            self.predecessors.insert(vertex, from);
            self.push(vertex, cost);
        }
    }

    fn path_to(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match self.predecessors.get(&current) {
                Some(&pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Find one minimum-cost path from `source` to `target`.
///
/// Every parallel edge is relaxed on its own, which is the same as collapsing
/// each bundle of parallel edges to its cheapest member. Only strict
/// improvements replace a predecessor and equal-cost heap entries pop in push
/// order, so the chosen path is deterministic for a given graph.
#[tracing::instrument(skip(provider))]
pub fn shortest_path(
    provider: &dyn GraphProvider,
    source: VertexId,
    target: VertexId,
) -> Result<PathResult> {
    for vertex in [source, target] {
        if !provider.contains_vertex(vertex) {
            crate::bail_invalid_reference!(vertex);
        }
    }

    let mut state = DijkstraState::new();
    state.best.insert(source, Weight::ZERO);
    state.push(source, Weight::ZERO);

    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
        ..
    })) = state.heap.pop()
    {
        // Stale entry for an already settled vertex
        if !state.settled.insert(current) {
            continue;
        }

        if current == target {
            let path = state.path_to(source, target);
            tracing::debug!(
                hops = path.len() - 1,
                cost = accumulated_cost.value(),
                settled = state.settled.len(),
                "shortest path found"
            );
            return Ok(PathResult {
                source,
                target,
                path,
                cost: accumulated_cost,
            });
        }

        for edge in provider.get_outbound_edges(current) {
            if state.settled.contains(&edge.to) {
                continue;
            }
            state.relax(current, edge.to, accumulated_cost + edge.weight);
        }
    }

    tracing::debug!(settled = state.settled.len(), "target unreachable");
    Err(TrailError::no_path(source, target))
}

#[cfg(test)]
mod tests;
