use super::*;
use crate::graph::MultiDiGraph;

fn graph_from_edges(edges: &[(VertexId, VertexId, f64)]) -> MultiDiGraph {
    let mut graph = MultiDiGraph::new();
    for &(from, to, weight) in edges {
        graph.add_vertex(from);
        graph.add_vertex(to);
        graph.add_edge(from, to, Weight::new(weight)).unwrap();
    }
    graph
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: 1,
        accumulated_cost: Weight::new(1.0),
        sequence: 0,
    };
    let entry2 = HeapEntry {
        vertex: 2,
        accumulated_cost: Weight::new(2.0),
        sequence: 1,
    };
    let entry3 = HeapEntry {
        vertex: 3,
        accumulated_cost: Weight::new(1.0),
        sequence: 2,
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal costs fall back to push order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_min_heap_pops_cheapest_first() {
    let mut heap = BinaryHeap::new();
    for (sequence, cost) in [3.0, 0.5, 2.0, 0.5].into_iter().enumerate() {
        heap.push(Reverse(HeapEntry {
            vertex: sequence as VertexId,
            accumulated_cost: Weight::new(cost),
            sequence: sequence as u64,
        }));
    }
    let order: Vec<VertexId> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.vertex)).collect();
    assert_eq!(order, vec![1, 3, 2, 0]);
}

#[test]
fn test_weighted_detour_beats_direct_edge() {
    let graph = graph_from_edges(&[(1, 2, 10.0), (1, 3, 50.0), (2, 3, 5.0)]);
    let result = shortest_path(&graph, 1, 3).unwrap();
    assert_eq!(result.path, vec![1, 2, 3]);
    assert_eq!(result.cost, Weight::new(15.0));
    assert_eq!(result.source, 1);
    assert_eq!(result.target, 3);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let graph = graph_from_edges(&[(1, 2, 1.5), (1, 2, 0.5), (2, 3, 2.0)]);
    let result = shortest_path(&graph, 1, 3).unwrap();
    assert_eq!(result.path, vec![1, 2, 3]);
    assert_eq!(result.cost, Weight::new(2.5));
}

#[test]
fn test_cheap_parallel_edge_changes_route() {
    // Direct 1->3 is expensive unless its cheap parallel edge is considered
    let graph = graph_from_edges(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0), (1, 3, 0.25)]);
    let result = shortest_path(&graph, 1, 3).unwrap();
    assert_eq!(result.path, vec![1, 3]);
    assert_eq!(result.cost, Weight::new(0.25));
}

#[test]
fn test_equal_cost_paths_prefer_first_discovered() {
    let graph = graph_from_edges(&[(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0), (3, 4, 1.0)]);
    for _ in 0..5 {
        let result = shortest_path(&graph, 1, 4).unwrap();
        assert_eq!(result.path, vec![1, 2, 4]);
    }
}

#[test]
fn test_same_source_and_target() {
    let graph = graph_from_edges(&[(1, 2, 1.0), (2, 1, 1.0)]);
    let result = shortest_path(&graph, 1, 1).unwrap();
    assert_eq!(result.path, vec![1]);
    assert_eq!(result.cost, Weight::ZERO);
}

#[test]
fn test_zero_weight_edges() {
    let graph = graph_from_edges(&[(1, 2, 0.0), (2, 3, 0.0), (1, 3, 0.5)]);
    let result = shortest_path(&graph, 1, 3).unwrap();
    assert_eq!(result.path, vec![1, 2, 3]);
    assert_eq!(result.cost, Weight::ZERO);
}

#[test]
fn test_disconnected_target_is_no_path() {
    let graph = graph_from_edges(&[(1, 2, 1.0), (3, 4, 1.0)]);
    let err = shortest_path(&graph, 1, 4).unwrap_err();
    assert!(matches!(err, TrailError::NoPath { from: 1, to: 4 }));
}

#[test]
fn test_reverse_direction_is_no_path() {
    let graph = graph_from_edges(&[(1, 2, 1.0)]);
    let err = shortest_path(&graph, 2, 1).unwrap_err();
    assert!(matches!(err, TrailError::NoPath { .. }));
}

#[test]
fn test_unknown_endpoint_is_invalid_reference() {
    let graph = graph_from_edges(&[(1, 2, 1.0)]);
    let err = shortest_path(&graph, 9, 2).unwrap_err();
    assert!(matches!(err, TrailError::InvalidReference { vertex: 9 }));
    let err = shortest_path(&graph, 1, 9).unwrap_err();
    assert!(matches!(err, TrailError::InvalidReference { vertex: 9 }));
}
