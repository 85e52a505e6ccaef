use super::*;
use crate::graph::algos::bellman_ford;
use crate::graph::types::{Edge, VertexId};

fn vid(n: u32) -> VertexId {
    VertexId::new(n)
}

fn vertices(range: std::ops::RangeInclusive<u32>) -> Vec<VertexId> {
    range.map(VertexId::new).collect()
}

fn negative_digraph() -> Graph {
    Graph::build(
        vertices(1..=8),
        vec![
            Edge::new(1, 3, -6.0),
            Edge::new(1, 2, -3.0),
            Edge::new(1, 5, -2.0),
            Edge::new(2, 4, 2.0),
            Edge::new(2, 3, 4.0),
            Edge::new(2, 6, 2.0),
            Edge::new(3, 4, -8.0),
            Edge::new(3, 6, 2.0),
            Edge::new(4, 5, 9.0),
            Edge::new(4, 7, 3.0),
            Edge::new(4, 6, 1.0),
            Edge::new(4, 8, 3.0),
            Edge::new(5, 6, 3.0),
            Edge::new(7, 8, 5.0),
        ],
        true,
    )
    .unwrap()
}

fn path_weight(graph: &Graph, path: &[VertexId]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(pair[0])
                .unwrap()
                .into_iter()
                .filter(|&(to, _)| to == pair[1])
                .map(|(_, w)| w)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

#[test]
fn test_matrix_matches_bellman_ford_per_source() {
    let graph = negative_digraph();
    let matrix = floyd_warshall(&graph).unwrap();
    assert!(!matrix.has_negative_cycle());

    for &source in graph.vertices() {
        let tree = bellman_ford(&graph, source).unwrap();
        for &destination in graph.vertices() {
            let expected = tree.distance(destination).unwrap();
            let actual = matrix.distance(source, destination).unwrap();
            match (expected, actual) {
                (Some(a), Some(b)) => {
                    assert!((a - b).abs() < 1e-9, "pair {source} -> {destination}")
                }
                (a, b) => assert_eq!(a, b, "pair {source} -> {destination}"),
            }
        }
    }
}

#[test]
fn test_diagonal_is_zero() {
    let graph = negative_digraph();
    let matrix = floyd_warshall(&graph).unwrap();
    for &v in graph.vertices() {
        assert_eq!(matrix.distance(v, v).unwrap(), Some(0.0));
    }
}

#[test]
fn test_path_through_intermediates() {
    let graph = negative_digraph();
    let matrix = floyd_warshall(&graph).unwrap();

    let path = matrix.path(vid(1), vid(8)).unwrap();
    assert_eq!(path, vec![vid(1), vid(3), vid(4), vid(8)]);
    assert!((path_weight(&graph, &path) - (-11.0)).abs() < 1e-9);
}

#[test]
fn test_path_weight_matches_distance_for_all_pairs() {
    let graph = negative_digraph();
    let matrix = floyd_warshall(&graph).unwrap();

    for &source in graph.vertices() {
        for &destination in graph.vertices() {
            if let Some(d) = matrix.distance(source, destination).unwrap() {
                let path = matrix.path(source, destination).unwrap();
                assert!(
                    (path_weight(&graph, &path) - d).abs() < 1e-9,
                    "pair {source} -> {destination}"
                );
            }
        }
    }
}

#[test]
fn test_unreachable_pair() {
    let graph = negative_digraph();
    let matrix = floyd_warshall(&graph).unwrap();

    // Vertex 8 has no outgoing edges
    assert_eq!(matrix.distance(vid(8), vid(1)).unwrap(), None);
    assert!(matches!(
        matrix.path(vid(8), vid(1)),
        Err(crate::error::ShortcutError::NoPath { .. })
    ));
}

#[test]
fn test_negative_cycle_voids_matrix() {
    let mut edges: Vec<Edge> = negative_digraph().edges().to_vec();
    edges.push(Edge::new(3, 1, -6.0));
    let graph = Graph::build(vertices(1..=8), edges, true).unwrap();

    let matrix = floyd_warshall(&graph).unwrap();
    assert!(matrix.has_negative_cycle());
    assert!(matches!(
        matrix.distance(vid(1), vid(8)),
        Err(crate::error::ShortcutError::NegativeCycle)
    ));
    assert!(matches!(
        matrix.rows(),
        Err(crate::error::ShortcutError::NegativeCycle)
    ));
}

#[test]
fn test_negative_self_loop_is_a_cycle() {
    let graph = Graph::build(
        vertices(1..=2),
        vec![Edge::new(1, 2, 1.0), Edge::new(2, 2, -1.0)],
        true,
    )
    .unwrap();
    let matrix = floyd_warshall(&graph).unwrap();
    assert!(matrix.has_negative_cycle());
}

#[test]
fn test_parallel_edges_keep_cheapest() {
    let graph = Graph::build(
        vertices(1..=2),
        vec![Edge::new(1, 2, 5.0), Edge::new(1, 2, 3.0)],
        true,
    )
    .unwrap();
    let matrix = floyd_warshall(&graph).unwrap();
    assert_eq!(matrix.distance(vid(1), vid(2)).unwrap(), Some(3.0));
}

#[test]
fn test_empty_graph() {
    let graph = Graph::build(Vec::new(), Vec::new(), true).unwrap();
    let matrix = floyd_warshall(&graph).unwrap();
    assert!(!matrix.has_negative_cycle());
    assert!(matrix.rows().unwrap().is_empty());
}
