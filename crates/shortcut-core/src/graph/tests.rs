use super::types::{Edge, Graph, VertexId};
use crate::error::ShortcutError;

fn vid(n: u32) -> VertexId {
    VertexId::new(n)
}

fn vertices(range: std::ops::RangeInclusive<u32>) -> Vec<VertexId> {
    range.map(VertexId::new).collect()
}

#[test]
fn test_build_directed_graph() {
    let graph = Graph::build(
        vertices(1..=3),
        vec![Edge::new(1, 2, 3.0), Edge::new(2, 3, -1.0)],
        true,
    )
    .unwrap();

    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors(vid(1)).unwrap(), vec![(vid(2), 3.0)]);
    assert_eq!(graph.neighbors(vid(2)).unwrap(), vec![(vid(3), -1.0)]);
}

#[test]
fn test_vertex_without_outgoing_edges_has_empty_adjacency() {
    let graph = Graph::build(vertices(1..=2), vec![Edge::new(1, 2, 1.0)], true).unwrap();
    assert!(graph.neighbors(vid(2)).unwrap().is_empty());
}

#[test]
fn test_undirected_adjacency_mirrors_edges() {
    let graph = Graph::build(vertices(1..=2), vec![Edge::new(1, 2, 4.0)], false).unwrap();

    assert_eq!(graph.neighbors(vid(1)).unwrap(), vec![(vid(2), 4.0)]);
    assert_eq!(graph.neighbors(vid(2)).unwrap(), vec![(vid(1), 4.0)]);
    // The logical edge is stored once
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_edge_with_undeclared_vertex_rejected() {
    let err = Graph::build(vertices(1..=2), vec![Edge::new(1, 9, 1.0)], true).unwrap_err();
    assert!(matches!(err, ShortcutError::InvalidVertex { vertex } if vertex == vid(9)));

    let err = Graph::build(vertices(1..=2), vec![Edge::new(9, 1, 1.0)], true).unwrap_err();
    assert!(matches!(err, ShortcutError::InvalidVertex { vertex } if vertex == vid(9)));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let err = Graph::build(
        vec![vid(1), vid(2), vid(1)],
        Vec::<Edge>::new(),
        true,
    )
    .unwrap_err();
    assert!(matches!(err, ShortcutError::InvalidGraph { .. }));
}

#[test]
fn test_neighbors_of_unknown_vertex_rejected() {
    let graph = Graph::build(vertices(1..=2), Vec::<Edge>::new(), true).unwrap();
    assert!(matches!(
        graph.neighbors(vid(7)),
        Err(ShortcutError::InvalidVertex { .. })
    ));
}

#[test]
fn test_contains_and_negative_edge_scan() {
    let graph = Graph::build(
        vertices(1..=2),
        vec![Edge::new(1, 2, -0.5)],
        true,
    )
    .unwrap();
    assert!(graph.contains(vid(1)));
    assert!(!graph.contains(vid(3)));
    assert!(graph.has_negative_edge());

    let graph = Graph::build(vertices(1..=2), vec![Edge::new(1, 2, 0.0)], true).unwrap();
    assert!(!graph.has_negative_edge());
}

#[test]
fn test_vertices_keep_construction_order() {
    let graph = Graph::build(
        vec![vid(5), vid(3), vid(9)],
        Vec::<Edge>::new(),
        true,
    )
    .unwrap();
    assert_eq!(graph.vertices(), &[vid(5), vid(3), vid(9)]);
}

#[test]
fn test_undirected_self_loop_not_mirrored_twice() {
    let graph = Graph::build(vertices(1..=1), vec![Edge::new(1, 1, 2.0)], false).unwrap();
    assert_eq!(graph.neighbors(vid(1)).unwrap(), vec![(vid(1), 2.0)]);
}
