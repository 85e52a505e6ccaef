use crate::error::{Result, ShortcutError};
use crate::graph::algos::{bellman_ford, dijkstra};
use crate::graph::types::{AllPairs, Edge, Graph, VertexId};

/// All-pairs shortest paths for sparse graphs with negative edge weights.
///
/// Reduces to one Bellman-Ford run plus `|V|` Dijkstra runs:
/// 1. derive a graph with a synthetic vertex holding a zero-weight edge to
///    every original vertex;
/// 2. Bellman-Ford from the synthetic vertex yields a potential `h` (a
///    reachable negative cycle voids the whole computation);
/// 3. reweight every edge to `w + h(u) - h(v)`, non-negative by the
///    shortest-path triangle inequality;
/// 4. run Dijkstra from every original vertex on the reweighted graph;
/// 5. un-reweight finite distances; unreachable pairs stay unreachable.
///
/// Reweighting preserves shortest-path structure, so the predecessor matrix
/// comes straight from the Dijkstra trees.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn johnson(graph: &Graph) -> Result<AllPairs> {
    let n = graph.vertex_count();

    let synthetic = synthetic_vertex(graph)?;
    let derived = derive_with_synthetic(graph, synthetic)?;

    let potentials = bellman_ford(&derived, synthetic)?;
    if potentials.has_negative_cycle() {
        tracing::debug!("negative cycle found during potential computation");
        return Ok(AllPairs::cycle_detected(graph));
    }
    // Derived vertex order is the original order with the synthetic vertex
    // appended, so indices 0..n address the original vertices directly
    let h = potentials.dist_slice();

    let reweighted = reweight(graph, h)?;

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
    for (u, &source) in graph.vertices().iter().enumerate() {
        let tree = dijkstra::run(&reweighted, source, None)?;
        for (v, &reweighted_dist) in tree.dist_slice().iter().enumerate() {
            if reweighted_dist.is_finite() {
                dist[u][v] = reweighted_dist + h[v] - h[u];
            }
        }
        pred[u] = tree.pred_slice().to_vec();
    }

    Ok(AllPairs::new(graph, dist, pred, false))
}

/// A vertex id guaranteed absent from the original vertex set
fn synthetic_vertex(graph: &Graph) -> Result<VertexId> {
    let max = graph.vertices().iter().map(|v| v.value()).max();
    match max {
        None => Ok(VertexId::new(0)),
        Some(m) => m
            .checked_add(1)
            .map(VertexId::new)
            .ok_or_else(|| ShortcutError::invalid_graph("vertex id space exhausted")),
    }
}

/// Original graph plus the synthetic source, as a new directed graph.
///
/// Undirected inputs are expanded into one directed edge per traversal
/// direction so the derived graph preserves their adjacency exactly.
fn derive_with_synthetic(graph: &Graph, synthetic: VertexId) -> Result<Graph> {
    let mut vertices = graph.vertices().to_vec();
    vertices.push(synthetic);

    let mut edges = directed_edges(graph);
    for &v in graph.vertices() {
        edges.push(Edge {
            from: synthetic,
            to: v,
            weight: 0.0,
        });
    }

    Graph::build(vertices, edges, true)
}

/// Directed graph over the original vertices with potential-adjusted weights
fn reweight(graph: &Graph, h: &[f64]) -> Result<Graph> {
    let mut edges = Vec::new();
    for u in 0..graph.vertex_count() {
        for &(v, weight) in graph.adjacency_row(u) {
            edges.push(Edge {
                from: graph.vertex_at(u),
                to: graph.vertex_at(v),
                weight: weight + h[u] - h[v],
            });
        }
    }
    Graph::build(graph.vertices().to_vec(), edges, true)
}

/// Every adjacency entry as an explicit directed edge
fn directed_edges(graph: &Graph) -> Vec<Edge> {
    let mut edges = Vec::new();
    for u in 0..graph.vertex_count() {
        for &(v, weight) in graph.adjacency_row(u) {
            edges.push(Edge {
                from: graph.vertex_at(u),
                to: graph.vertex_at(v),
                weight,
            });
        }
    }
    edges
}
