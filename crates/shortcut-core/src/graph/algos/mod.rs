//! Shortest-path solvers and query routing
//!
//! Each solver takes an immutable `Graph` by reference and produces a fresh
//! result structure; nothing is mutated or shared between invocations.

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub(crate) mod shared;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use johnson::johnson;

use crate::error::Result;
use crate::graph::types::{AllPairs, Graph, PathQuery, VertexId};

/// Single-source, single-destination query.
///
/// Routes to Bellman-Ford when the graph carries negative edge weights and to
/// Dijkstra otherwise. Unreachability is a normal outcome (`None` distance,
/// empty path), never a fault; a detected negative cycle voids distance and
/// path and sets the flag.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path(graph: &Graph, from: VertexId, to: VertexId) -> Result<PathQuery> {
    if graph.has_negative_edge() {
        bellman_ford(graph, from)?.to_query(to, "bellman-ford")
    } else {
        dijkstra(graph, from, Some(to))?.to_query(to, "dijkstra")
    }
}

/// All-pairs query.
///
/// Johnson's algorithm handles negative weights and beats the cubic sweep on
/// sparse graphs, so it is chosen whenever negative edges are present or the
/// adjacency is below quarter density; dense non-negative graphs go to
/// Floyd-Warshall.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn all_pairs(graph: &Graph) -> Result<AllPairs> {
    let n = graph.vertex_count();
    if graph.has_negative_edge() || graph.edge_count() * 4 < n * n {
        johnson(graph)
    } else {
        floyd_warshall(graph)
    }
}
