use crate::error::{Result, ShortcutError};
use crate::graph::types::{Graph, ShortestPathTree, VertexId};

/// Single-source shortest paths supporting negative edge weights.
///
/// Relaxes every edge up to `|V|-1` times, skipping vertices whose tentative
/// distance is still infinite, and stops early once a full pass changes
/// nothing. One extra pass afterwards detects a negative cycle reachable from
/// the source; when one is found the returned tree carries the flag and its
/// distances and paths are void.
#[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let src = graph
        .index_of(source)
        .ok_or(ShortcutError::invalid_vertex(source))?;

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[src] = 0.0;

    for pass in 0..n.saturating_sub(1) {
        let mut changed = false;
        for u in 0..n {
            if dist[u].is_infinite() {
                continue;
            }
            for &(v, weight) in graph.adjacency_row(u) {
                if dist[u] + weight < dist[v] {
                    dist[v] = dist[u] + weight;
                    pred[v] = Some(u);
                    changed = true;
                }
            }
        }
        if !changed {
            tracing::trace!(pass, "relaxation settled early");
            break;
        }
    }

    let negative_cycle = any_edge_relaxes(graph, &dist);
    if negative_cycle {
        tracing::debug!(%source, "negative cycle reachable from source");
    }

    Ok(ShortestPathTree::new(
        graph,
        source,
        dist,
        pred,
        negative_cycle,
    ))
}

/// After `|V|-1` passes any edge that still relaxes closes a negative cycle
fn any_edge_relaxes(graph: &Graph, dist: &[f64]) -> bool {
    for u in 0..graph.vertex_count() {
        if dist[u].is_infinite() {
            continue;
        }
        for &(v, weight) in graph.adjacency_row(u) {
            if dist[u] + weight < dist[v] {
                return true;
            }
        }
    }
    false
}
