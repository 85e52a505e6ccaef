use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, ShortcutError};
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{Graph, ShortestPathTree, VertexId};

/// Single-source shortest paths for non-negative weights.
///
/// Rejects graphs containing negative edges up front; callers must route
/// those to Bellman-Ford or Johnson's algorithm. With a destination given,
/// the search stops as soon as that vertex is finalized.
#[tracing::instrument(skip(graph), fields(source = %source, destination = ?destination, vertices = graph.vertex_count()))]
pub fn dijkstra(
    graph: &Graph,
    source: VertexId,
    destination: Option<VertexId>,
) -> Result<ShortestPathTree> {
    if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0.0) {
        return Err(ShortcutError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }
    run(graph, source, destination)
}

/// Heap-based search without the negative-weight precondition check.
///
/// Johnson's algorithm calls this directly: its reweighted edges are
/// non-negative up to floating-point rounding, which the eager check in
/// `dijkstra` would spuriously reject.
pub(crate) fn run(
    graph: &Graph,
    source: VertexId,
    destination: Option<VertexId>,
) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let src = graph
        .index_of(source)
        .ok_or(ShortcutError::invalid_vertex(source))?;
    let dest = destination
        .map(|d| graph.index_of(d).ok_or(ShortcutError::invalid_vertex(d)))
        .transpose()?;

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist[src] = 0.0;
    heap.push(Reverse(HeapEntry {
        vertex: src,
        cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry { vertex: u, .. })) = heap.pop() {
        // Lazy deletion: stale duplicates stay in the heap and are skipped here
        if finalized[u] {
            continue;
        }
        finalized[u] = true;

        if dest == Some(u) {
            tracing::trace!(destination = %graph.vertex_at(u), "destination finalized");
            break;
        }

        for &(v, weight) in graph.adjacency_row(u) {
            if dist[u] + weight < dist[v] {
                dist[v] = dist[u] + weight;
                pred[v] = Some(u);
                heap.push(Reverse(HeapEntry {
                    vertex: v,
                    cost: dist[v],
                }));
            }
        }
    }

    Ok(ShortestPathTree::new(graph, source, dist, pred, false))
}
