use crate::error::Result;
use crate::graph::types::{AllPairs, Graph};

/// All-pairs shortest paths via dynamic programming.
///
/// The intermediate vertex `k` is the outermost loop: every `(i, j)` pair
/// must be relaxed against a fixed `k` before the next intermediate is
/// admitted. A negative diagonal entry after relaxation means a negative
/// cycle, which voids the whole result.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn floyd_warshall(graph: &Graph) -> Result<AllPairs> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
    }
    for u in 0..n {
        for &(v, weight) in graph.adjacency_row(u) {
            // Parallel edges keep the cheapest entry
            if weight < dist[u][v] {
                dist[u][v] = weight;
                if u != v {
                    pred[u][v] = Some(u);
                }
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                if dist[k][j].is_infinite() {
                    continue;
                }
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                    // The predecessor closest to j along the new path lies on
                    // the k-to-j leg
                    pred[i][j] = pred[k][j].or(Some(k));
                }
            }
        }
    }

    let negative_cycle = (0..n).any(|v| dist[v][v] < 0.0);
    if negative_cycle {
        tracing::debug!("negative cycle found on matrix diagonal");
        return Ok(AllPairs::cycle_detected(graph));
    }

    Ok(AllPairs::new(graph, dist, pred, false))
}

#[cfg(test)]
mod tests;
