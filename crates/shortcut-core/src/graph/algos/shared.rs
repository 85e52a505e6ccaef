use crate::error::{Result, ShortcutError};
use crate::graph::types::VertexId;

/// Min-heap entry ordered by accumulated cost
///
/// Used through `Reverse` in a `BinaryHeap`; ties break by vertex index so
/// the ordering stays total, with no semantic significance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HeapEntry {
    pub vertex: usize,
    pub cost: f64,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Walk a predecessor row backward from destination to source and reverse.
///
/// `pred[v]` holds the dense index of the vertex immediately before `v` on
/// the best-known path from the source. Fails with `NoPath` when the walk
/// hits a missing predecessor or runs longer than the vertex count before
/// reaching the source.
pub(crate) fn reconstruct_path(
    vertices: &[VertexId],
    pred: &[Option<usize>],
    source: usize,
    destination: usize,
) -> Result<Vec<VertexId>> {
    let mut path = Vec::new();
    let mut node = destination;

    while node != source {
        path.push(vertices[node]);
        node = pred[node].ok_or(ShortcutError::NoPath {
            from: vertices[source],
            to: vertices[destination],
        })?;
        if path.len() > vertices.len() {
            return Err(ShortcutError::NoPath {
                from: vertices[source],
                to: vertices[destination],
            });
        }
    }

    path.push(vertices[source]);
    path.reverse();
    Ok(path)
}
