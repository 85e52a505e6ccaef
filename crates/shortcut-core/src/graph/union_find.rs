use crate::error::{Result, ShortcutError};
use crate::graph::types::{Graph, VertexId};

/// Disjoint-set forest over a graph's vertices
///
/// `find` uses iterative path compression (no recursion, so long parent
/// chains cannot overflow the stack) and `union` merges by rank. Cycle
/// detection is only meaningful for undirected graphs whose edge list holds
/// each logical edge exactly once: listing both `(u, v)` and `(v, u)` would
/// misreport a simple two-vertex connection as a cycle.
#[derive(Debug)]
pub struct UnionFind<'a> {
    graph: &'a Graph,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl<'a> UnionFind<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let n = graph.vertex_count();
        UnionFind {
            graph,
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative root of the set containing `vertex`
    pub fn find(&mut self, vertex: VertexId) -> Result<VertexId> {
        let idx = self
            .graph
            .index_of(vertex)
            .ok_or(ShortcutError::invalid_vertex(vertex))?;
        let root = self.find_root(idx);
        Ok(self.graph.vertex_at(root))
    }

    /// Walk parent links to the root, then repoint every visited vertex at it
    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        let mut trail = Vec::new();
        while self.parent[root] != root {
            trail.push(root);
            root = self.parent[root];
        }
        for visited in trail {
            self.parent[visited] = root;
        }
        root
    }

    /// Merge the sets containing `u` and `v` by rank; no-op when already merged
    pub fn union(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let root_u = {
            let idx = self
                .graph
                .index_of(u)
                .ok_or(ShortcutError::invalid_vertex(u))?;
            self.find_root(idx)
        };
        let root_v = {
            let idx = self
                .graph
                .index_of(v)
                .ok_or(ShortcutError::invalid_vertex(v))?;
            self.find_root(idx)
        };

        if root_u == root_v {
            return Ok(());
        }

        match self.rank[root_u].cmp(&self.rank[root_v]) {
            std::cmp::Ordering::Greater => self.parent[root_v] = root_u,
            std::cmp::Ordering::Less => self.parent[root_u] = root_v,
            std::cmp::Ordering::Equal => {
                self.parent[root_v] = root_u;
                self.rank[root_u] += 1;
            }
        }
        Ok(())
    }

    /// Consume the edge list once: an edge whose endpoints already share a
    /// root closes a cycle, otherwise the endpoints are unioned.
    pub fn detect_cycle(&mut self) -> Result<bool> {
        if self.graph.is_directed() {
            return Err(ShortcutError::NotUndirected);
        }

        for edge in self.graph.edges() {
            if self.find(edge.from)? == self.find(edge.to)? {
                tracing::debug!(from = %edge.from, to = %edge.to, "edge closes a cycle");
                return Ok(true);
            }
            self.union(edge.from, edge.to)?;
        }
        Ok(false)
    }
}

/// Union-Find cycle detection over an undirected graph's edge list
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn detect_cycle(graph: &Graph) -> Result<bool> {
    UnionFind::new(graph).detect_cycle()
}
