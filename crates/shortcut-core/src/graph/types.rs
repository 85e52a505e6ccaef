use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortcutError};
use crate::graph::algos::shared::reconstruct_path;

/// Opaque vertex identifier
///
/// Vertex sets are fixed at graph construction time; identifiers carry no
/// structural meaning beyond identity and ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub const fn new(id: u32) -> Self {
        VertexId(id)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted edge between two vertices
///
/// For undirected graphs each logical edge appears exactly once in the
/// graph's edge list; the adjacency holds one entry per traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<VertexId>, to: impl Into<VertexId>, weight: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Immutable weighted graph
///
/// Built once from a declared vertex set and an edge list, then only queried.
/// Every vertex owns an adjacency row (empty when it has no outgoing edges),
/// and edges referencing undeclared vertices are rejected at construction.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from a declared vertex set and an edge list.
    ///
    /// Undirected construction mirrors each edge into both adjacency rows
    /// while storing the logical edge once.
    pub fn build(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = Edge>,
        directed: bool,
    ) -> Result<Self> {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        let mut index = HashMap::with_capacity(vertices.len());
        for (i, &v) in vertices.iter().enumerate() {
            if index.insert(v, i).is_some() {
                return Err(ShortcutError::invalid_graph(format!(
                    "duplicate vertex: {v}"
                )));
            }
        }

        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); vertices.len()];
        let mut edge_list = Vec::new();
        for edge in edges {
            let from = *index
                .get(&edge.from)
                .ok_or(ShortcutError::invalid_vertex(edge.from))?;
            let to = *index
                .get(&edge.to)
                .ok_or(ShortcutError::invalid_vertex(edge.to))?;
            adjacency[from].push((to, edge.weight));
            if !directed && from != to {
                adjacency[to].push((from, edge.weight));
            }
            edge_list.push(edge);
        }

        Ok(Graph {
            directed,
            vertices,
            index,
            adjacency,
            edges: edge_list,
        })
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Declared vertices, in construction order
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Logical edges, as supplied at construction
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    pub fn has_negative_edge(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    /// Outgoing `(neighbor, weight)` pairs for a vertex
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<(VertexId, f64)>> {
        let idx = self
            .index_of(vertex)
            .ok_or(ShortcutError::invalid_vertex(vertex))?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(to, w)| (self.vertices[to], w))
            .collect())
    }

    pub(crate) fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> VertexId {
        self.vertices[idx]
    }

    /// Adjacency row by dense vertex index
    pub(crate) fn adjacency_row(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }
}

/// Single-source shortest-path outcome
///
/// Produced by Bellman-Ford and Dijkstra. Three outcomes stay orthogonal:
/// a finite distance, an unreachable destination (`None` distance), or a
/// negative cycle, in which case distances and paths are void and the
/// accessors refuse to answer.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
    negative_cycle: bool,
}

impl ShortestPathTree {
    pub(crate) fn new(
        graph: &Graph,
        source: VertexId,
        dist: Vec<f64>,
        pred: Vec<Option<usize>>,
        negative_cycle: bool,
    ) -> Self {
        ShortestPathTree {
            source,
            vertices: graph.vertices.clone(),
            index: graph.index.clone(),
            dist,
            pred,
            negative_cycle,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Shortest distance from the source, `None` when unreachable
    pub fn distance(&self, destination: VertexId) -> Result<Option<f64>> {
        if self.negative_cycle {
            return Err(ShortcutError::NegativeCycle);
        }
        let idx = self
            .index
            .get(&destination)
            .copied()
            .ok_or(ShortcutError::invalid_vertex(destination))?;
        let d = self.dist[idx];
        Ok(if d.is_finite() { Some(d) } else { None })
    }

    /// Reconstruct the source-to-destination path by walking predecessors
    pub fn path_to(&self, destination: VertexId) -> Result<Vec<VertexId>> {
        if self.negative_cycle {
            return Err(ShortcutError::NegativeCycle);
        }
        let dest = self
            .index
            .get(&destination)
            .copied()
            .ok_or(ShortcutError::invalid_vertex(destination))?;
        let src = self
            .index
            .get(&self.source)
            .copied()
            .ok_or(ShortcutError::invalid_vertex(self.source))?;
        if self.dist[dest].is_infinite() {
            return Err(ShortcutError::NoPath {
                from: self.source,
                to: destination,
            });
        }
        reconstruct_path(&self.vertices, &self.pred, src, dest)
    }

    /// Resolve a destination into a serializable query result
    pub fn to_query(&self, destination: VertexId, algorithm: &str) -> Result<PathQuery> {
        if !self.index.contains_key(&destination) {
            return Err(ShortcutError::invalid_vertex(destination));
        }
        if self.negative_cycle {
            return Ok(PathQuery {
                from: self.source,
                to: destination,
                distance: None,
                path: Vec::new(),
                negative_cycle: true,
                algorithm: algorithm.to_string(),
            });
        }
        let distance = self.distance(destination)?;
        let path = match distance {
            Some(_) => self.path_to(destination)?,
            None => Vec::new(),
        };
        Ok(PathQuery {
            from: self.source,
            to: destination,
            distance,
            path,
            negative_cycle: false,
            algorithm: algorithm.to_string(),
        })
    }

    pub(crate) fn dist_slice(&self) -> &[f64] {
        &self.dist
    }

    pub(crate) fn pred_slice(&self) -> &[Option<usize>] {
        &self.pred
    }
}

/// Result of a single-source, single-destination query
#[derive(Debug, Clone, Serialize)]
pub struct PathQuery {
    pub from: VertexId,
    pub to: VertexId,
    /// Shortest distance, `None` when unreachable or a cycle was found
    pub distance: Option<f64>,
    /// Vertices from source to destination; empty when no path exists
    pub path: Vec<VertexId>,
    pub negative_cycle: bool,
    pub algorithm: String,
}

/// All-pairs shortest-path outcome
///
/// Shared output shape for Floyd-Warshall and Johnson's algorithm so the two
/// can be compared entrywise.
#[derive(Debug, Clone)]
pub struct AllPairs {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    dist: Vec<Vec<f64>>,
    pred: Vec<Vec<Option<usize>>>,
    negative_cycle: bool,
}

/// One `(from, to)` entry of an all-pairs distance matrix
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsEntry {
    pub from: VertexId,
    pub to: VertexId,
    /// Shortest distance, `None` when unreachable
    pub distance: Option<f64>,
}

impl AllPairs {
    pub(crate) fn new(
        graph: &Graph,
        dist: Vec<Vec<f64>>,
        pred: Vec<Vec<Option<usize>>>,
        negative_cycle: bool,
    ) -> Self {
        AllPairs {
            vertices: graph.vertices.clone(),
            index: graph.index.clone(),
            dist,
            pred,
            negative_cycle,
        }
    }

    /// Void result carrying only the negative-cycle flag
    pub(crate) fn cycle_detected(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        AllPairs {
            vertices: graph.vertices.clone(),
            index: graph.index.clone(),
            dist: vec![vec![f64::INFINITY; n]; n],
            pred: vec![vec![None; n]; n],
            negative_cycle: true,
        }
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Vertices in matrix order
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    fn index_of(&self, vertex: VertexId) -> Result<usize> {
        self.index
            .get(&vertex)
            .copied()
            .ok_or(ShortcutError::invalid_vertex(vertex))
    }

    /// Shortest distance between a pair, `None` when unreachable
    pub fn distance(&self, from: VertexId, to: VertexId) -> Result<Option<f64>> {
        if self.negative_cycle {
            return Err(ShortcutError::NegativeCycle);
        }
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        let d = self.dist[i][j];
        Ok(if d.is_finite() { Some(d) } else { None })
    }

    /// Reconstruct the path for a pair by walking the predecessor matrix
    pub fn path(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>> {
        if self.negative_cycle {
            return Err(ShortcutError::NegativeCycle);
        }
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        if self.dist[i][j].is_infinite() {
            return Err(ShortcutError::NoPath { from, to });
        }
        reconstruct_path(&self.vertices, &self.pred[i], i, j)
    }

    /// Flatten the matrix into serializable rows, in vertex order
    pub fn rows(&self) -> Result<Vec<AllPairsEntry>> {
        if self.negative_cycle {
            return Err(ShortcutError::NegativeCycle);
        }
        let mut rows = Vec::with_capacity(self.vertices.len() * self.vertices.len());
        for (i, &from) in self.vertices.iter().enumerate() {
            for (j, &to) in self.vertices.iter().enumerate() {
                let d = self.dist[i][j];
                rows.push(AllPairsEntry {
                    from,
                    to,
                    distance: if d.is_finite() { Some(d) } else { None },
                });
            }
        }
        Ok(rows)
    }
}
