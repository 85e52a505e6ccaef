//! Graph model and shortest-path operations
//!
//! Provides the immutable weighted graph plus the solver suite:
//! - Bellman-Ford single-source paths with negative-cycle detection
//! - Dijkstra single-source paths for non-negative weights
//! - Floyd-Warshall all-pairs paths via dynamic programming
//! - Johnson's all-pairs paths for sparse graphs with negative edges
//! - Union-Find cycle detection for undirected graphs

pub mod algos;
pub mod types;
pub mod union_find;

pub use algos::{all_pairs, bellman_ford, dijkstra, floyd_warshall, johnson, shortest_path};
pub use types::{AllPairs, AllPairsEntry, Edge, Graph, PathQuery, ShortestPathTree, VertexId};
pub use union_find::{detect_cycle, UnionFind};

#[cfg(test)]
mod tests;
