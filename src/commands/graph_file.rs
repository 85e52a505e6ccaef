//! Graph document loading
//!
//! Documents are JSON:
//! `{ "directed": bool, "vertices": [1, 2], "edges": [{"from": 1, "to": 2, "weight": 3.0}] }`
//! Missing `directed` defaults to false; `edges` may be omitted for an
//! edgeless graph.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use shortcut_core::error::Result;
use shortcut_core::graph::{Edge, Graph, VertexId};

#[derive(Debug, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    pub vertices: Vec<u32>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

pub fn load(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path)?;
    let doc: GraphDocument = serde_json::from_str(&raw)?;
    Graph::build(
        doc.vertices.into_iter().map(VertexId::new),
        doc.edges,
        doc.directed,
    )
}
