// src/lib.rs

pub mod errors;
pub mod graph;
pub mod logging;
pub mod seed;
pub mod types;

use std::path::Path;

use crate::errors::Result;

pub use crate::graph::{AdjacencyList, EdgeView, Graph, GraphView, NodeView};
pub use crate::types::NodePayload;

/// High-level entry point: load a seed file and build the graph it describes.
///
/// This wires together:
/// - seed loading
/// - semantic validation (child references, duplicate edges)
/// - graph construction (adjacency + per-node payloads)
///
/// Consumers that already hold an in-memory adjacency mapping can skip this
/// and use [`Graph::from_adjacency`] directly.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    seed::load_and_validate(path)
}
