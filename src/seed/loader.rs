// src/seed/loader.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::graph::Graph;
use crate::seed::model::SeedFile;
use crate::seed::validate::validate_seed;

/// Load a seed file from a given path and return the raw [`SeedFile`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (child references, duplicate edges). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SeedFile> {
    let contents = fs::read_to_string(path.as_ref())?;

    let seed: SeedFile = toml::from_str(&contents)?;

    Ok(seed)
}

/// Load a seed file from path, validate it, and build a [`Graph`] from it.
///
/// This is the recommended entry point for consumers that start from a file:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - `children` references to undeclared nodes,
///   - duplicate children within one node.
/// - Hands adjacency data and payloads over to the graph.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let seed = load_from_path(path)?;
    validate_seed(&seed)?;

    let graph = Graph::from_seed(&seed);
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph seed"
    );
    Ok(graph)
}
