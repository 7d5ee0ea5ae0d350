// src/seed/validate.rs

use std::collections::HashSet;

use crate::errors::{GraphError, Result};
use crate::seed::model::SeedFile;

/// Run basic semantic validation against a loaded seed.
///
/// This checks:
/// - every `children` entry refers to a node with its own `[node.<id>]`
///   section
/// - no node lists the same child twice (duplicate edge)
///
/// It does **not** reject cycles: this is a general directed graph, not a
/// DAG, and reachability queries are how consumers guard against closing
/// one.
pub fn validate_seed(seed: &SeedFile) -> Result<()> {
    validate_child_references(seed)?;
    validate_no_duplicate_children(seed)?;
    Ok(())
}

fn validate_child_references(seed: &SeedFile) -> Result<()> {
    for (id, node) in seed.node.iter() {
        for child in node.children.iter() {
            if !seed.node.contains_key(child) {
                return Err(GraphError::Seed(format!(
                    "node '{id}' lists unknown child '{child}'"
                )));
            }
        }
    }
    Ok(())
}

fn validate_no_duplicate_children(seed: &SeedFile) -> Result<()> {
    for (id, node) in seed.node.iter() {
        let mut seen = HashSet::new();
        for child in node.children.iter() {
            if !seen.insert(child.as_str()) {
                return Err(GraphError::Seed(format!(
                    "node '{id}' lists child '{child}' more than once"
                )));
            }
        }
    }
    Ok(())
}
