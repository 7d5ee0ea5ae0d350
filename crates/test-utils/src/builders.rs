#![allow(dead_code)]

use std::collections::BTreeMap;
use vizgraph::seed::{SeedFile, SeedNode};
use vizgraph::Graph;

/// Builder for `SeedFile` to simplify test setup.
pub struct SeedFileBuilder {
    seed: SeedFile,
}

impl SeedFileBuilder {
    pub fn new() -> Self {
        Self {
            seed: SeedFile {
                node: BTreeMap::new(),
            },
        }
    }

    pub fn with_node(mut self, id: &str, node: SeedNode) -> Self {
        self.seed.node.insert(id.to_string(), node);
        self
    }

    pub fn build(self) -> SeedFile {
        self.seed
    }

    pub fn build_graph(self) -> Graph {
        Graph::from_seed(&self.seed)
    }
}

impl Default for SeedFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `SeedNode`.
pub struct SeedNodeBuilder {
    node: SeedNode,
}

impl SeedNodeBuilder {
    pub fn new() -> Self {
        Self {
            node: SeedNode {
                kind: String::new(),
                tags: BTreeMap::new(),
                children: vec![],
            },
        }
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.node.kind = kind.to_string();
        self
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.node.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn child(mut self, child: &str) -> Self {
        self.node.children.push(child.to_string());
        self
    }

    pub fn build(self) -> SeedNode {
        self.node
    }
}

impl Default for SeedNodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph directly from node ids and edges, in the given order.
///
/// Panics on invalid fixtures; test-only convenience.
pub fn graph_from_edges(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for node in nodes {
        graph
            .add_node(*node)
            .expect("duplicate node in test fixture");
    }
    for (source, target) in edges {
        graph
            .add_edge(source, target)
            .expect("invalid edge in test fixture");
    }
    graph
}
