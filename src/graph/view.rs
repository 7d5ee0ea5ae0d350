//! Renderer-facing derived views.
//!
//! These are recomputed on demand from the adjacency list; there is no cache
//! to invalidate because the graph has a single owner. A UI layer reads the
//! snapshot, pairs it with the payloads, and renders; the core does not
//! depend on how that happens.

use serde::Serialize;

use crate::graph::adjacency::Graph;
use crate::types::NodePayload;

/// One node as a renderer sees it: its id plus the opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<NodePayload>,
}

/// One directed edge as a `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

/// Snapshot of the whole structure for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl Graph {
    /// All node ids.
    pub fn nodes(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Every edge as a `(source, target)` pair, grouped by source node and
    /// in stored neighbor order within each group.
    pub fn edges(&self) -> Vec<EdgeView> {
        self.adjacency
            .iter()
            .flat_map(|(source, targets)| {
                targets.iter().map(move |target| EdgeView {
                    source: source.clone(),
                    target: target.clone(),
                })
            })
            .collect()
    }

    /// Renderer-facing snapshot: nodes with their payloads plus the edge
    /// list.
    pub fn view(&self) -> GraphView {
        let nodes = self
            .adjacency
            .keys()
            .map(|id| NodeView {
                id: id.clone(),
                payload: self.payloads.get(id).cloned(),
            })
            .collect();

        GraphView {
            nodes,
            edges: self.edges(),
        }
    }
}
