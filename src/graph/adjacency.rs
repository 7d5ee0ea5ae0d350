use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::seed::model::SeedFile;
use crate::types::NodePayload;

/// Node id to ordered out-neighbor sequence.
///
/// Neighbor order is insertion order and is observable: traversals follow
/// each node's sequence front to back.
pub type AdjacencyList = BTreeMap<String, Vec<String>>;

/// Adjacency-list-backed directed graph.
///
/// A node exists iff it has an entry (possibly empty) in the list; an edge
/// `(u, v)` exists iff `v` appears in `u`'s neighbor sequence. The graph
/// exclusively owns its storage; callers hand the initial mapping over by
/// value.
///
/// Every mutation either fully succeeds or leaves the structure unchanged.
/// There is no internal synchronization: an embedding host that shares a
/// graph across threads must serialize access itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adjacency: AdjacencyList,
    /// Pass-through per-node attributes; never interpreted here.
    pub(crate) payloads: BTreeMap<String, NodePayload>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a caller-supplied adjacency mapping.
    ///
    /// The mapping is taken over as-is and neighbor order is preserved. No
    /// validation happens here; inputs that need checking should go through
    /// [`crate::seed::load_and_validate`] instead.
    pub fn from_adjacency(adjacency: AdjacencyList) -> Self {
        Self {
            adjacency,
            payloads: BTreeMap::new(),
        }
    }

    /// Build a graph from a validated seed file.
    ///
    /// Neighbor order follows each node's `children` order; payloads are
    /// carried over untouched.
    pub fn from_seed(seed: &SeedFile) -> Self {
        let mut adjacency = AdjacencyList::new();
        let mut payloads = BTreeMap::new();

        for (id, node) in seed.node.iter() {
            adjacency.insert(id.clone(), node.children.clone());
            payloads.insert(id.clone(), node.payload());
        }

        Self {
            adjacency,
            payloads,
        }
    }

    /// Insert a new isolated node.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists { id });
        }
        debug!(node = %id, "adding node");
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Insert a new isolated node together with its renderer payload.
    pub fn add_node_with_payload(
        &mut self,
        id: impl Into<String>,
        payload: NodePayload,
    ) -> Result<()> {
        let id = id.into();
        self.add_node(id.clone())?;
        self.payloads.insert(id, payload);
        Ok(())
    }

    /// Insert the directed edge `source -> target`.
    ///
    /// Both endpoints must already exist. The new edge is appended to
    /// `source`'s neighbor sequence, so insertion order shows up later in
    /// traversal order.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<()> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;

        let neighbors = self.neighbors_mut(source)?;
        if neighbors.iter().any(|n| n == target) {
            return Err(GraphError::EdgeAlreadyExists {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
        neighbors.push(target.to_string());
        debug!(source, target, "added edge");
        Ok(())
    }

    /// Remove the directed edge `source -> target`, preserving the relative
    /// order of `source`'s remaining neighbors.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<()> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;

        let neighbors = self.neighbors_mut(source)?;
        let Some(pos) = neighbors.iter().position(|n| n == target) else {
            return Err(GraphError::EdgeNotFound {
                source: source.to_string(),
                target: target.to_string(),
            });
        };
        neighbors.remove(pos);
        debug!(source, target, "removed edge");
        Ok(())
    }

    /// Remove a node and sever every edge incident to it.
    ///
    /// The node's out-edges die with its entry; in-edges `(w, id)` are
    /// scrubbed from every remaining neighbor list, preserving the relative
    /// order of the survivors. The node's payload is dropped as well. After
    /// this returns no neighbor sequence anywhere references `id`.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        if self.adjacency.remove(id).is_none() {
            return Err(GraphError::NodeNotFound { id: id.to_string() });
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != id);
        }
        self.payloads.remove(id);
        debug!(node = id, "removed node");
        Ok(())
    }

    /// Reset to the empty graph. Never fails.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.payloads.clear();
        debug!("cleared graph");
    }

    /// Whether `id` has an entry in the graph.
    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Ordered out-neighbor sequence of `id`.
    pub fn neighbors(&self, id: &str) -> Result<&[String]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })
    }

    /// The renderer payload attached to `id`, if any.
    pub fn payload(&self, id: &str) -> Option<&NodePayload> {
        self.payloads.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbor sequence of `id`, or an empty slice for unknown nodes.
    pub(crate) fn out_neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn ensure_node(&self, id: &str) -> Result<()> {
        if self.adjacency.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound { id: id.to_string() })
        }
    }

    fn neighbors_mut(&mut self, id: &str) -> Result<&mut Vec<String>> {
        self.adjacency
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })
    }
}
