use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::NodePayload;

/// Seed file as read from TOML.
///
/// This is a direct mapping of the expected input:
///
/// ```toml
/// [node.A]
/// type = "TYPE_1"
/// children = ["B"]
///
/// [node.A.tags]
/// owner = "platform"
///
/// [node.B]
/// type = "TYPE_2"
/// ```
///
/// Keys under `[node.<id>]` are the node ids. `children` lists a node's
/// out-neighbors in the order traversals should follow them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    /// All nodes from `[node.<id>]`.
    #[serde(default)]
    pub node: BTreeMap<String, SeedNode>,
}

/// `[node.<id>]` section.
///
/// Every field is optional; a bare `[node.X]` section declares an isolated,
/// untyped node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedNode {
    /// Renderer-facing type tag; opaque to graph logic.
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Free-form key/value annotations; opaque to graph logic.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,

    /// Out-neighbors in traversal order.
    #[serde(default)]
    pub children: Vec<String>,
}

impl SeedNode {
    /// The pass-through attributes a renderer consumes.
    pub fn payload(&self) -> NodePayload {
        NodePayload {
            kind: self.kind.clone(),
            tags: self.tags.clone(),
        }
    }
}
