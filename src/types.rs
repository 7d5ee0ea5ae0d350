use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque per-node attributes carried alongside the graph structure.
///
/// The graph core never interprets these. They are pass-through data for
/// whatever renders the graph: the type tag typically drives node styling,
/// `tags` are free-form key/value annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePayload {
    /// Renderer-facing type tag, e.g. `"TYPE_1"`.
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Free-form key/value annotations.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl NodePayload {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            tags: BTreeMap::new(),
        }
    }
}
