//! Task node: identifier, type tag, opaque metadata.

use serde::{Deserialize, Serialize};

/// Type tag of a task node. `Start` and `End` mark the single entry and
/// exit of a graph; `Agent` and `Tool` are ordinary interior nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    End,
    Agent,
    Tool,
}

/// A node in a task graph.
///
/// `id` must be unique within a graph; uniqueness is assumed, not enforced.
/// `metadata` is an opaque payload carried through for downstream
/// consumers; validation never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl TaskNode {
    /// Creates a node with no metadata.
    pub fn new(id: impl Into<String>, kind: NodeType) -> Self {
        Self {
            id: id.into(),
            kind,
            metadata: None,
        }
    }
}
