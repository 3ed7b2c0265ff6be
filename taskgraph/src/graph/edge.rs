//! Task edge: an ordered (from, to) pair of node identifiers.

use serde::{Deserialize, Serialize};

/// A directed edge between two nodes, identified purely by its endpoints.
///
/// Two edges with the same endpoints are indistinguishable duplicates;
/// `Eq` + `Hash` let the duplicate-edge check keep a seen-set of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskEdge {
    pub from: String,
    pub to: String,
}

impl TaskEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
