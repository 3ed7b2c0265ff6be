//! Graph model: typed nodes, directed edges, and the adjacency-backed
//! [`TaskGraph`] the validation checks read.

mod edge;
mod node;
mod task_graph;

pub use edge::TaskEdge;
pub use node::{NodeType, TaskNode};
pub use task_graph::TaskGraph;
