//! Shared builders for validation tests.

use taskgraph::{NodeType, TaskEdge, TaskGraph, TaskNode};

pub fn start(id: &str) -> TaskNode {
    TaskNode::new(id, NodeType::Start)
}

pub fn end(id: &str) -> TaskNode {
    TaskNode::new(id, NodeType::End)
}

pub fn agent(id: &str) -> TaskNode {
    TaskNode::new(id, NodeType::Agent)
}

pub fn tool(id: &str) -> TaskNode {
    TaskNode::new(id, NodeType::Tool)
}

pub fn edge(from: &str, to: &str) -> TaskEdge {
    TaskEdge::new(from, to)
}

pub fn graph(nodes: Vec<TaskNode>, edges: Vec<TaskEdge>) -> TaskGraph {
    TaskGraph::new(nodes, edges)
}

/// A minimal valid graph: start → middle → end.
pub fn linear_graph() -> TaskGraph {
    graph(
        vec![start("start"), agent("middle"), end("end")],
        vec![edge("start", "middle"), edge("middle", "end")],
    )
}
