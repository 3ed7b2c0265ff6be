//! Task graph: node and edge lists plus adjacency maps derived once at
//! construction.

use std::collections::HashMap;

use crate::graph::edge::TaskEdge;
use crate::graph::node::{NodeType, TaskNode};

/// A directed task graph with precomputed forward and reverse adjacency.
///
/// Construction never fails: zero or multiple start/end nodes, duplicate
/// edges, and disconnected regions all build fine and are only reported by
/// the checks in [`crate::validate`]. The adjacency maps are built once
/// and never mutated afterwards; checks only read the graph.
pub struct TaskGraph {
    /// Id of the last start-typed node scanned; empty when none exists.
    pub start_node_id: String,
    /// Id of the last end-typed node scanned; empty when none exists.
    pub end_node_id: String,
    pub nodes: Vec<TaskNode>,
    pub edges: Vec<TaskEdge>,
    /// id → successor ids, in edge-list order.
    pub adjacency: HashMap<String, Vec<String>>,
    /// id → predecessor ids, in edge-list order.
    pub reverse_adjacency: HashMap<String, Vec<String>>,
}

impl TaskGraph {
    /// Builds a graph from node and edge lists.
    ///
    /// One pass over the nodes records the canonical start and end ids.
    /// When several nodes carry the same type the last occurrence wins,
    /// so construction stays total and the existence checks can still
    /// report the full offending list from `nodes`. One pass over the
    /// edges fills both adjacency maps.
    pub fn new(nodes: Vec<TaskNode>, edges: Vec<TaskEdge>) -> Self {
        let mut start_node_id = String::new();
        let mut end_node_id = String::new();
        for node in &nodes {
            match node.kind {
                NodeType::Start => start_node_id = node.id.clone(),
                NodeType::End => end_node_id = node.id.clone(),
                NodeType::Agent | NodeType::Tool => {}
            }
        }

        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();
        for edge in &edges {
            adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
            reverse_adjacency
                .entry(edge.to.clone())
                .or_default()
                .push(edge.from.clone());
        }

        Self {
            start_node_id,
            end_node_id,
            nodes,
            edges,
            adjacency,
            reverse_adjacency,
        }
    }
}
