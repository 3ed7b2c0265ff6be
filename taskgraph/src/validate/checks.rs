//! The four structural invariant checks.
//!
//! Each check reads the graph and returns zero or more findings; none of
//! them mutates the graph or depends on another check having run. Ordering
//! and short-circuiting live in [`crate::validate::check_invariant_violations`].

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{NodeType, TaskEdge, TaskGraph};
use crate::validate::error::{ValidationError, ValidationErrorKind};

/// Exactly one start-typed node must exist.
///
/// Zero yields `missing_start` with no node list; two or more yield one
/// `multiple_start` carrying every start-typed id in scan order.
pub fn check_start_node_exists(graph: &TaskGraph) -> Vec<ValidationError> {
    let start_ids: Vec<String> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeType::Start)
        .map(|node| node.id.clone())
        .collect();
    match start_ids.len() {
        0 => vec![ValidationError::new(ValidationErrorKind::MissingStart)],
        1 => Vec::new(),
        _ => vec![ValidationError::with_nodes(
            ValidationErrorKind::MultipleStart,
            start_ids,
        )],
    }
}

/// Exactly one end-typed node must exist. Mirrors the start check with
/// `missing_end` / `multiple_end`.
pub fn check_end_node_exists(graph: &TaskGraph) -> Vec<ValidationError> {
    let end_ids: Vec<String> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeType::End)
        .map(|node| node.id.clone())
        .collect();
    match end_ids.len() {
        0 => vec![ValidationError::new(ValidationErrorKind::MissingEnd)],
        1 => Vec::new(),
        _ => vec![ValidationError::with_nodes(
            ValidationErrorKind::MultipleEnd,
            end_ids,
        )],
    }
}

/// No (from, to) pair may appear twice in the edge list.
///
/// The first occurrence of a pair is fine; every repetition yields its own
/// `duplicate_edge` finding carrying that single edge, in edge-list order.
/// An edge appearing N times therefore yields N−1 findings.
pub fn check_no_duplicate_edges(graph: &TaskGraph) -> Vec<ValidationError> {
    let mut seen: HashSet<&TaskEdge> = HashSet::with_capacity(graph.edges.len());
    let mut errors = Vec::new();
    for edge in &graph.edges {
        if !seen.insert(edge) {
            errors.push(ValidationError::with_edges(
                ValidationErrorKind::DuplicateEdge,
                vec![edge.clone()],
            ));
        }
    }
    errors
}

/// Classifies nodes into three disjoint connectivity failure categories:
///
/// - isolated: reachable from neither the start nor (backwards) the end,
/// - unrunnable: can reach the end but not reachable from the start,
/// - orphaned: reachable from the start but cannot reach the end.
///
/// Assumes the existence checks passed, so exactly one start and one end
/// id are available. BFS forward from the start over the forward adjacency
/// and backward from the end over the reverse adjacency; both traversals
/// are cycle-safe via a visited set, so cycles alone never raise findings.
/// Non-empty categories are reported in the order isolated → unrunnable →
/// orphaned, each with its ids sorted ascending for deterministic output.
pub fn check_connectivity(graph: &TaskGraph) -> Vec<ValidationError> {
    let reachable_from_start = breadth_first(&graph.start_node_id, &graph.adjacency);
    let reachable_to_end = breadth_first(&graph.end_node_id, &graph.reverse_adjacency);

    let mut isolated = Vec::new();
    let mut unrunnable = Vec::new();
    let mut orphaned = Vec::new();
    for node in &graph.nodes {
        let from_start = reachable_from_start.contains(&node.id);
        let to_end = reachable_to_end.contains(&node.id);
        match (from_start, to_end) {
            (true, true) => {}
            (false, false) => isolated.push(node.id.clone()),
            (false, true) => unrunnable.push(node.id.clone()),
            (true, false) => orphaned.push(node.id.clone()),
        }
    }

    let mut errors = Vec::new();
    for (kind, mut ids) in [
        (ValidationErrorKind::IsolatedNodes, isolated),
        (ValidationErrorKind::UnrunnableNodes, unrunnable),
        (ValidationErrorKind::OrphanedNodes, orphaned),
    ] {
        if !ids.is_empty() {
            ids.sort();
            errors.push(ValidationError::with_nodes(kind, ids));
        }
    }
    errors
}

/// BFS over an adjacency map; returns every id visited, origin included.
fn breadth_first(origin: &str, adjacency: &HashMap<String, Vec<String>>) -> HashSet<String> {
    let mut visited = HashSet::new();
    visited.insert(origin.to_string());
    let mut queue = VecDeque::from([origin.to_string()]);
    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adjacency.get(&current) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }
    visited
}
