//! Validation pipeline: the invariant checks run in a fixed order with
//! short-circuiting on the first failing check.

mod checks;
mod error;

pub use checks::{
    check_connectivity, check_end_node_exists, check_no_duplicate_edges,
    check_start_node_exists,
};
pub use error::{Severity, ValidationError, ValidationErrorKind};

use crate::graph::TaskGraph;

/// A single invariant check: reads the graph, returns zero or more findings.
pub type ValidationFn = fn(&TaskGraph) -> Vec<ValidationError>;

/// The checks in pipeline order. Connectivity runs last on purpose: it
/// assumes the start/end cardinality checks passed, and a duplicated edge
/// set would only add noise to its classification.
const VALIDATIONS: &[ValidationFn] = &[
    check_start_node_exists,
    check_end_node_exists,
    check_no_duplicate_edges,
    check_connectivity,
];

/// Runs the checks in fixed order and returns the first non-empty finding
/// list; later checks never run once an earlier one reports. An empty
/// result means the graph is structurally valid.
pub fn check_invariant_violations(graph: &TaskGraph) -> Vec<ValidationError> {
    for check in VALIDATIONS {
        let errors = check(graph);
        if !errors.is_empty() {
            tracing::debug!(kind = %errors[0].kind, count = errors.len(), "validation failed");
            return errors;
        }
    }
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph valid"
    );
    Vec::new()
}

/// True when the graph has no invariant violations.
pub fn is_valid_task_graph(graph: &TaskGraph) -> bool {
    check_invariant_violations(graph).is_empty()
}
