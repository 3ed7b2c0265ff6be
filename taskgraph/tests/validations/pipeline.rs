//! Pipeline order and short-circuiting: the first failing check's
//! findings are the whole verdict.

use taskgraph::{check_invariant_violations, is_valid_task_graph, ValidationErrorKind};

use crate::common::{agent, edge, end, graph, linear_graph, start};

/// **Scenario** A from the API contract: start → middle → end is valid.
#[test]
fn linear_graph_is_valid() {
    let g = linear_graph();
    assert!(check_invariant_violations(&g).is_empty());
    assert!(is_valid_task_graph(&g));
}

/// **Scenario** B from the API contract: no start node yields exactly one
/// missing_start finding, nothing else.
#[test]
fn missing_start_is_the_only_finding() {
    let g = graph(vec![agent("middle"), end("end")], vec![edge("middle", "end")]);
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::MissingStart);
}

/// Missing start suppresses everything downstream, even when the graph
/// also has no end node and a duplicated edge.
#[test]
fn missing_start_short_circuits_later_checks() {
    let g = graph(
        vec![agent("a"), agent("b")],
        vec![edge("a", "b"), edge("a", "b")],
    );
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::MissingStart);
}

#[test]
fn multiple_start_reports_before_missing_end() {
    let g = graph(vec![start("s1"), start("s2"), agent("a")], vec![]);
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::MultipleStart);
    assert_eq!(errors[0].nodes, vec!["s1", "s2"]);
}

/// Duplicate edges report before connectivity: the same graph also has an
/// isolated node, but the verdict is the duplicate alone.
#[test]
fn duplicate_edges_report_before_connectivity() {
    let g = graph(
        vec![start("start"), agent("island"), end("end")],
        vec![edge("start", "end"), edge("start", "end")],
    );
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateEdge);
    assert_eq!(errors[0].edges, vec![edge("start", "end")]);
}

/// An empty graph is input like any other: the pipeline reports the first
/// failing check instead of panicking.
#[test]
fn empty_graph_reports_missing_start() {
    let g = graph(vec![], vec![]);
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::MissingStart);
    assert!(!is_valid_task_graph(&g));
}

/// Connectivity findings flow through the pipeline unchanged once the
/// earlier checks pass.
#[test]
fn connectivity_findings_are_the_pipeline_verdict() {
    let g = graph(
        vec![start("start"), agent("island"), end("end")],
        vec![edge("start", "end")],
    );
    let errors = check_invariant_violations(&g);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::IsolatedNodes);
    assert_eq!(errors[0].nodes, vec!["island"]);
}
