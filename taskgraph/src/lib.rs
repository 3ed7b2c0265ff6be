//! # taskgraph
//!
//! Structural validation for directed task graphs. A graph is a list of
//! typed nodes (start, end, agent, tool) and a list of directed edges;
//! before an external runner executes it, this crate checks that the graph
//! is well-formed: exactly one start node, exactly one end node, no
//! duplicate edges, and every node on some start-to-end path.
//!
//! ## Design Principles
//!
//! - **Construction never fails**: [`TaskGraph::new`] accepts any node and
//!   edge lists, including empty ones, and builds forward/reverse adjacency
//!   in one pass. Malformed shapes are findings, not panics.
//! - **Findings are values**: checks return [`ValidationError`] lists; the
//!   core has no fallible paths and no side effects.
//! - **Ordered short-circuit pipeline**: [`check_invariant_violations`]
//!   runs the checks in a fixed order and returns the first non-empty
//!   result, so connectivity analysis only ever sees a graph with a single
//!   start and end.
//!
//! Cycles are deliberately not an error: a cycle whose nodes are reachable
//! from start and can reach end validates cleanly.
//!
//! ## Main Modules
//!
//! - [`graph`]: `TaskNode`, `TaskEdge`, `TaskGraph`: the data model and
//!   its precomputed adjacency maps.
//! - [`validate`]: the four invariant checks, the pipeline, and the
//!   finding types (`ValidationError`, `ValidationErrorKind`, `Severity`).
//!
//! ## Quick Start
//!
//! ```rust
//! use taskgraph::{check_invariant_violations, NodeType, TaskEdge, TaskGraph, TaskNode};
//!
//! let graph = TaskGraph::new(
//!     vec![
//!         TaskNode::new("start", NodeType::Start),
//!         TaskNode::new("work", NodeType::Agent),
//!         TaskNode::new("end", NodeType::End),
//!     ],
//!     vec![TaskEdge::new("start", "work"), TaskEdge::new("work", "end")],
//! );
//! assert!(check_invariant_violations(&graph).is_empty());
//! ```
//!
//! The HTTP boundary (request/response shaping, severity on the wire) lives
//! in `taskgraph-server`, not in this crate.

pub mod graph;
pub mod validate;

pub use graph::{NodeType, TaskEdge, TaskGraph, TaskNode};
pub use validate::{
    check_connectivity, check_end_node_exists, check_invariant_violations,
    check_no_duplicate_edges, check_start_node_exists, is_valid_task_graph, Severity,
    ValidationError, ValidationErrorKind,
};
