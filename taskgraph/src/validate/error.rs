//! Validation findings: the closed kind set, severity, and message text.
//!
//! Findings are plain values produced by the checks and consumed by the
//! pipeline and the HTTP boundary; they are never persisted or mutated.

use serde::Serialize;
use thiserror::Error;

use crate::graph::TaskEdge;

/// Severity of a finding as presented to callers. Only orphaned nodes are
/// a warning; every other kind blocks execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// The closed set of structural findings. Display and serde both use the
/// snake_case wire name (e.g. `missing_start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// No start-typed node in the graph.
    #[error("missing_start")]
    MissingStart,

    /// No end-typed node in the graph.
    #[error("missing_end")]
    MissingEnd,

    /// Two or more start-typed nodes.
    #[error("multiple_start")]
    MultipleStart,

    /// Two or more end-typed nodes.
    #[error("multiple_end")]
    MultipleEnd,

    /// Nodes that can reach the end but are unreachable from the start.
    #[error("unrunnable_nodes")]
    UnrunnableNodes,

    /// Nodes neither reachable from the start nor able to reach the end.
    #[error("isolated_nodes")]
    IsolatedNodes,

    /// An edge whose (from, to) pair already appeared earlier in the list.
    #[error("duplicate_edge")]
    DuplicateEdge,

    /// Nodes reachable from the start that cannot reach the end.
    #[error("orphaned_nodes")]
    OrphanedNodes,
}

impl ValidationErrorKind {
    /// Severity of this kind. Total over the closed set; the enum being
    /// closed is what would otherwise warrant an "unknown validation
    /// error" fallback.
    pub fn severity(self) -> Severity {
        match self {
            ValidationErrorKind::OrphanedNodes => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::MissingStart => "Graph is missing a start node",
            ValidationErrorKind::MissingEnd => "Graph is missing an end node",
            ValidationErrorKind::MultipleStart => "Graph has multiple start nodes",
            ValidationErrorKind::MultipleEnd => "Graph has multiple end nodes",
            ValidationErrorKind::UnrunnableNodes => "Nodes cannot be reached from the start",
            ValidationErrorKind::IsolatedNodes => "Nodes are completely isolated from the graph",
            ValidationErrorKind::DuplicateEdge => "Graph contains duplicate edges",
            ValidationErrorKind::OrphanedNodes => "Nodes cannot reach the end",
        }
    }
}

/// A single structural finding: a kind plus the offending nodes or edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// Offending node ids; empty when the kind carries no node detail.
    pub nodes: Vec<String>,
    /// Offending edges; only the duplicate-edge check populates this.
    pub edges: Vec<TaskEdge>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_nodes(kind: ValidationErrorKind, nodes: Vec<String>) -> Self {
        Self {
            kind,
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(kind: ValidationErrorKind, edges: Vec<TaskEdge>) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges,
        }
    }
}
