//! Errors of the checked APIs.
//!
//! Algorithms themselves never fail; their outcomes (unreachable, unbounded, infeasible) are
//! data. `GraphError` is only returned by the `try_*` variants that validate their input or
//! their output.

use thiserror::Error;

use crate::{Node, NumEdges, NumNodes};

/// All errors reported by checked operations of this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A negative weight was added to (or found in) a graph restricted to nonnegative weights.
    #[error("Edge ({u},{v}) has a negative weight")]
    NegativeWeight { u: Node, v: Node },

    /// The degree balance required for an Eulerian walk is violated.
    #[error("Degree imbalance at node {node}: out-degree {out_degree}, in-degree {in_degree}")]
    DegreeImbalance {
        node: Node,
        out_degree: NumNodes,
        in_degree: NumNodes,
    },

    /// The degrees balance but the walk did not reach every edge.
    #[error("Walk covers {covered} of {total} edges")]
    IncompleteWalk { covered: NumEdges, total: NumEdges },
}

/// Convenience result type for checked operations.
pub type GraphResult<T> = Result<T, GraphError>;
