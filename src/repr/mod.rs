/*!
# Graph Representations

All representations store one adjacency list per node in insertion order and support exactly
two mutations: appending an edge and a full [`reset`](crate::ops::GraphReset::reset).
Parallel edges and self-loops are kept as inserted.

- [`GraphD`]: unweighted directed graph (Eulerian walks),
- [`WeightedDigraph`]: weighted directed graph, either with arbitrary weights ([`GraphWD`])
  or restricted to nonnegative weights ([`GraphWDP`]),
- [`GraphWU`]: weighted undirected graph (minimum spanning trees),
- [`GraphTimeTable`]: directed graph whose edges can only be taken at periodic departure times.

The weight restriction of [`WeightedDigraph`] is part of its type: algorithms that are only
correct for nonnegative weights (Dijkstra) are only implemented for [`GraphWDP`], and the
generic shortest-path entry point selects its strategy from this capability flag.
*/

use crate::{ops::*, *};

mod directed;
mod time_table;
mod undirected;
mod weighted;

pub use directed::*;
pub use time_table::*;
pub use undirected::*;
pub use weighted::*;

/// Weight-sign capability of a [`WeightedDigraph`]
pub trait WeightSign: Clone + Default {
    /// *true* if every weight in the graph is guaranteed to be nonnegative
    const NONNEGATIVE: bool;
}

/// Marker for graphs allowing arbitrary (including negative) weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signed;

/// Marker for graphs whose weights are guaranteed to be nonnegative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegative;

impl WeightSign for Signed {
    const NONNEGATIVE: bool = false;
}

impl WeightSign for NonNegative {
    const NONNEGATIVE: bool = true;
}

pub(crate) mod macros {
    /// Implements the node/edge-order traits, `GraphNew` and `GraphReset` for a struct with
    /// fields `nbs: Vec<Vec<_>>` and `num_edges: NumEdges`; further fields are initialized
    /// from the optional `{ field: init }` block
    macro_rules! impl_common_graph_ops {
        ($struct:ident$(<$($generic:ident $(: $bound:path)?),*>)? => $directed:ident $(, { $($field:ident : $init:expr),* })?) => {
            impl$(<$($generic $(: $bound)?),*>)? GraphType for $struct$(<$($generic),*>)? {
                type Dir = $directed;
            }

            impl$(<$($generic $(: $bound)?),*>)? GraphNodeOrder for $struct$(<$($generic),*>)? {
                fn number_of_nodes(&self) -> NumNodes {
                    self.nbs.len() as NumNodes
                }
            }

            impl$(<$($generic $(: $bound)?),*>)? GraphEdgeOrder for $struct$(<$($generic),*>)? {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl$(<$($generic $(: $bound)?),*>)? GraphNew for $struct$(<$($generic),*>)? {
                fn new(n: NumNodes) -> Self {
                    Self {
                        nbs: vec![Vec::new(); n as usize],
                        num_edges: 0,
                        $($($field: $init,)*)?
                    }
                }
            }

            impl$(<$($generic $(: $bound)?),*>)? GraphReset for $struct$(<$($generic),*>)? {
                fn reset(&mut self, n: NumNodes) {
                    self.nbs.truncate(n as usize);
                    self.nbs.iter_mut().for_each(|nbs| nbs.clear());
                    self.nbs.resize_with(n as usize, Vec::new);
                    self.num_edges = 0;
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
