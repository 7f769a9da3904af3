/*!
`wgraphs` is a graph data structure & algorithms library for **w**eighted graphs on dense,
unlabelled node ids `0` to `n - 1`. It covers the classic single-source and all-pairs
shortest-path algorithms (including negative weights and negative cycles), minimum spanning
trees, Eulerian walks and earliest arrival on periodic time tables.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use the tuple-structs `Edge(Node, Node)` and `WeightedEdge<W>(Node, Node, W)`.
Weights are integer-like types (see [`Weight`]); distances are tri-state [`Distance`] values
distinguishing *unreachable* (`Infinity`) and *unbounded below* (`NegInfinity`) from finite
distances.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`GraphD`](crate::repr::GraphD): unweighted directed graph,
- [`GraphWD`](crate::repr::GraphWD): weighted directed graph with arbitrary weights,
- [`GraphWDP`](crate::repr::GraphWDP): weighted directed graph with nonnegative weights,
- [`GraphWU`](crate::repr::GraphWU): weighted undirected graph,
- [`GraphTimeTable`](crate::repr::GraphTimeTable): directed graph with periodic departure times.

Graphs have a fixed number of nodes and only support inserting edges; a
[`reset`](crate::ops::GraphReset::reset) removes all edges and resizes the graph while keeping
its allocations.

# Design

All algorithms are provided as search structs owning their working storage, which can be
reused across runs. Alternatively, all of them are implemented via traits on the graphs
itself, making them usable without setting up a search beforehand. Algorithms never fail:
unreachable nodes, negative cycles, disconnected graphs and infeasible Eulerian walks are
reported as data in the result containers of [`paths`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, basic graph operations, all
  graph representations and result containers,
- [`algo`] includes the algorithm traits that are implemented on graphs itself such as
  `graph.shortest_distances(source)` or `graph.minimum_spanning_tree()`,
- [`paths`] includes the result containers with path reconstruction,
- [`gens`] includes random instance generators.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = GraphWD::<i32>::from_weighted_edges(4, [(0, 1, 1), (1, 2, 2), (2, 3, -5), (0, 3, 10)]);
let paths = graph.shortest_distances(0);

assert_eq!(paths.distances(), &[0, 1, 3, -2].map(Distance::Finite));
assert_eq!(paths.path(3), vec![3, 2, 1, 0]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod paths;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph
/// operation traits as well as all implemented representations and result containers.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, paths::*, repr::*, weight::*};
}
