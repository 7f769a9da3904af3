/*!
# Graph Algorithms

This module provides the algorithms of this crate, built on top of the graph representations
in [`repr`](crate::repr). All algorithms are re-exported at the top level of this module, so
you can simply do:
```rust
use wgraphs::algo::*;
```

Every algorithm is available in two flavors:
- as a trait method on the graph itself (e.g. `graph.shortest_distances(source)`), which
  allocates fresh working storage for every call, and
- as a search struct (e.g. [`DijkstraSearch`]) owning its working storage, which can be reused
  for any number of runs (also on graphs of different sizes) to avoid reallocation.

Results are written into caller-owned containers of [`paths`](crate::paths). Search structs
are not meant to be shared between threads; use one per thread.

| Graph | Trait | Algorithm |
|---|---|---|
| [`GraphD`] | [`EulerianWalk`] | Hierholzer |
| [`GraphWD`], [`GraphWDP`] | [`ShortestPaths`] | Bellman-Ford, Dijkstra, Floyd-Warshall |
| [`GraphWDP`] | [`NonNegativeShortestPaths`] | Dijkstra, shortest-path DAG |
| [`GraphWU`] | [`MinimumSpanningTree`] | Prim |
| [`GraphTimeTable`] | [`EarliestArrival`] | Dijkstra keyed by arrival time |
*/

mod bellman_ford;
mod dijkstra;
mod earliest_arrival;
mod eulerian;
mod floyd_warshall;
mod prim;
mod shortest_paths;

use crate::{prelude::*, utils::*};

pub use bellman_ford::*;
pub use dijkstra::*;
pub use earliest_arrival::*;
pub use eulerian::*;
use floyd_warshall::*;
pub use prim::*;
pub use shortest_paths::*;
