use std::{cmp::Reverse, collections::BinaryHeap, fmt::Debug};

use log::trace;

use super::*;

/// Single-source shortest paths restricted to graphs without negative weights.
pub trait NonNegativeShortestPaths: WeightedAdjacencyList {
    /// Computes the distances from `source` to all nodes into `result` using Dijkstra's
    /// algorithm.
    /// ** Panics if `source >= n` **
    fn dijkstra_into(&self, source: Node, result: &mut PathVector<Self::Weight>);

    /// Computes the distances from `source` into `paths` and writes into `dag` every edge that
    /// realizes a shortest distance, reversed: `dag` contains the edge `v -> u` of weight `w`
    /// for every edge `u -> v` of weight `w` with `dist(u) + w == dist(v)` (self-loops aside).
    ///
    /// `dag` is reset to the node count of the graph; following its edges from any reachable
    /// node leads back to `source` on shortest paths only. Zero-weight cycles show up as
    /// cycles in `dag`.
    /// ** Panics if `source >= n` **
    fn shortest_path_dag_into(
        &self,
        source: Node,
        paths: &mut PathVector<Self::Weight>,
        dag: &mut GraphWDP<Self::Weight>,
    );

    /// Returns the shortest-path predecessor graph as described in
    /// [`NonNegativeShortestPaths::shortest_path_dag_into`]
    /// ** Panics if `source >= n` **
    fn shortest_path_dag(&self, source: Node) -> GraphWDP<Self::Weight> {
        let mut dag = GraphWDP::new(0);
        self.shortest_path_dag_into(source, &mut PathVector::new(), &mut dag);
        dag
    }
}

impl<W: Weight> NonNegativeShortestPaths for GraphWDP<W> {
    fn dijkstra_into(&self, source: Node, result: &mut PathVector<W>) {
        DijkstraSearch::new().run(self, source, result);
    }

    fn shortest_path_dag_into(
        &self,
        source: Node,
        paths: &mut PathVector<W>,
        dag: &mut GraphWDP<W>,
    ) {
        DijkstraSearch::new().run_with_dag(self, source, paths, dag);
    }
}

/// Reusable working storage of Dijkstra's algorithm.
///
/// The priority queue does not support decreasing keys: improved nodes are pushed again and
/// stale entries are skipped once their node is finalized.
#[derive(Clone)]
pub struct DijkstraSearch<W> {
    heap: BinaryHeap<Reverse<(W, Node)>>,
    finalized: NodeBitSet,
}

impl<W: Weight> Debug for DijkstraSearch<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DijkstraSearch")
            .field("heap", &self.heap)
            .field("finalized", &self.finalized.cardinality())
            .finish()
    }
}

impl<W: Weight> Default for DijkstraSearch<W> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            finalized: NodeBitSet::new(0),
        }
    }
}

impl<W: Weight> DijkstraSearch<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the distances from `source` to all nodes of `graph` into `result`.
    /// ** Panics if `source >= n` **
    pub fn run(&mut self, graph: &GraphWDP<W>, source: Node, result: &mut PathVector<W>) {
        self.run_unchecked(graph, source, result, |_, _, _, _| {});
    }

    /// Like [`DijkstraSearch::run`] but additionally collects all shortest-path predecessor
    /// edges into `dag` (see [`NonNegativeShortestPaths::shortest_path_dag_into`]).
    /// ** Panics if `source >= n` **
    pub fn run_with_dag(
        &mut self,
        graph: &GraphWDP<W>,
        source: Node,
        result: &mut PathVector<W>,
        dag: &mut GraphWDP<W>,
    ) {
        dag.reset(graph.number_of_nodes());
        self.run_unchecked(graph, source, result, |u, v, w, improved| {
            if improved {
                dag.clear_weighted_edges_of(v);
            }
            dag.add_weighted_edge(v, u, w);
        });
    }

    /// Runs Dijkstra's algorithm on any weighted graph; the caller guarantees that no weight
    /// is negative. `on_tight_edge(u, v, w, improved)` is called for every non-loop edge
    /// `(u, v, w)` that improves (`improved`) or ties the distance of `v`.
    pub(crate) fn run_unchecked<G, F>(
        &mut self,
        graph: &G,
        source: Node,
        result: &mut PathVector<W>,
        mut on_tight_edge: F,
    ) where
        G: WeightedAdjacencyList<Weight = W>,
        F: FnMut(Node, Node, W, bool),
    {
        let n = graph.number_of_nodes();
        result.reset(source, n, W::zero());
        self.finalized.reset_scratch(n);
        self.heap.clear();
        self.heap.push(Reverse((W::zero(), source)));

        let mut pops = 0usize;
        while let Some(Reverse((du, u))) = self.heap.pop() {
            pops += 1;
            if self.finalized.set_bit(u) {
                continue;
            }

            let du = Distance::Finite(du);
            for (v, w) in graph.weighted_neighbors_of(u) {
                if u == v {
                    continue;
                }

                let dv = du.add_weight(w);
                if dv < result.dist[v as usize] {
                    result.dist[v as usize] = dv;
                    result.prev[v as usize] = u;
                    if let Distance::Finite(d) = dv {
                        self.heap.push(Reverse((d, v)));
                    }
                    on_tight_edge(u, v, w, true);
                } else if dv.is_finite() && dv == result.dist[v as usize] {
                    on_tight_edge(u, v, w, false);
                }
            }
        }

        trace!(
            "Dijkstra on n={n} from {source}: {} nodes settled, {pops} heap pops",
            self.finalized.cardinality()
        );
    }
}
