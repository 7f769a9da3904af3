use log::{debug, trace};
use num::Zero;

use super::*;

/// Reusable working storage of the Bellman-Ford algorithm.
///
/// Works with arbitrary edge weights. Nodes that can be reached through a negative cycle end
/// up with distance [`Distance::NegInfinity`]. So do nodes whose distance falls below the
/// range of the weight type, together with everything reachable from them.
#[derive(Debug, Clone, Default)]
pub struct BellmanFordSearch {
    stack: Vec<Node>,
}

impl BellmanFordSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the distances from `source` to all nodes of `graph` into `result`.
    /// ** Panics if `source >= n` **
    pub fn run<G>(&mut self, graph: &G, source: Node, result: &mut PathVector<G::Weight>)
    where
        G: WeightedAdjacencyList,
    {
        let n = graph.number_of_nodes();
        result.reset(source, n, G::Weight::zero());

        let mut passes = 0;
        let converged = loop {
            if passes == n {
                break false;
            }
            passes += 1;

            if !Self::relax_all(graph, result) {
                break true;
            }
        };

        trace!("Bellman-Ford on n={n} from {source}: {passes} passes");

        if !converged || result.dist.iter().any(|d| d.is_unbounded()) {
            self.mark_unbounded(graph, result);
        }
    }

    /// Performs one pass over all edges; returns *true* if any distance improved
    fn relax_all<G>(graph: &G, result: &mut PathVector<G::Weight>) -> bool
    where
        G: WeightedAdjacencyList,
    {
        let mut improved = false;
        for u in graph.vertices() {
            let du = result.dist[u as usize];
            if !du.is_finite() {
                continue;
            }

            for (v, w) in graph.weighted_neighbors_of(u) {
                let dv = du.add_weight(w);
                if dv < result.dist[v as usize] {
                    result.dist[v as usize] = dv;
                    result.prev[v as usize] = u;
                    improved = true;
                }
            }
        }
        improved
    }

    /// Marks both endpoints of every edge that still relaxes (or leaves an unbounded node) as
    /// unbounded and closes the marking under reachability.
    /// Nodes that underflowed during the passes are already unbounded and act as seeds.
    fn mark_unbounded<G>(&mut self, graph: &G, result: &mut PathVector<G::Weight>)
    where
        G: WeightedAdjacencyList,
    {
        for u in graph.vertices() {
            let du = result.dist[u as usize];
            if !du.is_reachable() {
                continue;
            }

            for (v, w) in graph.weighted_neighbors_of(u) {
                if du.is_unbounded() || du.add_weight(w) < result.dist[v as usize] {
                    result.dist[u as usize] = Distance::NegInfinity;
                    result.dist[v as usize] = Distance::NegInfinity;
                }
            }
        }

        self.stack.clear();
        self.stack.extend(
            graph
                .vertices()
                .filter(|&u| result.dist[u as usize].is_unbounded()),
        );

        while let Some(u) = self.stack.pop() {
            for v in graph.neighbors_of(u) {
                let dv = &mut result.dist[v as usize];
                if !dv.is_unbounded() {
                    *dv = Distance::NegInfinity;
                    self.stack.push(v);
                }
            }
        }

        debug!(
            "Unbounded distances from {}: {} nodes",
            result.source,
            result.dist.iter().filter(|d| d.is_unbounded()).count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let graph =
            GraphWD::<i32>::from_weighted_edges(4, [(0, 1, 1), (1, 2, 2), (2, 3, -5), (0, 3, 10)]);
        let mut paths = PathVector::new();
        BellmanFordSearch::new().run(&graph, 0, &mut paths);

        assert_eq!(
            paths.distances(),
            &[0, 1, 3, -2].map(Distance::Finite)
        );
        assert_eq!(
            paths.predecessors().collect::<Vec<_>>(),
            vec![None, Some(0), Some(1), Some(2)]
        );
        assert_eq!(paths.path(3), vec![3, 2, 1, 0]);
    }

    #[test]
    fn negative_cycle() {
        // 0 -> 1 -> 2 -> 1 (cycle of weight -1) -> 3 -> 4; 5 only reaches 0
        let graph = GraphWD::<i64>::from_weighted_edges(
            6,
            [
                (0, 1, 4),
                (1, 2, 1),
                (2, 1, -2),
                (2, 3, 7),
                (3, 4, 100),
                (5, 0, 1),
            ],
        );
        let mut search = BellmanFordSearch::new();
        let mut paths = PathVector::new();

        search.run(&graph, 0, &mut paths);
        assert_eq!(paths.distance(0), Distance::Finite(0));
        assert_eq!(paths.distance(5), Distance::Infinity);
        for v in 1..5 {
            assert_eq!(paths.distance(v), Distance::NegInfinity);
            assert!(paths.path(v).is_empty());
        }

        search.run(&graph, 4, &mut paths);
        assert_eq!(paths.distance(4), Distance::Finite(0));
        assert!((0..4).chain(5..6).all(|v| paths.distance(v) == Distance::Infinity));
    }

    #[test]
    fn negative_self_loop() {
        let graph = GraphWD::<i32>::from_weighted_edges(3, [(0, 0, -1), (0, 1, 3)]);
        let mut paths = PathVector::new();
        BellmanFordSearch::new().run(&graph, 0, &mut paths);

        assert_eq!(
            paths.distances(),
            &[Distance::NegInfinity, Distance::NegInfinity, Distance::Infinity]
        );
    }

    #[test]
    fn parallel_edges_and_overflow() {
        // 0 -> 2 sums to 190 which does not fit an i8: 2 and everything behind it count as
        // unreachable, in both algorithms
        let graph = GraphWD::<i8>::from_weighted_edges(
            4,
            [(0, 1, 100), (0, 1, 90), (1, 2, 100), (2, 3, -128)],
        );
        let mut paths = PathVector::new();
        BellmanFordSearch::new().run(&graph, 0, &mut paths);

        assert_eq!(paths.distance(1), Distance::Finite(90));
        assert_eq!(paths.distance(2), Distance::Infinity);
        assert_eq!(paths.distance(3), Distance::Infinity);

        let matrix = graph.all_pairs_shortest_distances();
        for v in graph.vertices() {
            assert_eq!(paths.distance(v), matrix.distance(0, v));
        }
    }

    #[test]
    fn underflow_is_unbounded_downstream() {
        let graph = GraphWD::<i8>::from_weighted_edges(
            5,
            [(0, 1, -100), (1, 2, -100), (2, 3, 5), (3, 4, 127), (4, 1, 0)],
        );
        let mut paths = PathVector::new();
        BellmanFordSearch::new().run(&graph, 0, &mut paths);

        assert_eq!(paths.distance(0), Distance::Finite(0));
        assert!((1..5).all(|v| paths.distance(v) == Distance::NegInfinity));
        assert!(paths.path(4).is_empty());

        let matrix = graph.all_pairs_shortest_distances();
        for v in graph.vertices() {
            assert_eq!(paths.distance(v), matrix.distance(0, v), "0 -> {v}");
        }
    }

    #[test]
    fn underflow_without_cycle() {
        let graph = GraphWD::<i8>::from_weighted_edges(4, [(0, 1, -100), (1, 2, -100), (2, 3, 5)]);
        let mut paths = PathVector::new();
        BellmanFordSearch::new().run(&graph, 0, &mut paths);

        assert_eq!(
            paths.distances(),
            &[
                Distance::Finite(0),
                Distance::Finite(-100),
                Distance::NegInfinity,
                Distance::NegInfinity
            ]
        );
        let mut row = Vec::new();
        graph.all_pairs_shortest_distances().row_into(0, &mut row);
        assert_eq!(row, paths.distances());
    }
}
