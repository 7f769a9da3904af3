use super::*;

/// Single-source and all-pairs shortest paths on weighted directed graphs.
///
/// Distances are [`Distance`] values: `Infinity` for unreachable nodes and `NegInfinity` for
/// nodes reachable through a negative cycle.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = GraphWD::<i64>::from_weighted_edges(3, [(0, 1, 5), (1, 2, -2), (0, 2, 4)]);
///
/// let paths = graph.shortest_distances(0);
/// assert_eq!(paths.distance(2), Distance::Finite(3));
/// assert_eq!(paths.path(2), vec![2, 1, 0]);
///
/// let matrix = graph.all_pairs_shortest_distances();
/// assert_eq!(matrix.distance(1, 2), Distance::Finite(-2));
/// assert_eq!(matrix.distance(2, 0), Distance::Infinity);
/// ```
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Computes the distances from `source` with the Bellman-Ford algorithm, regardless of
    /// the weight-sign of the graph.
    /// ** Panics if `source >= n` **
    fn bellman_ford_into(&self, source: Node, result: &mut PathVector<Self::Weight>) {
        BellmanFordSearch::new().run(self, source, result);
    }

    /// Computes the distances from `source` with the fastest algorithm that is correct for
    /// the graph: Dijkstra's algorithm if weights are guaranteed nonnegative, Bellman-Ford
    /// otherwise.
    /// ** Panics if `source >= n` **
    fn shortest_distances_into(&self, source: Node, result: &mut PathVector<Self::Weight>);

    /// Returns the distances from `source`, see [`ShortestPaths::shortest_distances_into`]
    /// ** Panics if `source >= n` **
    fn shortest_distances(&self, source: Node) -> PathVector<Self::Weight> {
        let mut result = PathVector::new();
        self.shortest_distances_into(source, &mut result);
        result
    }

    /// Computes the distances between all pairs of nodes (Floyd-Warshall)
    fn all_pairs_shortest_distances_into(&self, result: &mut PathMatrix<Self::Weight>) {
        floyd_warshall_into(self, result);
    }

    /// Returns the distances between all pairs of nodes (Floyd-Warshall)
    fn all_pairs_shortest_distances(&self) -> PathMatrix<Self::Weight> {
        let mut result = PathMatrix::new();
        self.all_pairs_shortest_distances_into(&mut result);
        result
    }
}

impl<W: Weight, S: WeightSign> ShortestPaths for WeightedDigraph<W, S> {
    fn shortest_distances_into(&self, source: Node, result: &mut PathVector<W>) {
        if S::NONNEGATIVE {
            DijkstraSearch::new().run_unchecked(self, source, result, |_, _, _, _| {});
        } else {
            self.bellman_ford_into(source, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Nonnegative random weights shifted by random node potentials `w + p(u) - p(v)`: the
    /// weight of every cycle stays nonnegative while single edges become negative
    fn random_potential_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> GraphWD<i64> {
        let potentials = (0..n).map(|_| rng.random_range(0..=15)).collect::<Vec<i64>>();
        let edges = WeightedGnm::new()
            .nodes(n)
            .edges(m)
            .weights(0i64..=20)
            .generate(rng)
            .into_iter()
            .map(|WeightedEdge(u, v, w)| {
                WeightedEdge(u, v, w + potentials[u as usize] - potentials[v as usize])
            });
        GraphWD::from_weighted_edges(n, edges)
    }

    #[test]
    fn bellman_ford_matches_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut paths = PathVector::new();
        let mut matrix = PathMatrix::new();

        for n in [1, 5, 20] {
            for m in [0, n, 3 * n] {
                for _ in 0..5 {
                    let graph = random_potential_graph(rng, n, m);
                    graph.all_pairs_shortest_distances_into(&mut matrix);

                    for s in graph.vertices() {
                        graph.shortest_distances_into(s, &mut paths);
                        for v in graph.vertices() {
                            assert_eq!(paths.distance(v), matrix.distance(s, v));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unbounded_distances_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let mut paths = PathVector::new();
        let mut matrix = PathMatrix::new();

        for n in [3, 8, 15] {
            for _ in 0..20 {
                let graph = GraphWD::<i32>::weighted_gnm(rng, n, 2 * n, -4..=10);
                graph.all_pairs_shortest_distances_into(&mut matrix);

                for s in graph.vertices() {
                    graph.bellman_ford_into(s, &mut paths);
                    for v in graph.vertices() {
                        assert_eq!(paths.distance(v), matrix.distance(s, v), "{s} -> {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn negative_cycle_reachability() {
        // cycle 1 -> 2 -> 3 -> 1 of weight -1 reachable from 0, leading to 4
        let graph = GraphWD::<i32>::from_weighted_edges(
            6,
            [(0, 1, 2), (1, 2, 3), (2, 3, -6), (3, 1, 2), (3, 4, 1), (5, 0, 1)],
        );
        let matrix = graph.all_pairs_shortest_distances();

        for s in [0, 1, 2, 3, 5] {
            let paths = graph.shortest_distances(s);
            for v in 1..5 {
                assert_eq!(paths.distance(v), Distance::NegInfinity);
                assert_eq!(matrix.distance(s, v), Distance::NegInfinity);
            }
        }
        assert_eq!(matrix.distance(0, 0), Distance::Finite(0));
        assert_eq!(matrix.distance(5, 0), Distance::Finite(1));
        assert_eq!(matrix.distance(4, 4), Distance::Finite(0));
        assert_eq!(matrix.distance(4, 1), Distance::Infinity);
    }

    #[test]
    fn dijkstra_matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut dijkstra = PathVector::new();
        let mut bellman_ford = PathVector::new();

        for n in [1, 10, 40] {
            for m in [n, 4 * n] {
                for _ in 0..10 {
                    let graph = GraphWDP::<u64>::weighted_gnm(rng, n, m, 0..=30);
                    for s in graph.vertices() {
                        graph.shortest_distances_into(s, &mut dijkstra);
                        graph.bellman_ford_into(s, &mut bellman_ford);
                        assert_eq!(dijkstra.distances(), bellman_ford.distances());

                        for v in graph.vertices() {
                            let path = dijkstra.path(v);
                            assert_eq!(path.is_empty(), !dijkstra.distance(v).is_finite());
                            assert!(path.last().is_none_or(|&u| u == s));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn signed_graph_uses_bellman_ford() {
        let graph = GraphWDP::<i32>::from_weighted_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
        let mut graph = graph.into_signed();
        graph.add_weighted_edge(1, 2, -3);

        let paths = graph.shortest_distances(0);
        assert!(paths.distances()[1..].iter().all(|d| d.is_unbounded()));
    }
}
