use std::{cmp::Reverse, collections::BinaryHeap, fmt::Debug};

use log::{debug, trace};

use super::*;

/// Minimum spanning trees (Prim's algorithm) on undirected weighted graphs.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = GraphWU::<u32>::from_weighted_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
/// let tree = graph.minimum_spanning_tree();
///
/// assert_eq!(tree.weight(), Distance::Finite(3));
/// assert_eq!(tree.root(), Some(2));
/// assert_eq!(tree.predecessors().collect::<Vec<_>>(), vec![Some(1), Some(2), None]);
/// ```
pub trait MinimumSpanningTree: WeightedAdjacencyList + GraphType<Dir = Undirected> {
    /// Computes a minimum spanning tree rooted at node `n - 1` into `result`.
    ///
    /// If the graph is disconnected, the weight of `result` is `Infinity` and only the
    /// predecessors of the component of the root are meaningful. The total weight saturates
    /// if it does not fit `Self::Weight`; `result` then still reports a spanning tree.
    fn minimum_spanning_tree_into(&self, result: &mut Tree<Self::Weight>);

    /// Returns a minimum spanning tree rooted at node `n - 1`,
    /// see [`MinimumSpanningTree::minimum_spanning_tree_into`]
    fn minimum_spanning_tree(&self) -> Tree<Self::Weight> {
        let mut tree = Tree::new();
        self.minimum_spanning_tree_into(&mut tree);
        tree
    }
}

impl<G> MinimumSpanningTree for G
where
    G: WeightedAdjacencyList + GraphType<Dir = Undirected>,
{
    fn minimum_spanning_tree_into(&self, result: &mut Tree<Self::Weight>) {
        PrimSearch::new().run(self, result);
    }
}

/// Reusable working storage of Prim's algorithm.
#[derive(Clone)]
pub struct PrimSearch<W> {
    heap: BinaryHeap<Reverse<(W, Node)>>,
    colored: NodeBitSet,
    best: Vec<Distance<W>>,
}

impl<W: Weight> Debug for PrimSearch<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimSearch")
            .field("heap", &self.heap)
            .field("colored", &self.colored.cardinality())
            .field("best", &self.best)
            .finish()
    }
}

impl<W: Weight> Default for PrimSearch<W> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            colored: NodeBitSet::new(0),
            best: Vec::new(),
        }
    }
}

impl<W: Weight> PrimSearch<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a minimum spanning tree of `graph` rooted at node `n - 1` into `result`
    pub fn run<G>(&mut self, graph: &G, result: &mut Tree<W>)
    where
        G: WeightedAdjacencyList<Weight = W> + GraphType<Dir = Undirected>,
    {
        let n = graph.number_of_nodes();
        result.reset(n);
        let Some(root) = result.root() else {
            return;
        };

        self.colored.reset_scratch(n);
        assign(&mut self.best, n, Distance::Infinity);
        self.best[root as usize] = Distance::zero();
        self.heap.clear();
        self.heap.push(Reverse((W::zero(), root)));

        while let Some(Reverse((_, u))) = self.heap.pop() {
            if self.colored.set_bit(u) {
                continue;
            }

            for (v, w) in graph.weighted_neighbors_of(u) {
                if self.colored.get_bit(v) || Distance::Finite(w) >= self.best[v as usize] {
                    continue;
                }

                self.best[v as usize] = Distance::Finite(w);
                result.prev[v as usize] = u;
                self.heap.push(Reverse((w, v)));
            }
        }

        result.spanning = self.colored.cardinality() as NumNodes == n;
        result.weight = if result.spanning {
            self.best
                .iter()
                .fold(Distance::zero(), |total, &w| total + w)
        } else {
            Distance::Infinity
        };

        trace!("Prim on n={n}: {} nodes colored", self.colored.cardinality());
        if !result.is_spanning() {
            debug!(
                "Graph is disconnected: tree spans {} of {n} nodes",
                self.colored.cardinality()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Kruskal's algorithm with a plain union-find as reference
    fn kruskal_weight(graph: &GraphWU<i64>) -> Option<i64> {
        fn find(parent: &mut [Node], u: Node) -> Node {
            let mut root = u;
            while parent[root as usize] != root {
                root = parent[root as usize];
            }
            parent[u as usize] = root;
            root
        }

        let mut parent = graph.vertices().collect_vec();
        let mut weight = 0;
        let mut joined = 0;
        for WeightedEdge(u, v, w) in graph
            .weighted_edges(true)
            .sorted_by_key(|e| e.weight())
        {
            let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
            if ru != rv {
                parent[ru as usize] = rv;
                weight += w;
                joined += 1;
            }
        }

        (joined + 1 >= graph.number_of_nodes()).then_some(weight)
    }

    #[test]
    fn triangle() {
        let graph = GraphWU::<i32>::from_weighted_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
        let tree = graph.minimum_spanning_tree();

        assert_eq!(tree.weight(), Distance::Finite(3));
        assert!(tree.is_spanning());
        assert_eq!(tree.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn loops_parallel_and_negative_edges() {
        let graph = GraphWU::<i32>::from_weighted_edges(
            4,
            [(3, 3, -9), (0, 3, 4), (0, 3, -2), (1, 2, 0), (2, 3, 7), (1, 0, 1)],
        );
        let tree = graph.minimum_spanning_tree();

        assert_eq!(tree.weight(), Distance::Finite(-1));
        assert_eq!(
            tree.predecessors().collect_vec(),
            vec![Some(3), Some(0), Some(1), None]
        );
    }

    #[test]
    fn disconnected() {
        let graph = GraphWU::<u32>::from_weighted_edges(5, [(0, 1, 1), (2, 4, 3), (3, 4, 1)]);
        let mut tree = Tree::new();
        graph.minimum_spanning_tree_into(&mut tree);

        assert_eq!(tree.weight(), Distance::Infinity);
        assert!(!tree.is_spanning());
        assert_eq!(tree.predecessor(2), Some(4));
        assert_eq!(tree.predecessor(3), Some(4));
        assert_eq!(tree.predecessor(0), None);
    }

    #[test]
    fn saturated_total() {
        let graph = GraphWU::<i8>::from_weighted_edges(3, [(0, 1, -100), (1, 2, -100), (0, 2, 50)]);
        let tree = graph.minimum_spanning_tree();
        assert!(tree.is_spanning());
        assert_eq!(tree.weight(), Distance::NegInfinity);
        assert_eq!(tree.predecessors().collect_vec(), vec![Some(1), Some(2), None]);

        let graph = GraphWU::<u8>::from_weighted_edges(3, [(0, 1, 200), (1, 2, 100)]);
        let tree = graph.minimum_spanning_tree();
        assert!(tree.is_spanning());
        assert_eq!(tree.weight(), Distance::Infinity);

        let graph = GraphWU::<u8>::from_weighted_edges(3, [(0, 1, 200)]);
        assert!(!graph.minimum_spanning_tree().is_spanning());
    }

    #[test]
    fn trivial_graphs() {
        let tree = GraphWU::<i64>::new(0).minimum_spanning_tree();
        assert_eq!(tree.root(), None);
        assert_eq!(tree.weight(), Distance::Finite(0));

        let tree = GraphWU::<i64>::new(1).minimum_spanning_tree();
        assert_eq!(tree.root(), Some(0));
        assert_eq!(tree.weight(), Distance::Finite(0));
        assert_eq!(tree.edges().count(), 0);
    }

    #[test]
    fn matches_kruskal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let mut search = PrimSearch::new();
        let mut tree = Tree::new();

        for n in [2, 10, 40] {
            for m in [n / 2, n, 3 * n] {
                for _ in 0..20 {
                    let graph = GraphWU::<i64>::weighted_gnm(rng, n, m, -50..=50);
                    search.run(&graph, &mut tree);

                    assert_eq!(tree.weight().finite(), kruskal_weight(&graph));

                    if tree.is_spanning() {
                        assert_eq!(tree.edges().count() as NumNodes, n - 1);
                        for Edge(v, u) in tree.edges() {
                            assert!(graph.neighbors_of(v).any(|x| x == u));
                        }
                    }
                }
            }
        }
    }
}
