use super::*;

/// Generator for the edges of a random walk of a given length starting at node `0`.
///
/// Every step moves to a uniformly random node (possibly staying put). If the walk is
/// `closed`, the last step returns to node `0`. The resulting directed multi-graph has an
/// Eulerian circuit (closed) or an Eulerian path from node `0` (open), and the edges are
/// emitted in walk order.
///
/// # Examples
/// ```
/// use wgraphs::{gens::*, prelude::*, algo::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(2);
/// let edges = RandomWalk::new().nodes(8).length(25).closed(true).generate(rng);
/// let graph = GraphD::from_edges(8, edges);
///
/// assert_eq!(graph.eulerian_walk().len(), 26);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomWalk {
    n: NumNodes,
    length: NumEdges,
    closed: bool,
}

impl RandomWalk {
    /// Creates a new generator of an open walk of length `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of steps (edges) of the walk
    pub fn set_length(&mut self, length: NumEdges) {
        self.length = length;
    }

    /// Sets the number of steps (edges) of the walk
    pub fn length(mut self, length: NumEdges) -> Self {
        self.set_length(length);
        self
    }

    /// If set, the walk ends at node `0`
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// If set, the walk ends at node `0`
    pub fn closed(mut self, closed: bool) -> Self {
        self.set_closed(closed);
        self
    }
}

impl NumNodesGen for RandomWalk {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomWalk {
    /// # Panics
    /// Panics if `n == 0`
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let node_gen = node_distribution(self.n);
        let (length, closed) = (self.length, self.closed);

        let mut u = 0;
        (0..length).map(move |step| {
            let v = if closed && step + 1 == length {
                0
            } else {
                node_gen.sample(rng)
            };
            let edge = Edge(u, v);
            u = v;
            edge
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn consecutive_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for closed in [false, true] {
            let edges = RandomWalk::new()
                .nodes(6)
                .length(40)
                .closed(closed)
                .generate(rng);

            assert_eq!(edges.len(), 40);
            assert_eq!(edges[0].0, 0);
            assert!(edges.iter().tuple_windows().all(|(a, b)| a.1 == b.0));
            if closed {
                assert_eq!(edges[39].1, 0);
            }
        }
    }

    #[test]
    fn empty_walk() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        assert!(RandomWalk::new().nodes(1).closed(true).generate(rng).is_empty());
    }
}
