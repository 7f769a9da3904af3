use crate::utils::assign;

use super::*;

/// Distances and predecessors from a single source node.
///
/// Written by the single-source algorithms
/// ([`ShortestPaths`](crate::algo::ShortestPaths),
/// [`NonNegativeShortestPaths`](crate::algo::NonNegativeShortestPaths),
/// [`EarliestArrival`](crate::algo::EarliestArrival)).
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = GraphWD::<i32>::from_weighted_edges(4, [(0, 1, 1), (1, 2, 2), (2, 3, -5), (0, 3, 10)]);
/// let paths = graph.shortest_distances(0);
///
/// assert_eq!(paths.distance(3), Distance::Finite(-2));
/// assert_eq!(paths.predecessor(3), Some(2));
/// assert_eq!(paths.path(3), vec![3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathVector<W> {
    pub(crate) source: Node,
    pub(crate) dist: Vec<Distance<W>>,
    pub(crate) prev: Vec<Node>,
}

impl<W: Weight> Default for PathVector<W> {
    fn default() -> Self {
        Self {
            source: INVALID_NODE,
            dist: Vec::new(),
            prev: Vec::new(),
        }
    }
}

impl<W: Weight> PathVector<W> {
    /// Creates an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitializes the container for `n` nodes: every node unreachable without predecessor,
    /// except the source at distance `initial`.
    /// ** Panics if `source >= n` **
    pub(crate) fn reset(&mut self, source: Node, n: NumNodes, initial: W) {
        assert!(source < n);
        self.source = source;
        assign(&mut self.dist, n, Distance::Infinity);
        assign(&mut self.prev, n, INVALID_NODE);
        self.dist[source as usize] = Distance::Finite(initial);
    }

    /// Returns the source of the last run
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of nodes of the graph of the last run
    pub fn number_of_nodes(&self) -> NumNodes {
        self.dist.len() as NumNodes
    }

    /// Returns the distance from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Distance<W> {
        self.dist[v as usize]
    }

    /// Returns all distances indexed by node
    pub fn distances(&self) -> &[Distance<W>] {
        &self.dist
    }

    /// Returns the predecessor of `v` on a shortest path, or `None` if `v` is the source or
    /// unreachable
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        optional_node(self.prev[v as usize])
    }

    /// Returns an iterator over the predecessors of all nodes in index order
    pub fn predecessors(&self) -> impl Iterator<Item = Option<Node>> + '_ {
        self.prev.iter().map(|&u| optional_node(u))
    }

    /// Writes the nodes of the path from the source to `target` into `sink`, starting at
    /// `target` and ending at the source. Writes nothing if `target` is unreachable or its
    /// distance is unbounded. Returns *true* if a path was written.
    /// ** Panics if `target >= n` **
    pub fn path_into<E: Extend<Node>>(&self, target: Node, sink: &mut E) -> bool {
        write_path(
            self.number_of_nodes(),
            self.source,
            target,
            |u| self.dist[u as usize],
            |u| self.prev[u as usize],
            sink,
        )
    }

    /// Returns the path from `target` back to the source (both inclusive); empty if there is
    /// no well-defined path
    /// ** Panics if `target >= n` **
    pub fn path(&self, target: Node) -> Vec<Node> {
        let mut path = Vec::new();
        self.path_into(target, &mut path);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> PathVector<i32> {
        let mut paths = PathVector::new();
        paths.reset(0, 5, 0);
        paths.dist[1] = Distance::Finite(1);
        paths.dist[2] = Distance::Finite(3);
        paths.dist[3] = Distance::NegInfinity;
        paths.prev[1] = 0;
        paths.prev[2] = 1;
        paths.prev[3] = 2;
        paths
    }

    #[test]
    fn reset() {
        let mut paths = example();
        paths.reset(2, 3, 7);

        assert_eq!(paths.source(), 2);
        assert_eq!(paths.number_of_nodes(), 3);
        assert_eq!(
            paths.distances(),
            &[Distance::Infinity, Distance::Infinity, Distance::Finite(7)]
        );
        assert!((0..3).all(|v| paths.predecessor(v).is_none()));
    }

    #[test]
    fn reconstruct() {
        let paths = example();
        assert_eq!(paths.path(2), vec![2, 1, 0]);
        assert_eq!(paths.path(0), vec![0]);

        let mut sink = vec![42];
        assert!(paths.path_into(1, &mut sink));
        assert_eq!(sink, vec![42, 1, 0]);
    }

    #[test]
    fn no_path() {
        let paths = example();
        let mut sink = Vec::new();

        assert!(!paths.path_into(3, &mut sink));
        assert!(!paths.path_into(4, &mut sink));
        assert!(sink.is_empty());
    }

    #[test]
    fn refuse_predecessor_cycle() {
        let mut paths = example();
        paths.dist[3] = Distance::Finite(0);
        paths.dist[4] = Distance::Finite(0);
        paths.prev[3] = 4;
        paths.prev[4] = 3;

        assert!(paths.path(3).is_empty());
        assert!(paths.path(4).is_empty());
    }
}
