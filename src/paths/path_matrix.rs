use crate::utils::assign;

use super::*;

/// Distances and predecessors between all pairs of nodes, one row per source.
///
/// Written by [`ShortestPaths::all_pairs_shortest_distances_into`](crate::algo::ShortestPaths::all_pairs_shortest_distances_into).
/// `predecessor(u, v)` is the node before `v` on a shortest path from `u` to `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatrix<W> {
    pub(crate) n: NumNodes,
    pub(crate) dist: Vec<Distance<W>>,
    pub(crate) prev: Vec<Node>,
}

impl<W: Weight> Default for PathMatrix<W> {
    fn default() -> Self {
        Self {
            n: 0,
            dist: Vec::new(),
            prev: Vec::new(),
        }
    }
}

impl<W: Weight> PathMatrix<W> {
    /// Creates an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitializes the container for `n` nodes: all pairs unreachable without predecessor
    pub(crate) fn reset(&mut self, n: NumNodes) {
        self.n = n;
        let cells = (n as usize) * (n as usize);
        self.dist.clear();
        self.dist.resize(cells, Distance::Infinity);
        self.prev.clear();
        self.prev.resize(cells, INVALID_NODE);
    }

    #[inline]
    pub(crate) fn index(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.n && v < self.n);
        (u as usize) * (self.n as usize) + (v as usize)
    }

    /// Returns the number of nodes of the graph of the last run
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the distance from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    pub fn distance(&self, u: Node, v: Node) -> Distance<W> {
        self.dist[self.index(u, v)]
    }

    /// Returns the predecessor of `v` on a shortest path from `u`, or `None` if there is none
    /// (`u == v` without a negative cycle, or `v` unreachable from `u`)
    /// ** Panics if `u >= n || v >= n` **
    pub fn predecessor(&self, u: Node, v: Node) -> Option<Node> {
        optional_node(self.prev[self.index(u, v)])
    }

    /// Copies the distances of row `u` into `out`, ie. the distances from `u` to all nodes
    /// ** Panics if `u >= n` **
    pub fn row_into(&self, u: Node, out: &mut Vec<Distance<W>>) {
        assign(out, 0, Distance::Infinity);
        let begin = self.index(u, 0);
        out.extend_from_slice(&self.dist[begin..begin + self.n as usize]);
    }

    /// Writes the nodes of the path from `u` to `v` into `sink`, starting at `v` and ending at
    /// `u`. Writes nothing if `v` is unreachable from `u` or the distance is unbounded.
    /// Returns *true* if a path was written.
    /// ** Panics if `u >= n || v >= n` **
    pub fn path_into<E: Extend<Node>>(&self, u: Node, v: Node, sink: &mut E) -> bool {
        write_path(
            self.n,
            u,
            v,
            |x| self.dist[self.index(u, x)],
            |x| self.prev[self.index(u, x)],
            sink,
        )
    }

    /// Returns the path from `v` back to `u` (both inclusive); empty if there is no
    /// well-defined path
    /// ** Panics if `u >= n || v >= n` **
    pub fn path(&self, u: Node, v: Node) -> Vec<Node> {
        let mut path = Vec::new();
        self.path_into(u, v, &mut path);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_and_index() {
        let mut matrix = PathMatrix::<i64>::new();
        matrix.reset(3);

        assert_eq!(matrix.number_of_nodes(), 3);
        assert_eq!(matrix.index(2, 1), 7);
        assert!((0..3).all(|u| (0..3).all(|v| matrix.distance(u, v) == Distance::Infinity)));

        matrix.reset(1);
        assert_eq!(matrix.dist.len(), 1);
    }

    #[test]
    fn reconstruct() {
        let mut matrix = PathMatrix::<i64>::new();
        matrix.reset(3);
        for u in 0..3 {
            let idx = matrix.index(u, u);
            matrix.dist[idx] = Distance::Finite(0);
        }
        let idx = matrix.index(0, 1);
        matrix.dist[idx] = Distance::Finite(2);
        matrix.prev[idx] = 0;
        let idx = matrix.index(0, 2);
        matrix.dist[idx] = Distance::Finite(5);
        matrix.prev[idx] = 1;

        assert_eq!(matrix.path(0, 2), vec![2, 1, 0]);
        assert_eq!(matrix.path(1, 1), vec![1]);
        assert!(matrix.path(2, 0).is_empty());

        let mut row = Vec::new();
        matrix.row_into(0, &mut row);
        assert_eq!(
            row,
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(5)]
        );
    }
}
