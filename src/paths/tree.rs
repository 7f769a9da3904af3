use crate::utils::assign;

use super::*;

/// A spanning tree given by one predecessor per node, rooted at node `n - 1`.
///
/// Written by [`MinimumSpanningTree`](crate::algo::MinimumSpanningTree). If the graph is
/// disconnected, the total weight is [`Distance::Infinity`] and only the predecessors inside
/// the component of the root are meaningful. A spanning tree whose total does not fit the
/// weight type saturates to [`Distance::Infinity`] or [`Distance::NegInfinity`] but stays
/// spanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<W> {
    pub(crate) prev: Vec<Node>,
    pub(crate) weight: Distance<W>,
    pub(crate) spanning: bool,
}

impl<W: Weight> Default for Tree<W> {
    fn default() -> Self {
        Self {
            prev: Vec::new(),
            weight: Distance::zero(),
            spanning: true,
        }
    }
}

impl<W: Weight> Tree<W> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, n: NumNodes) {
        assign(&mut self.prev, n, INVALID_NODE);
        self.weight = Distance::zero();
        self.spanning = true;
    }

    /// Returns the number of nodes of the graph of the last run
    pub fn number_of_nodes(&self) -> NumNodes {
        self.prev.len() as NumNodes
    }

    /// Returns the root `n - 1`, or `None` for an empty graph
    pub fn root(&self) -> Option<Node> {
        self.number_of_nodes().checked_sub(1)
    }

    /// Returns the total weight of the tree; `Infinity` if the graph is disconnected.
    /// A total outside the range of `W` saturates, see [`Tree::is_spanning`] to tell
    /// `Infinity` by overflow from a disconnected graph.
    pub fn weight(&self) -> Distance<W> {
        self.weight
    }

    /// Returns *true* if the tree spans all nodes
    pub fn is_spanning(&self) -> bool {
        self.spanning
    }

    /// Returns the node `v` is attached to, or `None` for the root (and unreached nodes)
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        optional_node(self.prev[v as usize])
    }

    /// Returns an iterator over the predecessors of all nodes in index order
    pub fn predecessors(&self) -> impl Iterator<Item = Option<Node>> + '_ {
        self.prev.iter().map(|&u| optional_node(u))
    }

    /// Writes the predecessors of all nodes in index order into `sink`
    pub fn predecessors_into<E: Extend<Option<Node>>>(&self, sink: &mut E) {
        sink.extend(self.predecessors());
    }

    /// Returns an iterator over the tree edges `(v, predecessor(v))`
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.prev
            .iter()
            .enumerate()
            .filter_map(|(v, &u)| optional_node(u).map(|u| Edge(v as Node, u)))
    }
}
