/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` in the adjacency lists and result
containers and (2) directly manipulate node values without abstracting over them.

Nodes of a graph with `n` nodes are exactly `0..n`; there is no payload attached to them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Result containers use it internally as the "no predecessor" marker and expose it as `None`.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Converts a stored predecessor into its public representation
#[inline]
pub(crate) fn optional_node(u: Node) -> Option<Node> {
    (u != INVALID_NODE).then_some(u)
}
