/*!
# Result Containers

Algorithms do not allocate their results; they overwrite a caller-owned container in full:

- [`PathVector`]: distances and predecessors from a single source,
- [`PathMatrix`]: distances and predecessors between all pairs of nodes,
- [`Tree`]: predecessors and total weight of a minimum spanning tree.

Containers can be reused for any number of runs, also on graphs of different sizes.

Paths are reconstructed by walking predecessor links backwards, so they are emitted from the
target to the source (both inclusive). Nothing is emitted if the target is unreachable or its
distance is unbounded below.
*/

use crate::{node::optional_node, prelude::*};

mod path_matrix;
mod path_vector;
mod tree;

pub use path_matrix::*;
pub use path_vector::*;
pub use tree::*;

/// Walks the predecessor chain from `target` to `source` and writes it into `sink`.
///
/// The chain is validated before anything is written: it must consist of nodes with finite
/// distance, must not be interrupted and must reach `source` within `n` steps. Returns *true*
/// if the path was written.
fn write_path<W, D, P, E>(
    n: NumNodes,
    source: Node,
    target: Node,
    distance: D,
    predecessor: P,
    sink: &mut E,
) -> bool
where
    W: Weight,
    D: Fn(Node) -> Distance<W>,
    P: Fn(Node) -> Node,
    E: Extend<Node>,
{
    let mut length = 1;
    let mut u = target;
    while u != source {
        if !distance(u).is_finite() || length > n {
            return false;
        }

        u = predecessor(u);
        if u == INVALID_NODE {
            return false;
        }
        length += 1;
    }

    if !distance(source).is_finite() {
        return false;
    }

    let mut u = target;
    sink.extend(std::iter::from_fn(|| {
        if u == INVALID_NODE {
            return None;
        }

        let current = u;
        u = if current == source {
            INVALID_NODE
        } else {
            predecessor(current)
        };
        Some(current)
    }));

    true
}
