/*!
# Random Instance Generators

This module provides builder-style generators for random graph instances. They are used
throughout the test-suite but are equally meant for benchmarking and experimentation.

Generators are configured with chained setters and then produce their edges either as a
complete list via `generate()` or lazily via `stream()`:

1. Create a generator instance (e.g., `WeightedGnm::new()`).
2. Set parameters (e.g., `.nodes(n).edges(m).weights(-5..=10)`).
3. Generate edges via `generate(rng)` or `stream(rng)`.

Supported models:
- [`WeightedGnm`]: `m` independent uniform edges with uniform weights (parallel edges allowed),
- [`RandomWalk`]: the edges of a random walk starting at node `0`, ie. an instance that has an
  Eulerian walk by construction.

The [`RandomWeightedGraph`] trait builds whole weighted graph instances of any representation
implementing [`WeightedGraphFromScratch`].
*/

use std::ops::RangeInclusive;

use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

mod walk;
mod weighted_gnm;

pub use walk::*;
pub use weighted_gnm::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// A configurable random generator of unweighted edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over the generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// A configurable random generator of weighted edges.
pub trait WeightedGraphGenerator<W> {
    /// Generates a list of random weighted edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over the generated weighted edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng;
}

/// Trait for building full weighted graph instances from random models.
pub trait RandomWeightedGraph: WeightedGraphFromScratch + GraphType
where
    Self::Weight: SampleUniform,
{
    /// Creates a graph with `n` nodes and `m` uniformly random edges whose weights are drawn
    /// uniformly from `weights`. Parallel edges and self-loops may occur.
    fn weighted_gnm<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng,
    {
        Self::from_weighted_edges(
            n,
            WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(weights)
                .stream(rng),
        )
    }

    /// Like [`RandomWeightedGraph::weighted_gnm`] but without self-loops
    fn weighted_gnm_no_loops<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng,
    {
        Self::from_weighted_edges(
            n,
            WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(weights)
                .self_loops(false)
                .stream(rng),
        )
    }
}

impl<G> RandomWeightedGraph for G
where
    G: WeightedGraphFromScratch + GraphType,
    G::Weight: SampleUniform,
{
}

/// Uniform distribution over the nodes `0..n`
/// ** Panics if `n == 0` **
fn node_distribution(n: NumNodes) -> Uniform<Node> {
    assert!(n > 0, "At least one node must be generated!");
    Uniform::new(0 as Node, n).unwrap()
}
