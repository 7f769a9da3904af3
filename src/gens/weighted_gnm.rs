use super::*;

/// Generator for `m` independent uniform random edges on `n` nodes with uniform random weights.
///
/// Unlike a `G(n,m)` model, edges are drawn with replacement: parallel edges occur, which
/// is exactly what the shortest-path and spanning-tree algorithms need to be tested against.
///
/// # Examples
/// ```
/// use wgraphs::{gens::*, prelude::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let edges = WeightedGnm::new()
///     .nodes(10)
///     .edges(30)
///     .weights(-3i32..=7)
///     .self_loops(false)
///     .generate(rng);
///
/// assert_eq!(edges.len(), 30);
/// assert!(edges.iter().all(|e| !e.is_loop() && (-3..=7).contains(&e.weight())));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGnm<W> {
    n: NumNodes,
    m: NumEdges,
    weights: Option<RangeInclusive<W>>,
    self_loops: bool,
}

impl<W> Default for WeightedGnm<W> {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: None,
            self_loops: true,
        }
    }
}

impl<W: Weight + SampleUniform> WeightedGnm<W> {
    /// Creates a new generator; self-loops are allowed by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive range weights are drawn from
    pub fn set_weights(&mut self, weights: RangeInclusive<W>) {
        self.weights = Some(weights);
    }

    /// Sets the inclusive range weights are drawn from
    pub fn weights(mut self, weights: RangeInclusive<W>) -> Self {
        self.set_weights(weights);
        self
    }

    /// Allows (or forbids) self-loops
    pub fn set_self_loops(&mut self, self_loops: bool) {
        self.self_loops = self_loops;
    }

    /// Allows (or forbids) self-loops
    pub fn self_loops(mut self, self_loops: bool) -> Self {
        self.set_self_loops(self_loops);
        self
    }
}

impl<W> NumNodesGen for WeightedGnm<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> NumEdgesGen for WeightedGnm<W> {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl<W: Weight + SampleUniform> WeightedGraphGenerator<W> for WeightedGnm<W> {
    /// # Panics
    /// - If `n == 0` and `m > 0`
    /// - If no weight range was set or the range is empty
    /// - If self-loops are forbidden and `n == 1` and `m > 0`
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng,
    {
        let weights = self
            .weights
            .as_ref()
            .expect("Weight range of WeightedGnm was not set!");
        let weight_gen = Uniform::new_inclusive(*weights.start(), *weights.end()).unwrap();

        let m = self.m;
        let (n, self_loops) = (self.n, self.self_loops);
        let node_gen = (m > 0).then(|| {
            assert!(self_loops || n > 1, "Self-loops are the only possible edges!");
            node_distribution(n)
        });

        (0..m).filter_map(move |_| {
            let node_gen = node_gen.as_ref()?;
            let u = node_gen.sample(rng);
            let v = loop {
                let v = node_gen.sample(rng);
                if self_loops || u != v {
                    break v;
                }
            };
            Some(WeightedEdge(u, v, weight_gen.sample(rng)))
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
    fn respects_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for (n, m) in [(1, 0), (2, 10), (10, 100), (50, 20)] {
            let edges = WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(0u32..=3)
                .self_loops(false)
                .generate(rng);

            assert_eq!(edges.len(), m as usize);
            assert!(edges.iter().all(|e| e.0 < n && e.1 < n && !e.is_loop()));
            assert!(edges.iter().all(|e| e.weight() <= 3));
        }
    }

    #[test]
    fn random_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = GraphWU::<i64>::weighted_gnm(rng, 20, 60, -10..=10);

        assert_eq!(graph.number_of_nodes(), 20);
        assert_eq!(graph.number_of_edges(), 60);
        assert!(graph.weighted_edges(false).map(|e| e.weight()).all(|w| (-10..=10).contains(&w)));

        let weights = graph.weighted_edges(false).map(|e| e.weight()).unique().count();
        assert!(weights > 10);
    }

    #[test]
    #[should_panic]
    fn missing_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        WeightedGnm::<i32>::new().nodes(3).edges(3).generate(rng);
    }
}
