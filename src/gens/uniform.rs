use fxhash::FxHashSet;
use rand::distr::uniform::SampleUniform;

use super::*;

/// Configuration type used by [`UniformNetwork`] to determine how the arc count should be
/// parameterized.
///
/// This can be either:
/// - a fixed number of arcs, or
/// - an average out-degree, which is converted into an arc count during generation.
#[derive(Debug, Copy, Clone, Default)]
enum UniformType {
    /// No value has been set yet; using this will panic at runtime.
    #[default]
    NotSet,
    /// Fixed number of arcs `m`.
    Edges(NumEdges),
    /// Average out-degree `d`, to be converted to `m = d*n`.
    AvgDeg(f64),
}

/// Generator for uniform random capacitated networks with `n` nodes and `m` arcs.
///
/// Arcs are sampled uniformly **without replacement** from the `n * (n - 1)` loop-free node
/// pairs, so the result never contains duplicates or self-loops. Each arc receives an
/// independent capacity drawn uniformly from `1..=max_capacity`.
///
/// The generator can be parameterized via:
/// - `.nodes(n)` — total number of nodes
/// - `.edges(m)` or `.avg_deg(d)` — total number of arcs or average out-degree
/// - `.max_capacity(c)` — largest capacity to draw (defaults to 1, i.e. a unit network)
#[derive(Debug, Copy, Clone)]
pub struct UniformNetwork<C = Capacity> {
    n: u64,
    m: UniformType,
    max_capacity: C,
}

impl<C> Default for UniformNetwork<C>
where
    C: CapacityNum,
{
    fn default() -> Self {
        Self {
            n: 0,
            m: UniformType::default(),
            max_capacity: C::one(),
        }
    }
}

impl<C> UniformNetwork<C>
where
    C: CapacityNum,
{
    /// Creates a new empty uniform network generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the largest capacity to draw
    pub fn max_capacity(mut self, max_capacity: C) -> Self {
        assert!(max_capacity > C::zero());
        self.max_capacity = max_capacity;
        self
    }
}

impl<C> NumNodesGen for UniformNetwork<C>
where
    C: CapacityNum,
{
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl<C> NumEdgesGen for UniformNetwork<C>
where
    C: CapacityNum,
{
    /// Updates `m` directly
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = UniformType::Edges(m);
        self
    }
}

impl<C> AverageDegreeGen for UniformNetwork<C>
where
    C: CapacityNum,
{
    /// Updates `m` such that `m = d * n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.m = UniformType::AvgDeg(deg);
        self
    }
}

impl<C> NetworkGenerator<C> for UniformNetwork<C>
where
    C: CapacityNum + SampleUniform,
{
    /// Creates a streaming generator over uniformly random distinct capacitated arcs.
    ///
    /// Sampling without replacement uses rejection against a hash set of already drawn arc
    /// indices, which stays cheap as long as `m` is well below `n * (n - 1)`.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If neither `edges(m)` nor `avg_deg(d)` was set
    /// - If `m > n * (n - 1)`, which would violate sampling without replacement
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapEdge<C>>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let m = match self.m {
            UniformType::NotSet => panic!("Number of arcs of UniformNetwork was not set!"),
            UniformType::Edges(m) => m as u64,
            UniformType::AvgDeg(d) => (self.n as f64 * d) as u64,
        };

        // The maximum possible value an arc can be mapped to
        let end = self.n * (self.n - 1);
        assert!(m <= end, "Cannot place {m} distinct arcs on {} nodes!", self.n);

        let n = self.n;
        let max_capacity = self.max_capacity;
        let mut seen = FxHashSet::default();
        seen.reserve(m as usize);

        (0..m).map(move |_| {
            let x = loop {
                let x = rng.random_range(0..end);
                if seen.insert(x) {
                    break x;
                }
            };

            let Edge(u, v) = Edge::from_u64_no_loops(x, n);
            CapEdge(u, v, rng.random_range(C::one()..=max_capacity))
        })
    }
}
