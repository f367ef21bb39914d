/*!
# Network Generators

This module provides traits and builder patterns for constructing random capacitated networks,
mainly as inputs for randomized testing.

Generators follow a builder-style pattern for fluent configuration. The typical usage workflow
is:

1. Create a generator instance (e.g., `UniformNetwork::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m).max_capacity(c)`).
3. Generate arcs via `generate()` or `stream()`.

In addition, the [`RandomNetwork`] trait abstracts the generation of whole graph instances into
reusable constructors for all graph types implementing
[`GraphFromScratch`](crate::ops::GraphFromScratch).
*/

use rand::Rng;

use crate::prelude::*;

mod uniform;

pub use uniform::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the network generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of arcs.
pub trait NumEdgesGen {
    /// Sets the number of arcs in the network generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// Trait for generators that allow setting the average out-degree.
pub trait AverageDegreeGen {
    /// Set the average out-degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random arc generator.
///
/// Types implementing this trait can produce a complete arc list or a lazily-evaluated stream
/// (iterator) of capacitated arcs.
pub trait NetworkGenerator<C>
where
    C: CapacityNum,
{
    /// Generates a list of random capacitated arcs.
    ///
    /// This collects the full result from `stream()` into a `Vec<CapEdge<C>>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapEdge<C>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated arcs.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapEdge<C>>
    where
        R: Rng;
}

/// Trait for building full graph instances from random network models.
///
/// Requires that the implementing type supports construction from a set of capacitated arcs.
/// Provided implementations use the corresponding arc generators under the hood.
pub trait RandomNetwork: CapacitatedAdjacency + Sized {
    /// Creates a random network with `n` nodes, `m` distinct loop-free arcs, and capacities
    /// drawn uniformly from `1..=max_capacity`.
    fn uniform_network<R>(rng: &mut R, n: NumNodes, m: NumEdges, max_capacity: Self::Cap) -> Self
    where
        R: Rng;
}

impl<G> RandomNetwork for G
where
    G: GraphFromScratch,
    G::Cap: rand::distr::uniform::SampleUniform,
{
    fn uniform_network<R>(rng: &mut R, n: NumNodes, m: NumEdges, max_capacity: G::Cap) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            UniformNetwork::new()
                .nodes(n)
                .edges(m)
                .max_capacity(max_capacity)
                .stream(rng),
        )
    }
}
