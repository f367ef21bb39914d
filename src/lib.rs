/*!
`cgraphs` is a graph data structure & algorithms library designed for directed graphs that are
- **c**apacitated : every arc carries a non-negative integer capacity
- **c**ompact : nodes are numbered `0` to `n - 1`, capacities live in flat per-node storage
- **c**onsumable : flow algorithms mutate the residual capacities of the graph they run on

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
**Arcs** are directed: `(u, v)` and `(v, u)` are distinct and carry independent capacities.
Capacities are unsigned integers behind the [`CapacityNum`](crate::edge::CapacityNum) bound,
defaulting to [`Capacity`](crate::edge::Capacity)` = u64`.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`CapacityMatrix`](crate::repr::CapacityMatrix) : a dense `n * n` capacity matrix,
- [`CapacityList`](crate::repr::CapacityList) : sorted per-node adjacency lists of `(node, capacity)` entries.

Both maintain the residual capacities of a flow network in place and expose the same operation
traits, so every algorithm in this crate runs on either. The dense matrix is the better fit for
small or saturated networks, the adjacency lists for large sparse ones.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, most important and commonly used functionalities should already be implemented via traits on the graph itself, making them usable without configuring the algorithm beforehand.

Flow computations borrow their graph mutably: the borrow checker therefore guarantees that at most
one solve runs on a graph at a time. Callers that need the original capacities afterwards either
clone the graph up front or use the change-remembering solvers in [`algo`] which restore the
graph when dropped.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, arcs, capacities, basic graph operations, and the standard graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), the Edmonds-Karp max-flow solver (`graph.max_flow(s, t)`), and minimum s-t cuts,
- [`gens`] includes random network generators to generate capacitated test graphs at runtime,
- [`utils`] includes helper traits such as the generalized [`Set`](crate::utils::Set) abstraction used by traversals.

In most use-cases, `use cgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your graphs are directed with unsigned integer arc capacities
- You want to work in *Rust*
- You require flow-style functionality (augmenting paths, max flow, min cut) on moderately sized graphs
- Performance is important

In all other cases, it might make sense for you to check out [petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `cgraphs::prelude` includes definitions for nodes, arcs and capacities, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
