/*!
# Graph Algorithms

This module provides the **flow-oriented algorithms** built on top of the capacity
representations in this crate. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use cgraphs::algo::*;
```
and gain access to traversal, maximum-flow, and minimum-cut routines.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod max_flow;
mod min_cut;
mod traversal;

use crate::{prelude::*, utils::*};

pub use max_flow::*;
pub use min_cut::*;
pub use traversal::*;
