/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, reachability, cycle detection, out-trees, ordered tree traversals
and the significance ranking. Algorithms are implemented as extension traits with blanket
implementations, so they are available as methods on every suitable graph. If possible, results are
provided as **iterators**, making it easy to consume them lazily.

No algorithm mutates the graph it is invoked on.
*/

mod cycles;
mod out_tree;
mod significance;
mod traversal;
mod tree_order;

use crate::{prelude::*, utils::*};

pub use cycles::*;
pub use out_tree::*;
pub use significance::*;
pub use traversal::*;
pub use tree_order::*;

/// Gives access to the graph an algorithm state (e.g. an iterator) operates on
pub trait WithGraphRef<G> {
    /// Returns the underlying graph
    fn graph_ref(&self) -> &G;
}
