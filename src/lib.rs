/*!
`wgraphs` is a graph data structure & algorithms library for **w**eighted directed graphs whose
vertices are addressed directly by their id.

# Representation

We represent **vertex ids** as `u32` ([`Node`]). Ids need not be contiguous: a graph may contain the
vertices `{0, 3, 7}` only. Both vertices and edges carry a weight of a generic type `W`; a
[`Vertex`] pairs an id with its weight and an [`Edge`] is a simple tuple-struct `Edge(Node, Node)`
directed from the first to the second entry.

Presence is tracked independently from the weight, so *every* value of `W` (including `0` or
`W::default()`) is a legal weight.

See the [`repr`] module for the storage backend [`MatrixDigraph`](crate::repr::MatrixDigraph), a
dense adjacency matrix that grows by doubling when a larger id is added.

# Design

Functionality is split into small traits (see [`ops`]) so that algorithms only require what they
use. Algorithms are implemented as extension traits with blanket implementations, making them usable
as methods directly on the graph.

Invalid input on the primary API (absent ids, edges between absent vertices) results in documented
no-ops, `false`, `0` or `None`. Checked `try_*` variants report a [`GraphError`] instead.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for ids, vertices, edges, errors, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start)`), reachability, cycle detection, out-trees, tree orders and the significance ranking,
- [`utils`] includes helper traits such as the [`Set`](crate::utils::Set) abstraction used for visited-sets.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut graph = MatrixDigraph::new();
graph.add_vertices([(0, 10), (1, 20), (2, 30)]);
graph.add_edges([(0, 1, 1), (1, 2, 1), (0, 2, 5)]);

assert!(graph.is_acyclic());
assert_eq!(graph.depth_first(0), vec![0, 2, 1]);
assert_eq!(graph.significance_sorting(), vec![0, 1, 2]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for ids, vertices, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
