/*!
# Node Representation

We choose `Node = u32` as graphs stored in a dense adjacency matrix never come close to `2^32` nodes.
Node ids are assigned by the caller and need not be contiguous: a graph may contain node `7` without
containing nodes `0..7`.

A [`Vertex`] couples a node id with the weight (payload) stored for it.
*/

use std::fmt::{Debug, Display};

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer addressable by the graph's capacity
pub type Node = u32;

/// Number of nodes in a graph
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = FixedBitSet;

/// A node together with its weight.
///
/// Graphs hand out `Vertex<&W>` when borrowing and `Vertex<W>` when the weight is owned.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex<W> {
    pub id: Node,
    pub weight: W,
}

impl<W> Vertex<W> {
    /// Creates a new vertex with the given id and weight
    pub const fn new(id: Node, weight: W) -> Self {
        Self { id, weight }
    }

    /// Borrows the weight, yielding a `Vertex<&W>`
    pub fn as_ref(&self) -> Vertex<&W> {
        Vertex::new(self.id, &self.weight)
    }
}

impl<W: Clone> Vertex<&W> {
    /// Clones the borrowed weight into an owned vertex
    pub fn cloned(&self) -> Vertex<W> {
        Vertex::new(self.id, self.weight.clone())
    }
}

impl<W: Display> Display for Vertex<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.id, self.weight)
    }
}

impl<W: Debug> Debug for Vertex<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{:?}]", self.id, self.weight)
    }
}

impl<W> From<(Node, W)> for Vertex<W> {
    fn from(value: (Node, W)) -> Self {
        Vertex::new(value.0, value.1)
    }
}

impl<W> From<Vertex<W>> for (Node, W) {
    fn from(value: Vertex<W>) -> Self {
        (value.id, value.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_conversions() {
        let v: Vertex<i32> = (3, 0).into();
        assert_eq!(v, Vertex::new(3, 0));
        assert_eq!(v.as_ref().cloned(), v);
        assert_eq!(<(Node, i32)>::from(v), (3, 0));
        assert_eq!(format!("{v}"), "3[0]");
        assert_eq!(format!("{:?}", Vertex::new(1, "a")), "1[\"a\"]");
    }
}
