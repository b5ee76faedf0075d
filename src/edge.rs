use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints and is always directed from `.0` to `.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight<W>(self, weight: W) -> WeightedEdge<W> {
        WeightedEdge {
            from: self.0,
            to: self.1,
            weight,
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge `from -> to` carrying a weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<W> {
    pub from: Node,
    pub to: Node,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.from, self.to)
    }
}

impl<W: Clone> WeightedEdge<&W> {
    /// Clones the borrowed weight into an owned edge
    pub fn cloned(&self) -> WeightedEdge<W> {
        self.edge().with_weight(self.weight.clone())
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})[{:?}]", self.from, self.to, self.weight)
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        Edge(value.0, value.1).with_weight(value.2)
    }
}

impl<W> From<WeightedEdge<W>> for Edge {
    fn from(value: WeightedEdge<W>) -> Self {
        value.edge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_basics() {
        let e: Edge = (3, 5).into();
        assert_eq!(e, Edge::from(&(3, 5)));
        assert_eq!(e.reverse(), Edge(5, 3));
        assert!(!e.is_loop());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{e}"), "(3,5)");
    }

    #[test]
    fn weighted_edges() {
        let e: WeightedEdge<f64> = (1, 2, 0.5).into();
        assert_eq!(e, Edge(1, 2).with_weight(0.5));
        assert_eq!(Edge::from(e), Edge(1, 2));
        assert_eq!(e.edge().with_weight(&e.weight).cloned(), e);
        assert_eq!(format!("{e:?}"), "(1,2)[0.5]");
    }
}
