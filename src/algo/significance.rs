/*!
Ranking of vertices by significance.

The significance of a vertex is its total degree, i.e. the number of incident in- and out-edges.
*/

use super::*;
use itertools::Itertools;
use std::cmp::Reverse;

/// Ranking of vertices by their total degree
pub trait Significance: AdjacencyList + Sized {
    /// Returns the significance of `u`, which is `0` if `u` is not a vertex
    fn significance_of(&self, u: Node) -> NumNodes {
        self.total_degree_of(u)
    }

    /// Returns all vertices sorted by descending significance. Ties are broken by ascending id,
    /// so the order is fully deterministic.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1), (3, 1)], [(0, 2, 1), (1, 2, 1), (3, 0, 1)]);
    /// assert_eq!(g.significance_sorting(), vec![0, 2, 1, 3]);
    /// ```
    fn significance_sorting(&self) -> Vec<Node> {
        self.vertices()
            .sorted_by_key(|&u| (Reverse(self.significance_of(u)), u))
            .collect()
    }
}

impl<G> Significance for G where G: AdjacencyList + Sized {}
