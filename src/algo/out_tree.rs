/*!
Breadth-first out-trees.

The out-tree of a root `r` is the spanning tree of all vertices reachable from `r` that a
breadth-first search discovers: every vertex is attached by the single edge over which it was
discovered first. Vertices and tree edges keep their original weights, all other edges are dropped.
*/

use super::*;
use tracing::debug;

/// Construction of BFS spanning trees as standalone graphs
pub trait SpanningTree:
    Traversal
    + GraphNew
    + GraphEdgeOrder
    + VertexWeights
    + AdjacencyTest
    + GraphVertexEditing
    + GraphEdgeEditing
where
    Self::Weight: Clone,
{
    /// Returns a new graph (same type and initial capacity as `self`) containing the BFS out-tree
    /// rooted at `root`. If `root` is not a vertex, the result is empty.
    ///
    /// For `k` reachable vertices the tree has exactly `k - 1` edges, and every vertex other
    /// than the root has in-degree one.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 2), (2, 3)], [(0, 1, 4), (1, 2, 5), (0, 2, 6)]);
    ///
    /// let tree = g.out_tree(0);
    /// assert_eq!(tree.number_of_vertices(), 3);
    /// assert_eq!(tree.number_of_edges(), 2);
    /// assert_eq!(tree.edge_weight(0, 2), Some(&6));
    /// assert!(!tree.has_edge(1, 2));
    /// ```
    fn out_tree(&self, root: Node) -> Self {
        let mut tree = self.new_like();

        for (pred, u) in self.bfs_with_predecessor(root).map(|x| x.predecessor_with_item()) {
            if let Some(weight) = self.vertex_weight(u) {
                tree.add_vertex(u, weight.clone());
            }

            // the predecessor was discovered earlier and is already part of the tree
            if let Some((p, weight)) = pred.and_then(|p| Some((p, self.edge_weight(p, u)?))) {
                tree.add_edge(p, u, weight.clone());
            }
        }

        debug!(
            root,
            vertices = tree.number_of_vertices(),
            edges = tree.number_of_edges(),
            "built out-tree"
        );

        tree
    }
}

impl<G> SpanningTree for G
where
    G: Traversal
        + GraphNew
        + GraphEdgeOrder
        + VertexWeights
        + AdjacencyTest
        + GraphVertexEditing
        + GraphEdgeEditing,
    G::Weight: Clone,
{
}
