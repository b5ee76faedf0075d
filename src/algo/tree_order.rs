/*!
Ordered traversals of rooted trees.

The children of a vertex are its [`AdjacencyList::neighbors_of`] in ascending order. The orders are
meant for trees such as those returned by [`SpanningTree::out_tree`], but they terminate on every
graph: a vertex is only descended into the first time it is encountered, so each vertex reachable
from the root is emitted exactly once.

Trees can be deep, hence all traversals run on an explicit stack instead of recursing.
*/

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}

fn tree_order<G: AdjacencyList>(graph: &G, root: Node, order: Order) -> Vec<Node> {
    let mut result = Vec::new();
    if !graph.contains(root) {
        return result;
    }

    let mut visited = NodeBitSet::with_capacity(graph.capacity());
    visited.insert(root as usize);
    if order == Order::Pre {
        result.push(root);
    }

    // (vertex, remaining children, number of children descended into)
    let mut stack = vec![(root, graph.neighbors_of(root), 0usize)];

    while let Some((u, children, descended)) = stack.last_mut() {
        let u = *u;
        match children.find(|&v| !visited.put(v as usize)) {
            Some(v) => {
                if order == Order::In && *descended == 1 {
                    result.push(u);
                }
                *descended += 1;

                if order == Order::Pre {
                    result.push(v);
                }
                stack.push((v, graph.neighbors_of(v), 0));
            }
            None => {
                if order == Order::Post || (order == Order::In && *descended < 2) {
                    result.push(u);
                }
                stack.pop();
            }
        }
    }

    result
}

/// Pre-, in- and post-order traversals of the tree rooted at a given vertex.
/// All of them return an empty vector if the root is not a vertex.
pub trait TreeOrder: AdjacencyList + Sized {
    /// Returns the vertices in pre-order: a vertex, followed by the subtrees of its children.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let tree: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(1, 0, 1), (1, 2, 1)]);
    /// assert_eq!(tree.pre_order(1), vec![1, 0, 2]);
    /// ```
    fn pre_order(&self, root: Node) -> Vec<Node> {
        tree_order(self, root, Order::Pre)
    }

    /// Returns the vertices in in-order: the subtree of the first child, the vertex itself,
    /// and then the subtrees of all remaining children. A leaf is emitted directly.
    ///
    /// For binary trees this is the classic in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let tree: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(1, 0, 1), (1, 2, 1)]);
    /// assert_eq!(tree.in_order(1), vec![0, 1, 2]);
    /// ```
    fn in_order(&self, root: Node) -> Vec<Node> {
        tree_order(self, root, Order::In)
    }

    /// Returns the vertices in post-order: the subtrees of all children, followed by the vertex.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let tree: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(1, 0, 1), (1, 2, 1)]);
    /// assert_eq!(tree.post_order(1), vec![0, 2, 1]);
    /// ```
    fn post_order(&self, root: Node) -> Vec<Node> {
        tree_order(self, root, Order::Post)
    }
}

impl<G> TreeOrder for G where G: AdjacencyList + Sized {}
