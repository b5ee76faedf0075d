/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- Abstractions (`TraversalSearch`, `TraversalTree`) that turn traversals into useful
  structures such as parent arrays or depth arrays.
- A high-level `Traversal` trait that exposes traversal algorithms and reachability
  directly as methods on graph data structures.

Traversals follow out-edges and never report a vertex as its own successor, so self-loops are
irrelevant to them. Starting a traversal at an id that is not part of the graph yields nothing.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both tuple entries to the same
/// node value. Traversals never follow self-loops, so this is unambiguous.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**, nodes are marked when enqueued
/// - [`Vec`] -> stack semantics -> **DFS**, nodes are marked when popped
pub trait NodeSequencer<T> {
    /// If *true*, a node is marked as visited when it is popped and stale entries of already
    /// visited nodes are skipped; otherwise it is marked when pushed and pushed at most once.
    const MARKS_ON_POP: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Creates a new empty sequencer.
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const MARKS_ON_POP: bool = false;

    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const MARKS_ON_POP: bool = true;

    fn init(u: T) -> Self {
        vec![u]
    }
    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit,
/// a set of visited nodes, and optionally records predecessor information.
/// Parameterized by the container type for the frontier and the type of
/// items yielded (either `Node` or `PredecessorOfNode`).
///
/// Every vertex reachable from the start is yielded exactly once, the start first.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// Type alias for a **breadth-first search** iterator using a queue (`VecDeque`).
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// Type alias for a **depth-first search** iterator using a stack (`Vec`).
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first (level) order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first preorder from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Returns the graph being traversed.
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let popped = self.sequencer.pop()?;
            let u = popped.item();

            // stale stack entry of a node that was reached on another path first
            if S::MARKS_ON_POP && self.visited.insert(u) {
                continue;
            }

            if self.stop_at == Some(u) {
                while self.sequencer.pop().is_some() {} // drop all
            } else {
                for v in self.graph.neighbors_of(u) {
                    let unseen = if S::MARKS_ON_POP {
                        !self.visited.contains(&v)
                    } else {
                        !self.visited.insert(v)
                    };

                    if unseen {
                        self.sequencer.push(I::new_with_predecessor(u, v));
                    }
                }
            }

            return Some(popped);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.sequencer.cardinality();
        let lower = if S::MARKS_ON_POP {
            // the stack may consist of stale entries only
            0
        } else if self.stop_at.is_some() {
            pending.min(1)
        } else {
            pending
        };
        (lower, Some(self.graph.number_of_vertices() as usize))
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` is not a vertex of `graph`, the iterator is empty.
    ///
    /// - `graph`: The graph to traverse.
    /// - `start`: The starting node.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = V::from_total_used_capacity(
            graph.capacity(),
            graph.number_of_vertices() as usize,
        );

        let sequencer = if graph.contains(start) {
            if !S::MARKS_ON_POP {
                visited.insert(start);
            }
            S::init(I::new_without_predecessor(start))
        } else {
            S::empty()
        };

        Self {
            graph,
            visited,
            sequencer,
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
///
/// Arrays are indexed by node id and sized by the capacity of the graph.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    ///
    /// - For each visited node `v`, `tree[v]` is set to its predecessor.
    /// - Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `tree.len()` must be at least `graph.capacity()`.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.capacity()` where
    /// each node is initially set to be its own parent.
    /// Then fills in the traversal tree structure using `parent_array_into`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> = MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(0, 1, 1), (1, 2, 1)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents[..3], [0, 0, 1]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<Node> = (0..self.graph_ref().capacity() as Node).collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (root depth = 0).
    ///
    /// - For each visited node `v`, `depths[v]` is set accordingly.
    /// - Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `depths.len()` must be at least `graph.capacity()`.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Constructs a fresh depth array of size `graph.capacity()` initialized with 0.
    /// Then fills in the traversal tree depths using `depths_into`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> = MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(0, 1, 1), (1, 2, 1)]);
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths[..3], [0, 1, 2]);
    /// ```
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().capacity()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Provides convenient traversal methods (BFS, DFS, reachability)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> = MatrixDigraph::from_parts([(0, 1), (1, 1)], [(0, 1, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) preorder**.
    ///
    /// Neighbors are pushed onto the stack in ascending order, hence the largest one is
    /// explored first.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> = MatrixDigraph::from_parts([(0, 1), (1, 1)], [(0, 1, 1)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns the vertices reachable from `start` in depth-first preorder.
    /// Empty if `start` is not a vertex.
    fn depth_first(&self, start: Node) -> Vec<Node> {
        self.dfs(start).collect()
    }

    /// Returns the vertices reachable from `start` in breadth-first order.
    /// Empty if `start` is not a vertex.
    fn breadth_first(&self, start: Node) -> Vec<Node> {
        self.bfs(start).collect()
    }

    /// Returns `true` if there is a directed path from `u` to `v`.
    ///
    /// - Returns `false` if `u` or `v` is not a vertex.
    /// - Every vertex reaches itself via the path of length zero, so `reachable(u, u)` is `true`
    ///   for every vertex `u`, with or without a cycle through `u`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: MatrixDigraph<u8> = MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(0, 1, 1), (1, 2, 1)]);
    /// assert!(g.reachable(0, 2));
    /// assert!(!g.reachable(2, 0));
    /// assert!(g.reachable(2, 2));
    /// assert!(!g.reachable(3, 3));
    /// ```
    fn reachable(&self, u: Node, v: Node) -> bool {
        if !(self.contains(u) && self.contains(v)) {
            return false;
        }
        u == v || self.bfs(u).stop_at(v).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
