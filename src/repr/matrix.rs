/*!
# Weighted Adjacency Matrix

[`MatrixDigraph`] stores a weighted directed graph in two dense arrays indexed directly by node id:

- `weights[u]` holds the weight of vertex `u`,
- `matrix[u * capacity + v]` holds the weight of the edge `(u, v)`.

Every slot is an `Option<W>`: presence is tracked independently from the weight, so zero or
default weights are perfectly valid vertex and edge weights.

## Capacity
The graph is created with an *initial capacity* (ids `0..initial_capacity` are addressable). Adding a
vertex with a larger id doubles the capacity until the id fits. Growing never moves a vertex or an
edge to another id, and the capacity never shrinks.

## Complexity
| Operation | Complexity |
|-----------|------------|
| `add_vertex` | `O(1)`, amortized `O(capacity^2)` on growth |
| `remove_vertex` | `O(capacity)` |
| `add_edge` / `remove_edge` / `has_edge` | `O(1)` |
| `out_degree_of` / `in_degree_of` | `O(capacity)` |
| `number_of_vertices` / `number_of_edges` | `O(1)` |
*/

use std::fmt::Debug;

use tracing::{debug, trace};

use super::*;
use crate::testing::test_graph_ops;

/// Initial capacity used by [`MatrixDigraph::new`] and [`Default`]
pub const DEFAULT_CAPACITY: usize = 100;

/// A weighted directed graph backed by a dense adjacency matrix.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = MatrixDigraph::new();
/// graph.add_vertex(0, 10);
/// graph.add_vertex(1, 20);
/// graph.add_edge(0, 1, 0);
///
/// assert!(graph.has_edge(0, 1));
/// assert_eq!(graph.edge_weight(0, 1), Some(&0));
/// assert_eq!(graph.index_of(&20), Some(1));
/// assert_eq!(graph.index_of(&30), None);
/// ```
#[derive(Clone)]
pub struct MatrixDigraph<W> {
    initial_capacity: usize,
    capacity: usize,
    weights: Vec<Option<W>>,
    matrix: Vec<Option<W>>,
    num_vertices: NumNodes,
    num_edges: NumEdges,
}

impl<W> MatrixDigraph<W> {
    /// Creates an empty graph with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        u as usize * self.capacity + v as usize
    }

    /// Doubles the capacity until `u` is addressable.
    /// Vertex weights and edges keep their ids; the new slots are empty.
    ///
    /// ** Panics if the matrix size overflows `usize` or cannot be allocated **
    pub fn ensure_capacity(&mut self, u: Node) {
        let required = u as usize + 1;
        if required <= self.capacity {
            return;
        }

        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .expect("capacity overflows usize");
        }
        let cells = new_capacity
            .checked_mul(new_capacity)
            .expect("adjacency matrix size overflows usize");

        debug!(
            old_capacity = self.capacity,
            new_capacity, "growing adjacency matrix"
        );

        let mut matrix: Vec<Option<W>> = Vec::with_capacity(cells);
        matrix.resize_with(cells, || None);

        let old_capacity = self.capacity;
        for (i, slot) in std::mem::take(&mut self.matrix).into_iter().enumerate() {
            if slot.is_some() {
                let (u, v) = (i / old_capacity, i % old_capacity);
                matrix[u * new_capacity + v] = slot;
            }
        }

        self.matrix = matrix;
        self.weights.resize_with(new_capacity, || None);
        self.capacity = new_capacity;
    }

    /// Returns a mutable reference to the weight of `u` or `None` if `u` does not exist
    pub fn vertex_weight_mut(&mut self, u: Node) -> Option<&mut W> {
        self.weights.get_mut(u as usize)?.as_mut()
    }

    /// Returns a mutable reference to the weight of edge `(u, v)` or `None` if it does not exist
    pub fn edge_weight_mut(&mut self, u: Node, v: Node) -> Option<&mut W> {
        if !(self.contains(u) && self.contains(v)) {
            return None;
        }
        let cell = self.cell(u, v);
        self.matrix[cell].as_mut()
    }
}

impl<W> Default for MatrixDigraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> GraphType for MatrixDigraph<W> {
    type Weight = W;
}

impl<W> GraphNew for MatrixDigraph<W> {
    fn with_capacity(initial_capacity: usize) -> Self {
        assert!(initial_capacity > 0);
        let cells = initial_capacity
            .checked_mul(initial_capacity)
            .expect("adjacency matrix size overflows usize");

        let mut weights = Vec::with_capacity(initial_capacity);
        weights.resize_with(initial_capacity, || None);
        let mut matrix = Vec::with_capacity(cells);
        matrix.resize_with(cells, || None);

        Self {
            initial_capacity,
            capacity: initial_capacity,
            weights,
            matrix,
            num_vertices: 0,
            num_edges: 0,
        }
    }

    fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl<W> GraphVertexOrder for MatrixDigraph<W> {
    fn number_of_vertices(&self) -> NumNodes {
        self.num_vertices
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn contains(&self, u: Node) -> bool {
        self.weights.get(u as usize).is_some_and(Option::is_some)
    }
}

impl<W> GraphEdgeOrder for MatrixDigraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W> VertexWeights for MatrixDigraph<W> {
    fn vertex_weight(&self, u: Node) -> Option<&W> {
        self.weights.get(u as usize)?.as_ref()
    }
}

impl<W> AdjacencyList for MatrixDigraph<W> {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        // Removing a vertex clears its row and column, so a filled cell implies both endpoints exist
        let row: &[Option<W>] = if self.contains(u) {
            let start = self.cell(u, 0);
            &self.matrix[start..start + self.capacity]
        } else {
            &[]
        };

        row.iter()
            .enumerate()
            .filter_map(|(v, w)| w.is_some().then_some(v as Node))
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let sources = if self.contains(u) { self.capacity } else { 0 };

        (0..sources)
            .map(|v| v as Node)
            .filter(move |&v| self.matrix[self.cell(v, u)].is_some())
    }
}

impl<W> AdjacencyTest for MatrixDigraph<W> {
    fn edge_weight(&self, u: Node, v: Node) -> Option<&W> {
        if !(self.contains(u) && self.contains(v)) {
            return None;
        }
        self.matrix[self.cell(u, v)].as_ref()
    }
}

impl<W> GraphVertexEditing for MatrixDigraph<W> {
    fn add_vertex(&mut self, u: Node, weight: W) -> Option<W> {
        self.ensure_capacity(u);

        let previous = self.weights[u as usize].replace(weight);
        if previous.is_none() {
            self.num_vertices += 1;
        }
        previous
    }

    fn remove_vertex(&mut self, u: Node) -> Option<W> {
        let weight = self.weights.get_mut(u as usize)?.take()?;
        self.num_vertices -= 1;

        let mut cleared: NumEdges = 0;
        for v in 0..self.capacity as Node {
            let out_cell = self.cell(u, v);
            cleared += self.matrix[out_cell].take().is_some() as NumEdges;

            let in_cell = self.cell(v, u);
            cleared += self.matrix[in_cell].take().is_some() as NumEdges;
        }

        trace!(vertex = u, cleared, "removed vertex and its incident edges");
        self.num_edges -= cleared;

        Some(weight)
    }
}

impl<W> GraphEdgeEditing for MatrixDigraph<W> {
    fn add_edge(&mut self, u: Node, v: Node, weight: W) -> bool {
        if !(self.contains(u) && self.contains(v)) {
            return false;
        }

        let cell = self.cell(u, v);
        let created = self.matrix[cell].replace(weight).is_none();
        if created {
            self.num_edges += 1;
        }
        created
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Option<W> {
        if !(self.contains(u) && self.contains(v)) {
            return None;
        }

        let cell = self.cell(u, v);
        let weight = self.matrix[cell].take()?;
        self.num_edges -= 1;
        Some(weight)
    }
}

impl<W: Debug> Debug for MatrixDigraph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixDigraph")
            .field("capacity", &self.capacity)
            .field(
                "vertices",
                &self.weighted_vertices().collect::<Vec<_>>(),
            )
            .field("edges", &self.weighted_edges().collect::<Vec<_>>())
            .finish()
    }
}

impl<W: PartialEq> PartialEq for MatrixDigraph<W> {
    /// Two graphs are equal if they contain the same weighted vertices and edges,
    /// regardless of their capacities
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices == other.num_vertices
            && self.num_edges == other.num_edges
            && self.weighted_vertices().eq(other.weighted_vertices())
            && self.weighted_edges().eq(other.weighted_edges())
    }
}

impl<W: Eq> Eq for MatrixDigraph<W> {}

// ---------- Testing ----------

test_graph_ops!(
    test_matrix_digraph,
    MatrixDigraph<u32>,
    (GraphVertexEditing, GraphEdgeEditing, AdjacencyList, Traversal)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn triangle() -> MatrixDigraph<u32> {
        MatrixDigraph::from_parts(
            [(0, 10), (1, 20), (2, 30)],
            [(0, 1, 1), (1, 2, 1), (0, 2, 1)],
        )
    }

    #[test]
    fn example_queries() {
        let graph = triangle();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.out_degree_of(0), 2);
        assert_eq!(graph.in_degree_of(2), 2);
        assert_eq!(graph.total_degree_of(1), 2);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2]);
        assert_eq!(
            graph.weighted_vertices().map(|v| v.cloned()).collect_vec(),
            vec![Vertex::new(0, 10), Vertex::new(1, 20), Vertex::new(2, 30)]
        );
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));

        assert_eq!(graph.out_degrees().collect_vec(), vec![2, 1, 0]);
        assert_eq!(graph.in_degrees().collect_vec(), vec![0, 1, 2]);
        assert_eq!(graph.total_degrees().collect_vec(), vec![2, 2, 2]);
        assert_eq!(graph.vertex(1), Some(Vertex::new(1, &20)));
        assert_eq!(graph.vertex(3), None);
        assert_eq!(
            graph.weighted_edges().map(|e| e.cloned()).collect_vec(),
            vec![Edge(0, 1).with_weight(1), Edge(0, 2).with_weight(1), Edge(1, 2).with_weight(1)]
        );
    }

    #[test]
    fn absent_vertices_are_no_ops() {
        let mut graph = triangle();

        assert!(!graph.contains(7));
        assert!(!graph.contains(Node::MAX));
        assert_eq!(graph.out_degree_of(7), 0);
        assert_eq!(graph.in_degree_of(7), 0);
        assert_eq!(graph.neighbors_of(7).count(), 0);
        assert!(graph.second_order_neighbors_of(7).is_empty());

        assert!(!graph.add_edge(0, 7, 5));
        assert_eq!(graph.remove_edge(7, 0), None);
        assert_eq!(graph.remove_vertex(7), None);
        assert_eq!(graph.number_of_edges(), 3);

        assert_eq!(graph.try_add_edge(0, 7, 5), Err(GraphError::MissingVertex(7)));
        assert_eq!(graph.try_remove_edge(2, 0), Err(GraphError::MissingEdge(Edge(2, 0))));
        assert_eq!(graph.try_remove_vertex(9), Err(GraphError::MissingVertex(9)));
        assert_eq!(graph.try_remove_edge(0, 1), Ok(1));
    }

    #[test]
    fn zero_weights_are_present() {
        let mut graph = MatrixDigraph::new();
        graph.add_vertex(0, 0);
        graph.add_vertex(1, 0);
        assert!(graph.add_edge(0, 1, 0));

        assert!(graph.contains(0));
        assert!(graph.has_edge(0, 1));
        assert_eq!(graph.index_of(&0), Some(0));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn index_of_reports_misses() {
        let mut graph = MatrixDigraph::new();
        graph.add_vertex(0, 'a');
        graph.add_vertex(5, 'b');
        graph.add_vertex(3, 'b');

        assert_eq!(graph.index_of(&'a'), Some(0));
        assert_eq!(graph.index_of(&'b'), Some(3));
        assert_eq!(graph.index_of(&'c'), None);
    }

    #[test]
    fn readding_an_edge_overwrites_its_weight() {
        let mut graph = triangle();

        assert!(!graph.add_edge(0, 1, 9));
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edge_weight(0, 1), Some(&9));

        *graph.edge_weight_mut(0, 1).unwrap() = 4;
        assert_eq!(graph.remove_edge(0, 1), Some(4));
        assert_eq!(graph.remove_edge(0, 1), None);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn add_vertex_overwrites() {
        let mut graph = triangle();

        assert_eq!(graph.add_vertex(1, 99), Some(20));
        assert_eq!(graph.vertex_weight(1), Some(&99));
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);

        *graph.vertex_weight_mut(2).unwrap() += 1;
        assert_eq!(graph.vertex_weight(2), Some(&31));
    }

    #[test]
    fn self_loops() {
        let mut graph = triangle();
        assert!(graph.add_edge(1, 1, 7));

        assert!(graph.has_self_loop(1));
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.out_degree_of(1), 2);
        assert_eq!(graph.in_degree_of(1), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2]);
        assert_eq!(graph.out_neighbors_of(1).collect_vec(), vec![1, 2]);

        assert_eq!(graph.remove_vertex(1), Some(20));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn removing_a_vertex_clears_incident_edges() {
        let mut graph = triangle();
        graph.add_edge(2, 1, 5);

        assert_eq!(graph.remove_vertex(1), Some(20));
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 2)]);

        // reusing the id must not resurrect the old edges
        graph.add_vertex(1, 21);
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.total_degree_of(1), 0);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn growth_preserves_content() {
        let mut graph = MatrixDigraph::with_capacity(2);
        graph.add_vertex(0, 1);
        graph.add_vertex(1, 2);
        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 0, 4);
        graph.add_edge(1, 1, 5);

        graph.add_vertex(9, 6);
        assert_eq!(graph.capacity(), 16);
        assert_eq!(graph.initial_capacity(), 2);

        assert_eq!(graph.vertex_weight(0), Some(&1));
        assert_eq!(graph.vertex_weight(1), Some(&2));
        assert_eq!(graph.edge_weight(0, 1), Some(&3));
        assert_eq!(graph.edge_weight(1, 0), Some(&4));
        assert_eq!(graph.edge_weight(1, 1), Some(&5));
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 9]);

        assert!(graph.add_edge(9, 0, 7));
        assert_eq!(graph.in_neighbors_of(0).collect_vec(), vec![1, 9]);
    }

    #[test]
    fn capacity_is_initial_times_power_of_two() {
        let mut graph: MatrixDigraph<u8> = MatrixDigraph::with_capacity(3);
        for u in [2, 3, 5, 6, 30, 100] {
            graph.add_vertex(u, 1);
            let ratio = graph.capacity() / graph.initial_capacity();
            assert_eq!(graph.capacity() % graph.initial_capacity(), 0);
            assert!(ratio.is_power_of_two());
            assert!(graph.capacity() > u as usize);
        }

        // capacity never shrinks
        let capacity = graph.capacity();
        graph.remove_vertex(100);
        assert_eq!(graph.capacity(), capacity);
    }

    #[test]
    fn equality_ignores_capacity() {
        let graph = triangle();
        let mut other: MatrixDigraph<u32> = MatrixDigraph::with_capacity(1);
        other.add_vertices([(2, 30), (1, 20), (0, 10)]);
        other.add_edges([(0, 2, 1), (1, 2, 1), (0, 1, 1)]);

        assert_eq!(graph, other);
        other.add_edge(2, 0, 1);
        assert_ne!(graph, other);
    }

    #[test]
    fn empty_graph() {
        let graph: MatrixDigraph<i64> = MatrixDigraph::default();
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    #[should_panic]
    fn zero_capacity_panics() {
        let _ = MatrixDigraph::<u8>::with_capacity(0);
    }
}
