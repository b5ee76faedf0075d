/*!
# Graph Operations

Traits describing what a weighted directed graph can do, split by concern so that algorithms only
require what they actually use:

- [`GraphVertexOrder`] / [`GraphEdgeOrder`]: sizes, vertex existence and listing,
- [`VertexWeights`]: access to vertex payloads,
- [`AdjacencyList`]: neighborhoods and degrees,
- [`AdjacencyTest`]: edge existence and edge weights,
- [`GraphNew`], [`GraphVertexEditing`], [`GraphEdgeEditing`], [`GraphFromScratch`]: construction and mutation.

All queries treat ids that are not part of the graph as *absent*: they return `false`, `0`, `None` or
an empty iterator instead of panicking.
*/

use itertools::Itertools;

use crate::{error::*, *};

/// Associates a graph with the type of its vertex and edge weights
pub trait GraphType {
    type Weight;
}

/// Provides getters pertaining to the vertices of a graph
pub trait GraphVertexOrder {
    /// Returns the number of vertices currently in the graph
    fn number_of_vertices(&self) -> NumNodes;

    /// Returns the number of addressable ids, i.e. every vertex id is smaller than this value.
    /// Dense per-vertex data structures should be sized by this value rather than the number of
    /// vertices, as ids are sparse.
    fn capacity(&self) -> usize;

    /// Returns *true* if the vertex `u` exists. Ids beyond the capacity are simply absent.
    fn contains(&self, u: Node) -> bool;

    /// Returns an iterator over all existing vertices in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.capacity())
            .map(|u| u as Node)
            .filter(move |&u| self.contains(u))
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the weights stored with each vertex
pub trait VertexWeights: GraphType + GraphVertexOrder {
    /// Returns the weight of `u` or `None` if `u` does not exist
    fn vertex_weight(&self, u: Node) -> Option<&Self::Weight>;

    /// Returns `u` together with its weight or `None` if `u` does not exist
    fn vertex(&self, u: Node) -> Option<Vertex<&Self::Weight>> {
        self.vertex_weight(u).map(|w| Vertex::new(u, w))
    }

    /// Returns all existing vertices with their weights in ascending order of id
    fn weighted_vertices(&self) -> impl Iterator<Item = Vertex<&Self::Weight>> + '_ {
        self.vertices().filter_map(move |u| self.vertex(u))
    }

    /// Returns the smallest id whose weight equals `weight`, or `None` if there is no such vertex
    fn index_of(&self, weight: &Self::Weight) -> Option<Node>
    where
        Self::Weight: PartialEq,
    {
        self.weighted_vertices()
            .find(|v| v.weight == weight)
            .map(|v| v.id)
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(move |u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & degrees
pub trait AdjacencyList: GraphVertexOrder + Sized {
    /// Returns all `v` with an edge `(u, v)` in ascending order, **including** `u` itself if
    /// the self-loop `(u, u)` exists. Empty if `u` does not exist.
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns all `v` with an edge `(v, u)` in ascending order, including a self-loop.
    /// Empty if `u` does not exist.
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the neighbors of `u`: all `v != u` with an edge `(u, v)` in ascending order.
    /// A vertex is never its own neighbor, even if it has a self-loop.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_neighbors_of(u).filter(move |&v| v != u)
    }

    /// Returns the number of outgoing edges of `u` (a self-loop counts once), `0` if `u` does not exist
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_neighbors_of(u).count() as NumNodes
    }

    /// Returns the number of incoming edges of `u` (a self-loop counts once), `0` if `u` does not exist
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns the out-degree plus the in-degree of `u`
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    node_iterator!(out_degrees, out_degree_of, NumNodes);
    node_iterator!(in_degrees, in_degree_of, NumNodes);
    node_iterator!(total_degrees, total_degree_of, NumNodes);

    /// Returns the neighbors of the neighbors of `u` in ascending order without duplicates.
    ///
    /// `u` itself is never included. A first-order neighbor that can also be reached in two hops
    /// is included; callers who need both sets combined have to merge them themselves.
    fn second_order_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u)
            .flat_map(|v| self.neighbors_of(v))
            .filter(|&w| w != u)
            .sorted_unstable()
            .dedup()
            .collect_vec()
    }

    /// Returns all edges of the graph ordered by source and then by target
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.out_neighbors_of(u).map(move |v| Edge(u, v)))
    }
}

/// Trait to test existence of edges and to access their weights
pub trait AdjacencyTest: AdjacencyList + GraphType {
    /// Returns the weight of the edge `(u, v)` or `None` if the edge does not exist
    fn edge_weight(&self, u: Node, v: Node) -> Option<&Self::Weight>;

    /// Returns *true* if both endpoints exist and the edge `(u, v)` exists in the graph
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns *true* if a self-loop `(u, u)` exists
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns all edges with their weights ordered by source and then by target
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<&Self::Weight>> + '_ {
        self.edges()
            .filter_map(move |e| self.edge_weight(e.0, e.1).map(|w| e.with_weight(w)))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph whose ids `0..initial_capacity` are addressable without growing
    /// ** Panics if `initial_capacity == 0` **
    fn with_capacity(initial_capacity: usize) -> Self;

    /// Returns the capacity the graph was created with
    fn initial_capacity(&self) -> usize;

    /// Creates an empty graph configured like `self`
    fn new_like(&self) -> Self {
        Self::with_capacity(self.initial_capacity())
    }
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphType + GraphVertexOrder {
    /// Adds vertex `u` with the given weight, growing the graph if `u` is not yet addressable.
    /// If `u` already existed, its weight is overwritten silently and the old weight returned.
    fn add_vertex(&mut self, u: Node, weight: Self::Weight) -> Option<Self::Weight>;

    /// Adds all vertices of the collection
    fn add_vertices<V>(&mut self, vertices: impl IntoIterator<Item = V>)
    where
        V: Into<Vertex<Self::Weight>>,
    {
        for Vertex { id, weight } in vertices.into_iter().map(|v| v.into()) {
            self.add_vertex(id, weight);
        }
    }

    /// Removes vertex `u` together with all incident edges and returns its weight.
    /// Is a no-op returning `None` if `u` does not exist.
    fn remove_vertex(&mut self, u: Node) -> Option<Self::Weight>;

    /// Like [`GraphVertexEditing::remove_vertex`] but reports a missing vertex as error
    fn try_remove_vertex(&mut self, u: Node) -> GraphResult<Self::Weight> {
        self.remove_vertex(u).ok_or(GraphError::MissingVertex(u))
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphType + GraphVertexOrder {
    /// Adds the edge `(u, v)` with the given weight if both endpoints exist; otherwise this is a
    /// no-op. An existing edge has its weight overwritten.
    /// Returns *true* exactly if the edge was not present previously and has been created.
    fn add_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> bool;

    /// Like [`GraphEdgeEditing::add_edge`] but reports a missing endpoint as error
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> GraphResult<bool> {
        for x in [u, v] {
            if !self.contains(x) {
                return Err(GraphError::MissingVertex(x));
            }
        }
        Ok(self.add_edge(u, v, weight))
    }

    /// Adds all edges in the collection, skipping those with a missing endpoint
    fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>)
    where
        E: Into<WeightedEdge<Self::Weight>>,
    {
        for WeightedEdge { from, to, weight } in edges.into_iter().map(|e| e.into()) {
            self.add_edge(from, to, weight);
        }
    }

    /// Removes the edge `(u, v)` and returns its weight.
    /// Is a no-op returning `None` if an endpoint or the edge does not exist.
    fn remove_edge(&mut self, u: Node, v: Node) -> Option<Self::Weight>;

    /// Like [`GraphEdgeEditing::remove_edge`] but reports what was missing as error
    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<Self::Weight> {
        for x in [u, v] {
            if !self.contains(x) {
                return Err(GraphError::MissingVertex(x));
            }
        }
        self.remove_edge(u, v)
            .ok_or(GraphError::MissingEdge(Edge(u, v)))
    }
}

/// A super trait for creating a graph from scratch from weighted vertices and edges
pub trait GraphFromScratch: GraphType {
    /// Creates a graph containing the given vertices and all edges whose endpoints are among them
    fn from_parts<V, E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        V: Into<Vertex<Self::Weight>>,
        E: Into<WeightedEdge<Self::Weight>>;
}

impl<G> GraphFromScratch for G
where
    G: Default + GraphVertexEditing + GraphEdgeEditing,
{
    fn from_parts<V, E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        V: Into<Vertex<Self::Weight>>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::default();
        graph.add_vertices(vertices);
        graph.add_edges(edges);
        graph
    }
}
