//! Shared helpers for the unit tests of this crate.

#[cfg(test)]
use crate::prelude::*;

/// Builds a graph with unit weights on the given (possibly sparse) vertices and edges
#[cfg(test)]
pub(crate) fn unit_graph(
    vertices: impl IntoIterator<Item = Node>,
    edges: impl IntoIterator<Item = (Node, Node)>,
) -> MatrixDigraph<u32> {
    MatrixDigraph::from_parts(
        vertices.into_iter().map(|u| Vertex::new(u, 1)),
        edges.into_iter().map(|(u, v)| Edge(u, v).with_weight(1)),
    )
}

/// Runs randomized consistency checks of a graph representation against a simple reference model.
/// The representation must implement all editing and query traits with `Weight = u32`.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::test_graph_ops};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Reference model: plain maps of vertex and edge weights
            #[derive(Default)]
            struct Model {
                vertices: FxHashMap<Node, u32>,
                edges: FxHashMap<Edge, u32>,
            }

            impl Model {
                fn add_vertex(&mut self, u: Node, w: u32) {
                    self.vertices.insert(u, w);
                }

                fn remove_vertex(&mut self, u: Node) {
                    if self.vertices.remove(&u).is_some() {
                        self.edges.retain(|e, _| e.0 != u && e.1 != u);
                    }
                }

                fn add_edge(&mut self, u: Node, v: Node, w: u32) {
                    if self.vertices.contains_key(&u) && self.vertices.contains_key(&v) {
                        self.edges.insert(Edge(u, v), w);
                    }
                }

                fn remove_edge(&mut self, u: Node, v: Node) {
                    self.edges.remove(&Edge(u, v));
                }

                fn reachable_from(&self, u: Node) -> Vec<Node> {
                    let mut seen = vec![u];
                    let mut i = 0;
                    while i < seen.len() {
                        let x = seen[i];
                        for e in self.edges.keys().filter(|e| e.0 == x) {
                            if !seen.contains(&e.1) {
                                seen.push(e.1);
                            }
                        }
                        i += 1;
                    }
                    seen.sort_unstable();
                    seen
                }
            }

            /// Applies `steps` random mutations with ids below `n` to both the graph and the model.
            /// Weights include zero to make sure zero is never mistaken for absence.
            fn random_history<R: Rng>(rng: &mut R, n: Node, steps: usize) -> ($graph, Model) {
                let mut graph = <$graph>::with_capacity(4);
                let mut model = Model::default();

                for _ in 0..steps {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(0..3u32);

                    match rng.random_range(0..10) {
                        0..3 => {
                            graph.add_vertex(u, w);
                            model.add_vertex(u, w);
                        }
                        3 => {
                            graph.remove_vertex(u);
                            model.remove_vertex(u);
                        }
                        4..8 => {
                            graph.add_edge(u, v, w);
                            model.add_edge(u, v, w);
                        }
                        _ => {
                            graph.remove_edge(u, v);
                            model.remove_edge(u, v);
                        }
                    }
                }

                (graph, model)
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ty: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as Node, 50, 300] {
                for _ in 0..10 {
                    let (graph, model) = random_history(rng, n, 400);

                    assert_eq!(graph.number_of_vertices() as usize, model.vertices.len());
                    assert_eq!(
                        graph.vertices().collect_vec(),
                        model.vertices.keys().copied().sorted().collect_vec()
                    );

                    for u in 0..n {
                        assert_eq!(graph.contains(u), model.vertices.contains_key(&u));
                        assert_eq!(graph.vertex_weight(u), model.vertices.get(&u));
                    }

                    for w in 0..3 {
                        let expected = model
                            .vertices
                            .iter()
                            .filter(|(_, x)| **x == w)
                            .map(|(u, _)| *u)
                            .min();
                        assert_eq!(graph.index_of(&w), expected);
                    }

                    let ratio = graph.capacity() / graph.initial_capacity();
                    assert!(ratio.is_power_of_two());
                    assert!(graph.vertices().all(|u| (u as usize) < graph.capacity()));
                }
            }
        }
    };
    ($graph:ty: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10 as Node, 50, 300] {
                for _ in 0..10 {
                    let (graph, model) = random_history(rng, n, 600);

                    assert_eq!(graph.number_of_edges() as usize, model.edges.len());
                    assert_eq!(
                        graph.edges().collect_vec(),
                        model.edges.keys().copied().sorted().collect_vec()
                    );

                    let adjacent = (0..n)
                        .cartesian_product(0..n)
                        .filter(|&(u, v)| graph.has_edge(u, v))
                        .count();
                    assert_eq!(adjacent, graph.number_of_edges() as usize);

                    for (e, w) in &model.edges {
                        assert_eq!(graph.edge_weight(e.0, e.1), Some(w));
                    }
                }
            }
        }
    };
    ($graph:ty: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as Node, 50] {
                for _ in 0..10 {
                    let (graph, model) = random_history(rng, n, 500);

                    for u in 0..n {
                        let out = model.edges.keys().filter(|e| e.0 == u).count() as NumNodes;
                        let inc = model.edges.keys().filter(|e| e.1 == u).count() as NumNodes;

                        assert_eq!(graph.out_degree_of(u), out);
                        assert_eq!(graph.in_degree_of(u), inc);
                        assert_eq!(graph.total_degree_of(u), graph.in_degree_of(u) + graph.out_degree_of(u));

                        let neighbors = graph.neighbors_of(u).collect_vec();
                        assert!(!neighbors.contains(&u));
                        assert!(neighbors.iter().tuple_windows().all(|(a, b)| a < b));
                        assert_eq!(
                            neighbors,
                            model.edges.keys().filter(|e| e.0 == u && e.1 != u).map(|e| e.1).sorted().collect_vec()
                        );

                        let second = graph.second_order_neighbors_of(u);
                        assert!(!second.contains(&u));
                        for w in second {
                            assert!(neighbors.iter().any(|&v| graph.neighbors_of(v).contains(&w)));
                        }
                    }
                }
            }
        }
    };
    ($graph:ty: Traversal) => {
        #[test]
        fn test_traversal_completeness() {
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [10 as Node, 30] {
                for _ in 0..10 {
                    let (graph, model) = random_history(rng, n, 200);

                    for u in graph.vertices() {
                        let expected = model.reachable_from(u);

                        for order in [graph.depth_first(u), graph.breadth_first(u)] {
                            assert_eq!(order[0], u);
                            assert_eq!(order.iter().copied().sorted().collect_vec(), expected);
                        }

                        for v in 0..n {
                            assert_eq!(graph.reachable(u, v), expected.contains(&v));
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
