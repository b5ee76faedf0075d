/*!
Cycle detection for directed graphs.

A directed cycle is a closed walk following out-edges, so a self-loop already forms a cycle of
length one. Detection runs an iterative depth-first search with three colours:

- *unvisited*: not discovered yet,
- *in progress*: discovered, and still on the current search path,
- *done*: all successors have been explored.

An out-edge leading to an in-progress vertex closes a cycle. Searches are started from every
vertex that is still unvisited, so cycles in parts unreachable from small ids are found as well.
*/

use super::*;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    Unvisited,
    InProgress,
    Done,
}

/// Detection of directed cycles
pub trait Cycles: AdjacencyList + Sized {
    /// Returns *true* if the graph contains a directed cycle (self-loops included).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: MatrixDigraph<u8> =
    ///     MatrixDigraph::from_parts([(0, 1), (1, 1), (2, 1)], [(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
    /// assert!(!g.contains_cycles());
    ///
    /// g.add_edge(2, 0, 1);
    /// assert!(g.contains_cycles());
    /// ```
    fn contains_cycles(&self) -> bool {
        let mut colours = vec![Colour::Unvisited; self.capacity()];
        // search path; each frame keeps the successors that still need to be explored
        let mut path = Vec::new();

        for root in self.vertices() {
            if colours[root as usize] != Colour::Unvisited {
                continue;
            }

            colours[root as usize] = Colour::InProgress;
            path.push((root, self.out_neighbors_of(root)));

            while let Some((u, successors)) = path.last_mut() {
                let u = *u;
                match successors.next() {
                    Some(v) => match colours[v as usize] {
                        Colour::InProgress => {
                            trace!(from = u, to = v, "found back edge closing a cycle");
                            return true;
                        }
                        Colour::Unvisited => {
                            colours[v as usize] = Colour::InProgress;
                            path.push((v, self.out_neighbors_of(v)));
                        }
                        Colour::Done => {}
                    },
                    None => {
                        colours[u as usize] = Colour::Done;
                        path.pop();
                    }
                }
            }
        }

        trace!(vertices = self.number_of_vertices(), "graph is acyclic");
        false
    }

    /// Returns *true* if the graph does not contain a directed cycle
    fn is_acyclic(&self) -> bool {
        !self.contains_cycles()
    }
}

impl<G> Cycles for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::unit_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Kahn's algorithm: a graph is acyclic iff repeatedly removing sources removes every vertex
    fn acyclic_by_peeling(graph: &MatrixDigraph<u32>) -> bool {
        let mut in_degs = vec![0; graph.capacity()];
        for Edge(_, v) in graph.edges() {
            in_degs[v as usize] += 1;
        }

        let mut stack = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect::<Vec<_>>();
        let mut removed = 0;

        while let Some(u) = stack.pop() {
            removed += 1;
            for v in graph.out_neighbors_of(u) {
                in_degs[v as usize] -= 1;
                if in_degs[v as usize] == 0 {
                    stack.push(v);
                }
            }
        }

        removed == graph.number_of_vertices()
    }

    #[test]
    fn triangle_with_and_without_back_edge() {
        let mut graph = unit_graph(0..3, [(0, 1), (1, 2), (0, 2)]);
        assert!(!graph.contains_cycles());
        assert!(graph.is_acyclic());

        graph.add_edge(2, 0, 1);
        assert!(graph.contains_cycles());
        assert!(!graph.is_acyclic());

        graph.remove_edge(2, 0);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut graph = unit_graph(0..2, [(0, 1)]);
        assert!(graph.is_acyclic());

        graph.add_edge(1, 1, 1);
        assert!(graph.contains_cycles());
    }

    #[test]
    fn cycle_away_from_first_vertex() {
        // 0 and 1 are sources, the cycle lives among 5, 7, 9
        let graph = unit_graph([0, 1, 5, 7, 9], [(0, 1), (5, 7), (7, 9), (9, 5)]);
        assert!(graph.contains_cycles());

        let graph = unit_graph([0, 1, 5, 7, 9], [(0, 1), (9, 7), (7, 5), (1, 5)]);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn shared_descendants_are_not_cycles() {
        // diamond: 3 is reached twice but never on the current path
        let graph = unit_graph(0..4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        assert!(MatrixDigraph::<u32>::new().is_acyclic());
        assert!(unit_graph(0..10, []).is_acyclic());
    }

    #[test]
    fn agrees_with_peeling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5, 10, 20] {
            for _ in 0..50 {
                let m = rng.random_range(0..2 * n);
                let edges = (0..m)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect::<Vec<_>>();
                let graph = unit_graph(0..n, edges);

                assert_eq!(graph.is_acyclic(), acyclic_by_peeling(&graph));
            }
        }
    }
}
