use itertools::Itertools;
use wgraphs::{algo::*, prelude::*};

fn triangle() -> MatrixDigraph<i32> {
    MatrixDigraph::from_parts(
        [(0, 100), (1, 200), (2, 300)],
        [(0, 1, 7), (1, 2, 8), (0, 2, 9)],
    )
}

#[test]
fn acyclic_triangle() {
    let graph = triangle();

    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(graph.number_of_edges(), 3);
    assert!(graph.has_edge(0, 2));
    assert!(!graph.has_edge(2, 0));

    assert_eq!(graph.out_degree_of(0), 2);
    assert_eq!(graph.in_degree_of(2), 2);
    assert_eq!(graph.total_degree_of(1), 2);

    assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
    assert_eq!(graph.second_order_neighbors_of(0), vec![2]);

    assert_eq!(graph.depth_first(0), vec![0, 2, 1]);
    assert_eq!(graph.breadth_first(0), vec![0, 1, 2]);

    assert!(graph.reachable(0, 2));
    assert!(!graph.reachable(2, 0));
    assert!(graph.reachable(1, 1));

    assert!(!graph.contains_cycles());
    assert_eq!(graph.significance_sorting(), vec![0, 1, 2]);
    assert_eq!(graph.index_of(&200), Some(1));
    assert_eq!(graph.index_of(&400), None);
}

#[test]
fn cyclic_triangle() {
    let mut graph = triangle();
    assert!(graph.add_edge(2, 0, 10));

    assert!(graph.contains_cycles());
    assert!(graph.reachable(2, 1));
    assert_eq!(graph.significance_sorting(), vec![0, 2, 1]);
    assert_eq!(graph.second_order_neighbors_of(1), vec![0]);

    let tree = graph.out_tree(2);
    assert_eq!(tree.edges().collect_vec(), vec![Edge(0, 1), Edge(2, 0)]);
    assert_eq!(tree.edge_weight(2, 0), Some(&10));
    assert_eq!(tree.vertex_weight(1), Some(&200));
    assert!(tree.is_acyclic());

    assert_eq!(tree.pre_order(2), vec![2, 0, 1]);
    assert_eq!(tree.in_order(2), vec![1, 0, 2]);
    assert_eq!(tree.post_order(2), vec![1, 0, 2]);
}

#[test]
fn removal_leaves_no_ghost_edges() {
    let mut graph = triangle();

    assert_eq!(graph.remove_vertex(1), Some(200));
    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.remove_vertex(1), None);

    graph.add_vertex(1, 0);
    assert_eq!(graph.vertex_weight(1), Some(&0));
    assert_eq!(graph.total_degree_of(1), 0);
    assert!(!graph.has_edge(0, 1));
    assert_eq!(graph.depth_first(0), vec![0, 2]);
}

#[test]
fn checked_editing() {
    let mut graph = triangle();

    assert_eq!(graph.try_add_edge(0, 5, 1), Err(GraphError::MissingVertex(5)));
    assert_eq!(graph.try_add_edge(2, 1, 1), Ok(true));
    assert_eq!(graph.try_add_edge(2, 1, 2), Ok(false));
    assert_eq!(graph.try_remove_edge(2, 1), Ok(2));
    assert_eq!(graph.try_remove_edge(2, 1), Err(GraphError::MissingEdge(Edge(2, 1))));
    assert_eq!(graph.try_remove_vertex(2), Ok(300));
    assert_eq!(
        graph.try_remove_vertex(2).unwrap_err().to_string(),
        "vertex 2 does not exist"
    );
}

#[test]
fn sparse_ids_and_growth() {
    let mut graph = MatrixDigraph::with_capacity(2);
    graph.add_vertex(0, 'a');
    graph.add_vertex(250, 'b');
    graph.add_edge(250, 0, 'e');

    assert_eq!(graph.capacity(), 256);
    assert_eq!(graph.vertices().collect_vec(), vec![0, 250]);
    assert_eq!(graph.edge_weight(250, 0), Some(&'e'));
    assert_eq!(graph.breadth_first(250), vec![250, 0]);
    assert!(graph.reachable(250, 0));
    assert!(!graph.reachable(0, 250));
    assert!(!graph.reachable(0, 100));
}
