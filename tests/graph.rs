use negative_sssp::{Edge, Graph};

fn three_edge_graph() -> Graph<i64> {
    let mut g = Graph::new(3);
    g.add_vertex(0);
    g.add_edge(0, 1, 2);
    g.add_edge(1, 2, 1);
    g.add_edge(2, 3, -1);
    g
}

#[test]
fn vertex_and_edge_accounting() {
    let g: Graph<i64> = Graph::new(3);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.min_weight(), i64::MAX);
    assert!(g.is_restricted());

    let g = three_edge_graph();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.deg(0), 1);
    assert_eq!(g.deg(1), 1);
    assert_eq!(g.deg(2), 1);
    assert_eq!(g.deg(3), 0);
    assert_eq!(g.min_weight(), -1);
    assert!(g.is_restricted());
    assert_eq!(g.weight(0), 2);
}

#[test]
fn potentials_shift_reduced_weights() {
    let mut g = three_edge_graph();
    g.set_potential(0, 1);
    assert_eq!(g.weight(0), 3);
    assert_eq!(g.edge(0).weight, 2, "raw weight untouched");

    g.add_potential(1, 4);
    assert_eq!(g.weight(0), -1);
    assert_eq!(g.weight(1), 5);
    assert_eq!(g.weight(2), -1);
    assert_eq!(g.min_weight(), -1);
}

#[test]
fn transpose_swaps_edges_and_adjacency() {
    let g = three_edge_graph();
    let gt = g.transpose();

    assert_eq!(
        g.edges(),
        &[
            Edge { source: 0, target: 1, weight: 2 },
            Edge { source: 1, target: 2, weight: 1 },
            Edge { source: 2, target: 3, weight: -1 },
        ]
    );
    assert_eq!(
        gt.edges(),
        &[
            Edge { source: 1, target: 0, weight: 2 },
            Edge { source: 2, target: 1, weight: 1 },
            Edge { source: 3, target: 2, weight: -1 },
        ]
    );
    assert_eq!(gt.deg(0), 0);
    assert_eq!(gt.deg(1), 1);
    assert_eq!(gt.deg(2), 1);
    assert_eq!(gt.deg(3), 1);
    assert_eq!(gt.in_edges(0), &[0]);

    let gtt = gt.transpose();
    assert_eq!(g.edges(), gtt.edges());
    for v in 0..g.vertex_count() {
        assert_eq!(g.out_edges(v), gtt.out_edges(v));
        assert_eq!(g.in_edges(v), gtt.in_edges(v));
    }
}

#[test]
fn soft_deletion_is_gated_and_transient() {
    let mut g = three_edge_graph();
    assert!(!g.deleted_vertex(1));
    assert!(!g.deleted_edge(2));

    g.enable_dels();
    g.delete_edge(2);
    g.delete_vertex(1);
    assert!(g.deleted_edge(2));
    assert!(g.deleted_vertex(1));
    // The -1 edge is hidden, so the minimum moves.
    assert_eq!(g.min_weight(), 1);

    g.clear_vertex_deletions();
    assert!(!g.deleted_vertex(1));
    assert!(g.deleted_edge(2), "edge deletions survive the vertex clear");

    g.disable_dels();
    assert!(!g.deleted_edge(2));
    assert_eq!(g.min_weight(), -1);
}

#[test]
fn initial_dist_is_all_unreachable() {
    let g = three_edge_graph();
    assert_eq!(g.initial_dist(), vec![i64::MAX; 4]);
}

#[test]
#[should_panic]
fn add_edge_rejects_out_of_range_vertices() {
    let mut g: Graph<i64> = Graph::new(2);
    g.add_edge(0, 2, 1);
}
