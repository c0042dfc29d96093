mod common;

use negative_sssp::{EdgeLocation, Graph, SccDecomposition};

/// Two 3-cycles joined by bridges, plus an isolated vertex.
fn bridged_components() -> Graph<i64> {
    let mut g = Graph::new(7);
    g.add_edge(0, 1, 0);
    g.add_edge(1, 2, 0);
    g.add_edge(2, 0, 0);
    g.add_edge(5, 4, 0);
    g.add_edge(4, 3, 0);
    g.add_edge(3, 5, 0);
    g.add_edge(1, 3, 0);
    g.add_edge(1, 4, 0);
    g.add_edge(0, 5, 0);
    g
}

#[test]
fn kosaraju_maps_on_the_bridged_graph() {
    let g = bridged_components();
    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.edge_count(), 9);

    let decomp = SccDecomposition::new(&g);
    assert_eq!(decomp.num_sccs(), 3);

    assert_eq!(decomp.inter_scc().vertex_count(), 7);
    assert_eq!(decomp.inter_scc().edge_count(), 3);

    let expected_down = [
        Some((1, 0)),
        Some((1, 2)),
        Some((1, 1)),
        Some((2, 0)),
        Some((2, 1)),
        Some((2, 2)),
        Some((0, 0)),
    ];
    for (v, &expected) in expected_down.iter().enumerate() {
        assert_eq!(decomp.vertex_down(v), expected);
    }

    assert_eq!(decomp.component_vertices(0), &[6]);
    assert_eq!(decomp.component_vertices(1), &[0, 2, 1]);
    assert_eq!(decomp.component_vertices(2), &[3, 4, 5]);
    assert_eq!(decomp.vertex_up(1, 2), 1);

    assert_eq!(decomp.subgraph(0).vertex_count(), 1);
    assert_eq!(decomp.subgraph(0).edge_count(), 0);
    assert_eq!(decomp.subgraph(1).vertex_count(), 3);
    assert_eq!(decomp.subgraph(1).edge_count(), 3);
    assert_eq!(decomp.subgraph(2).vertex_count(), 3);
    assert_eq!(decomp.subgraph(2).edge_count(), 3);
    assert!(decomp.subgraph(1).is_scc);

    assert_eq!(
        decomp.edge_location(0),
        Some(EdgeLocation::Intra { scc: 1, local: 0 })
    );
    assert_eq!(decomp.edge_location(8), Some(EdgeLocation::Inter { local: 2 }));

    assert!(decomp.in_same_scc(0, 2));
    assert!(!decomp.in_same_scc(0, 3));
}

#[test]
fn every_vertex_and_edge_lands_exactly_once() {
    let g = bridged_components();
    let decomp = SccDecomposition::new(&g);

    let mut seen = vec![0usize; g.vertex_count()];
    let mut total = 0;
    for scc in 0..decomp.num_sccs() {
        for &v in decomp.component_vertices(scc) {
            seen[v] += 1;
        }
        total += decomp.subgraph(scc).vertex_count();
    }
    assert!(seen.iter().all(|&count| count == 1));
    assert_eq!(total, g.vertex_count());

    let mut intra = 0;
    let mut inter = 0;
    for e in 0..g.edge_count() {
        match decomp.edge_location(e) {
            Some(EdgeLocation::Intra { .. }) => intra += 1,
            Some(EdgeLocation::Inter { .. }) => inter += 1,
            None => {}
        }
    }
    assert_eq!(intra, 6);
    assert_eq!(inter, 3);
    assert_eq!(inter, decomp.inter_scc().edge_count());
}

#[test]
fn component_indices_are_topological_sources_first() {
    let g = bridged_components();
    let decomp = SccDecomposition::new(&g);
    for e in 0..g.edge_count() {
        if let Some(EdgeLocation::Inter { .. }) = decomp.edge_location(e) {
            let (source_scc, _) = decomp.vertex_down(g.edge(e).source).unwrap();
            let (target_scc, _) = decomp.vertex_down(g.edge(e).target).unwrap();
            assert!(source_scc < target_scc);
        }
    }

    // On a DAG every component is a singleton and every edge points from a
    // lower component index to a higher one.
    let dag = common::gen_dag(12, 24, 0x7aa1, -5, 9);
    let decomp = SccDecomposition::new(&dag);
    assert_eq!(decomp.num_sccs(), 12);
    for e in 0..dag.edge_count() {
        let (source_scc, _) = decomp.vertex_down(dag.edge(e).source).unwrap();
        let (target_scc, _) = decomp.vertex_down(dag.edge(e).target).unwrap();
        assert!(source_scc < target_scc);
    }
}

#[test]
fn deleted_vertices_and_edges_are_ignored() {
    let mut g = bridged_components();
    g.enable_dels();
    g.delete_vertex(6);
    g.delete_edge(6);
    g.delete_edge(7);
    g.delete_edge(8);

    let decomp = SccDecomposition::new(&g);
    assert_eq!(decomp.num_sccs(), 2);
    assert_eq!(decomp.vertex_down(6), None);
    assert_eq!(decomp.inter_scc().edge_count(), 0);
    assert_eq!(decomp.edge_location(8), None);
}

#[test]
fn subgraphs_carry_reduced_weights_against_zero_potentials() {
    let mut g = Graph::new(2);
    g.add_edge(0, 1, 3);
    g.add_edge(1, 0, -1);
    g.set_potential(0, 5);
    g.set_potential(1, 2);

    let decomp = SccDecomposition::new(&g);
    assert_eq!(decomp.num_sccs(), 1);
    let sub = decomp.subgraph(0);
    assert_eq!(sub.potentials(), &[0, 0]);
    let mut weights: Vec<i64> = (0..sub.edge_count()).map(|e| sub.weight(e)).collect();
    weights.sort_unstable();
    assert_eq!(weights, vec![-4, 6]);
}
