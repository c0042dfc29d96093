#![allow(dead_code)]

use negative_sssp::Graph;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// A path through all `n` vertices in shuffled order, with weights in
/// [-1, 100]. Restricted and free of cycles altogether.
pub fn gen_path(n: usize, seed: u64) -> Graph<i64> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    let mut g = Graph::new(n);
    for i in 0..n - 1 {
        g.add_edge(order[i], order[i + 1], rng.gen_range(-1..=100));
    }
    g
}

/// A hub with spokes into a directed rim cycle. Spokes may be negative but
/// the rim stays non-negative, so there is no negative cycle.
pub fn gen_wheel(n: usize, seed: u64) -> Graph<i64> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    let mut g = Graph::new(n);
    for i in 1..n {
        g.add_edge(order[0], order[i], rng.gen_range(-1..=1));
    }
    for i in 1..n - 1 {
        g.add_edge(order[i], order[i + 1], rng.gen_range(0..=1));
    }
    g.add_edge(order[n - 1], order[1], rng.gen_range(0..=1));
    g
}

/// A random DAG: `m` edges drawn with source index below target index,
/// weights in [lo, hi]. Parallel edges allowed.
pub fn gen_dag(n: usize, m: usize, seed: u64, lo: i64, hi: i64) -> Graph<i64> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut g = Graph::new(n);
    for _ in 0..m {
        let a = rng.gen_range(0..n - 1);
        let b = rng.gen_range(a + 1..n);
        g.add_edge(a, b, rng.gen_range(lo..=hi));
    }
    g
}
