//! Property-based tests for Kruskal's algorithm.
//!
//! Random connected fixtures are generated from proptest-supplied seeds
//! and the Kruskal result is compared against a sequential Prim oracle;
//! structural assertions cover the accepted-edge count and determinism
//! across repeated runs on the same instance.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graph::GraphInstance;

use super::compute_mst;

/// Builds a random connected instance: a random spanning path first, then
/// extra random edges on top.
fn connected_fixture(seed: u64) -> GraphInstance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(2_usize..=24);
    let mut graph = GraphInstance::with_vertex_count(vertex_count).expect("must allocate");

    let mut order: Vec<usize> = (0..vertex_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for pair in order.windows(2) {
        graph.push_undirected(pair[0], pair[1], rng.gen_range(0.0..10.0));
    }

    let extras = rng.gen_range(0..=vertex_count * 2);
    for _ in 0..extras {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            graph.push_undirected(u.min(v), u.max(v), rng.gen_range(0.0..10.0));
        }
    }
    graph
}

/// O(n * m) Prim's algorithm over the adjacency lists, used as the oracle.
fn prim_weight(graph: &GraphInstance) -> f64 {
    let vertex_count = graph.vertex_count();
    let mut in_tree = vec![false; vertex_count];
    let mut best = vec![f64::INFINITY; vertex_count];
    best[0] = 0.0;
    let mut total = 0.0;

    for _ in 0..vertex_count {
        let mut next = None;
        for v in 0..vertex_count {
            if !in_tree[v] && next.is_none_or(|n: usize| best[v] < best[n]) {
                next = Some(v);
            }
        }
        let u = next.expect("a vertex always remains");
        in_tree[u] = true;
        total += best[u];
        for edge in graph.neighbors(u) {
            let v = edge.target();
            if !in_tree[v] && edge.weight() < best[v] {
                best[v] = edge.weight();
            }
        }
    }
    total
}

proptest! {
    #[test]
    fn kruskal_matches_the_prim_oracle(seed in any::<u64>()) {
        let graph = connected_fixture(seed);
        let report = compute_mst(&graph).expect("mst must succeed");
        let oracle = prim_weight(&graph);

        prop_assert_eq!(report.edges_accepted(), graph.vertex_count() - 1);
        prop_assert!(
            (report.total_weight() - oracle).abs() < 1e-9,
            "kruskal {} diverged from prim {}",
            report.total_weight(),
            oracle
        );
    }

    #[test]
    fn repeated_runs_are_deterministic(seed in any::<u64>()) {
        let graph = connected_fixture(seed);
        let first = compute_mst(&graph).expect("mst must succeed");
        let second = compute_mst(&graph).expect("mst must succeed");

        prop_assert_eq!(first.total_weight(), second.total_weight());
        prop_assert_eq!(first.edges_accepted(), second.edges_accepted());
    }
}
