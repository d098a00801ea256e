//! Merge sort over edge lists, ordered by weight ascending.
//!
//! Divide-and-conquer with a single scratch buffer reserved up front:
//! O(log m) split depth and O(m) merge work per level. Ties always take
//! the left half first, so the output order is deterministic for a fixed
//! input order even though equal-weight edges are interchangeable for MST
//! purposes.

use crate::error::{Result, SimulationError};
use crate::graph::Edge;

/// Sorts `edges` by weight ascending, in place.
///
/// # Errors
/// Returns [`SimulationError::AllocationFailure`] when the scratch buffer
/// cannot be reserved.
pub fn sort_by_weight(edges: &mut [Edge]) -> Result<()> {
    if edges.len() <= 1 {
        return Ok(());
    }
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(edges.len())
        .map_err(|_| SimulationError::AllocationFailure {
            buffer: "sort scratch buffer",
            capacity: edges.len(),
        })?;
    scratch.extend_from_slice(edges);
    sort_range(edges, &mut scratch, 0, edges.len());
    Ok(())
}

fn sort_range(edges: &mut [Edge], scratch: &mut [Edge], first: usize, last: usize) {
    if last - first <= 1 {
        return;
    }
    let split = first + (last - first) / 2;
    sort_range(edges, scratch, first, split);
    sort_range(edges, scratch, split, last);
    merge(edges, scratch, first, split, last);
}

fn merge(edges: &mut [Edge], scratch: &mut [Edge], first: usize, split: usize, last: usize) {
    let mut index = first;
    let mut left = first;
    let mut right = split;

    while left < split && right < last {
        if edges[left].weight() <= edges[right].weight() {
            scratch[index] = edges[left];
            left += 1;
        } else {
            scratch[index] = edges[right];
            right += 1;
        }
        index += 1;
    }
    while left < split {
        scratch[index] = edges[left];
        left += 1;
        index += 1;
    }
    while right < last {
        scratch[index] = edges[right];
        right += 1;
        index += 1;
    }

    edges[first..last].copy_from_slice(&scratch[first..last]);
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;

    fn weights(edges: &[Edge]) -> Vec<f64> {
        edges.iter().map(Edge::weight).collect()
    }

    fn is_non_decreasing(edges: &[Edge]) -> bool {
        edges.windows(2).all(|pair| pair[0].weight() <= pair[1].weight())
    }

    #[test]
    fn sorts_random_edge_lists() {
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..20 {
            let mut edges: Vec<Edge> = (0..rng.gen_range(0_usize..200))
                .map(|i| Edge::new(i, i + 1, rng.gen_range(0.0..10.0)))
                .collect();
            let mut expected = weights(&edges);
            expected.sort_by(f64::total_cmp);

            sort_by_weight(&mut edges).expect("sort must succeed");
            assert!(is_non_decreasing(&edges));
            assert_eq!(weights(&edges), expected, "output must be a permutation");
        }
    }

    #[test]
    fn already_sorted_input_is_untouched() {
        let mut edges: Vec<Edge> = (0..50).map(|i| Edge::new(i, i + 1, i as f64)).collect();
        let before = edges.clone();
        sort_by_weight(&mut edges).expect("sort must succeed");
        assert_eq!(edges, before);
    }

    #[test]
    fn equal_weights_keep_their_input_order() {
        // Endpoints tag the input position; the left-first merge rule
        // must keep equal keys in input order.
        let mut edges = vec![
            Edge::new(0, 9, 2.0),
            Edge::new(1, 9, 1.0),
            Edge::new(2, 9, 2.0),
            Edge::new(3, 9, 1.0),
            Edge::new(4, 9, 2.0),
        ];
        sort_by_weight(&mut edges).expect("sort must succeed");

        let order: Vec<(usize, f64)> = edges
            .iter()
            .map(|edge| (edge.source(), edge.weight()))
            .collect();
        assert_eq!(
            order,
            vec![(1, 1.0), (3, 1.0), (0, 2.0), (2, 2.0), (4, 2.0)]
        );
    }

    #[test]
    fn handles_empty_and_singleton_lists() {
        let mut empty: Vec<Edge> = Vec::new();
        sort_by_weight(&mut empty).expect("sort must succeed");
        assert!(empty.is_empty());

        let mut single = vec![Edge::new(0, 1, 0.5)];
        sort_by_weight(&mut single).expect("sort must succeed");
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(41);
        let mut edges: Vec<Edge> = (0..100)
            .map(|i| Edge::new(i, i + 1, rng.gen_range(0.0_f64..1.0)))
            .collect();
        sort_by_weight(&mut edges).expect("first sort must succeed");
        let once = edges.clone();
        sort_by_weight(&mut edges).expect("second sort must succeed");
        assert_eq!(edges, once);
    }
}
