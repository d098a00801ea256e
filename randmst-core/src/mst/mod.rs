//! Minimum spanning tree construction via Kruskal's algorithm.
//!
//! Edges are collected from the adjacency lists, sorted by weight with the
//! merge sort in [`crate::sort`], and scanned once: an edge joining two
//! distinct components is accepted and merged, an edge inside one
//! component is discarded. Every logical edge appears as two directed
//! records, so the second copy always finds its endpoints already merged
//! and falls through. That roughly doubles the scan work; it is kept
//! because the adjacency lists must serve traversal from either endpoint.

mod union_find;

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::GraphInstance;
use crate::sort::sort_by_weight;

use self::union_find::DisjointSet;

/// The outcome of one Kruskal run.
#[derive(Clone, Debug, PartialEq)]
pub struct MstReport {
    total_weight: f64,
    edges_accepted: usize,
    sort_duration: Duration,
    kruskal_duration: Duration,
}

impl MstReport {
    /// Returns the accumulated weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of edges accepted into the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_accepted(&self) -> usize { self.edges_accepted }

    /// Returns how long the edge sort took.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sort_duration(&self) -> Duration { self.sort_duration }

    /// Returns how long the find/union scan took.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal_duration(&self) -> Duration { self.kruskal_duration }
}

/// Computes the MST weight of `graph` with Kruskal's algorithm.
///
/// Callers must establish connectivity first (see
/// [`crate::check_connectivity`]): on a connected instance exactly
/// `vertex_count - 1` edges are accepted and the total is the MST weight;
/// on a disconnected instance the result is the weight of a partial
/// spanning forest and must not be reported as an MST weight.
///
/// # Errors
/// Returns [`crate::SimulationError::AllocationFailure`] when the edge
/// buffer cannot be sized.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randmst_core::{GraphConfig, WeightModel, compute_mst, generate};
///
/// let config = GraphConfig::new(16, WeightModel::Uniform)?;
/// let graph = generate(&config, &mut SmallRng::seed_from_u64(5))?;
/// let report = compute_mst(&graph)?;
/// assert_eq!(report.edges_accepted(), 15);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[instrument(
    name = "core.kruskal",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn compute_mst(graph: &GraphInstance) -> Result<MstReport> {
    let mut edges = graph.collect_edges()?;

    let sort_start = Instant::now();
    sort_by_weight(&mut edges)?;
    let sort_duration = sort_start.elapsed();

    let kruskal_start = Instant::now();
    let mut components = DisjointSet::new(graph.vertex_count());
    let mut total_weight = 0.0f64;
    let mut edges_accepted = 0usize;

    for edge in &edges {
        let a_root = components.find(edge.source());
        let b_root = components.find(edge.target());
        if a_root != b_root {
            components.union(a_root, b_root);
            total_weight += edge.weight();
            edges_accepted += 1;
        }
    }
    let kruskal_duration = kruskal_start.elapsed();

    debug!(
        weight = total_weight,
        accepted = edges_accepted,
        "kruskal completed"
    );
    Ok(MstReport {
        total_weight,
        edges_accepted,
        sort_duration,
        kruskal_duration,
    })
}


#[cfg(test)]
mod property;
