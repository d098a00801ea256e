//! Connectivity checking via depth-first search.
//!
//! The traversal walks every vertex in index order and starts a new tree
//! whenever it reaches an untouched vertex, so the number of trees equals
//! the number of connected components. Discovery and finish timestamps
//! follow classic DFS numbering (pre-order discovery, post-order finish)
//! and exist for diagnostics only; the accumulated tree weight is the
//! weight of the DFS forest, not a minimum.
//!
//! The walk keeps its own stack of (vertex, adjacency-cursor) frames
//! instead of recursing, so instance size is bounded by memory rather
//! than by call-stack depth.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::graph::GraphInstance;

/// DFS visit state for one vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Color {
    /// Untouched.
    White,
    /// Discovered, adjacency not yet exhausted.
    Gray,
    /// Finished.
    Black,
}

/// The forest produced by a full depth-first traversal.
#[derive(Clone, Debug)]
pub struct DfsForest {
    parent: Vec<Option<usize>>,
    discovery: Vec<u64>,
    finish: Vec<u64>,
    tree_count: usize,
    tree_weight: f64,
}

impl DfsForest {
    /// Runs a depth-first search over every vertex of `graph`.
    #[must_use]
    pub fn traverse(graph: &GraphInstance) -> Self {
        let vertex_count = graph.vertex_count();
        let mut colors = vec![Color::White; vertex_count];
        let mut forest = Self {
            parent: vec![None; vertex_count],
            discovery: vec![0; vertex_count],
            finish: vec![0; vertex_count],
            tree_count: 0,
            tree_weight: 0.0,
        };

        let mut clock = 0u64;
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(vertex_count);

        for root in 0..vertex_count {
            if colors[root] != Color::White {
                continue;
            }
            forest.tree_count += 1;
            colors[root] = Color::Gray;
            clock += 1;
            forest.discovery[root] = clock;
            stack.push((root, 0));

            while let Some(&mut (u, ref mut cursor)) = stack.last_mut() {
                if let Some(edge) = graph.neighbors(u).get(*cursor) {
                    *cursor += 1;
                    let v = edge.target();
                    if colors[v] == Color::White {
                        colors[v] = Color::Gray;
                        clock += 1;
                        forest.discovery[v] = clock;
                        forest.tree_weight += edge.weight();
                        forest.parent[v] = Some(u);
                        stack.push((v, 0));
                    }
                } else {
                    colors[u] = Color::Black;
                    clock += 1;
                    forest.finish[u] = clock;
                    stack.pop();
                }
            }
        }

        forest
    }

    /// Returns the number of trees, which equals the number of connected
    /// components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_count(&self) -> usize { self.tree_count }

    /// Returns the accumulated weight of the forest's tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_weight(&self) -> f64 { self.tree_weight }

    /// Returns the DFS parent of `v`, or `None` for tree roots.
    #[must_use]
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent[v]
    }

    /// Returns the pre-order discovery timestamps, indexed by vertex.
    #[must_use]
    pub fn discovery(&self) -> &[u64] {
        &self.discovery
    }

    /// Returns the post-order finish timestamps, indexed by vertex.
    #[must_use]
    pub fn finish(&self) -> &[u64] {
        &self.finish
    }
}

/// Summary of a connectivity check.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectivityReport {
    tree_count: usize,
    tree_weight: f64,
    duration: Duration,
}

impl ConnectivityReport {
    /// Returns the number of DFS trees found.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_count(&self) -> usize { self.tree_count }

    /// Returns the diagnostic DFS-tree weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_weight(&self) -> f64 { self.tree_weight }

    /// Returns how long the traversal took.
    #[must_use]
    #[rustfmt::skip]
    pub const fn duration(&self) -> Duration { self.duration }

    /// Returns `true` when the instance forms a single component.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.tree_count == 1
    }
}

/// Checks whether `graph` is connected.
///
/// Never fails on a valid instance. A report with `tree_count() > 1`
/// means the instance is disconnected and its MST weight is undefined.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randmst_core::{GraphConfig, WeightModel, check_connectivity, generate};
///
/// let config = GraphConfig::new(8, WeightModel::Uniform)?;
/// let graph = generate(&config, &mut SmallRng::seed_from_u64(1))?;
/// let report = check_connectivity(&graph);
/// assert!(report.is_connected());
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[must_use]
pub fn check_connectivity(graph: &GraphInstance) -> ConnectivityReport {
    let start = Instant::now();
    let forest = DfsForest::traverse(graph);
    let duration = start.elapsed();
    debug!(
        trees = forest.tree_count(),
        weight = forest.tree_weight(),
        "connectivity check completed"
    );
    ConnectivityReport {
        tree_count: forest.tree_count,
        tree_weight: forest.tree_weight,
        duration,
    }
}
