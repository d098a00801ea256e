//! Graph arena shared by the generator, the connectivity checker, and the
//! MST builder.
//!
//! Vertices are plain integer indices into a pre-sized adjacency table.
//! Each logical undirected edge is stored as two directed records, one in
//! each endpoint's adjacency list, sharing a single weight; traversals can
//! therefore start from either endpoint without back-pointers.

use std::num::NonZeroUsize;

use crate::error::{Result, SimulationError};
use crate::generate::WeightModel;

/// A directed edge record with a non-negative weight.
///
/// Two records with mirrored endpoints and the same weight represent one
/// logical undirected edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates a directed edge record.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the originating vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the destination vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// Validated parameters for generating one graph instance.
///
/// # Examples
/// ```
/// use randmst_core::{GraphConfig, WeightModel};
///
/// let config = GraphConfig::new(32, WeightModel::Uniform)
///     .expect("32 uniform vertices is a valid configuration");
/// assert_eq!(config.vertex_count().get(), 32);
/// assert_eq!(config.edge_probability(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    vertex_count: NonZeroUsize,
    weight_model: WeightModel,
    edge_probability: f64,
}

impl GraphConfig {
    /// Validates the vertex count and weight model.
    ///
    /// The edge probability defaults to `1.0`, which generates every
    /// unordered vertex pair (a complete graph).
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidVertexCount`] when `vertex_count`
    /// is zero and [`SimulationError::UnsupportedDimension`] when the
    /// model's dimension is below 2.
    pub fn new(vertex_count: usize, weight_model: WeightModel) -> Result<Self> {
        let vertex_count = NonZeroUsize::new(vertex_count)
            .ok_or(SimulationError::InvalidVertexCount { got: vertex_count })?;
        weight_model.validate()?;
        Ok(Self {
            vertex_count,
            weight_model,
            edge_probability: 1.0,
        })
    }

    /// Overrides the per-pair edge-inclusion probability.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidEdgeProbability`] unless the value
    /// lies in `(0, 1]`.
    pub fn with_edge_probability(mut self, probability: f64) -> Result<Self> {
        if !(probability > 0.0 && probability <= 1.0) {
            return Err(SimulationError::InvalidEdgeProbability { got: probability });
        }
        self.edge_probability = probability;
        Ok(self)
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> NonZeroUsize { self.vertex_count }

    /// Returns the configured weight model.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_model(&self) -> WeightModel { self.weight_model }

    /// Returns the per-pair edge-inclusion probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_probability(&self) -> f64 { self.edge_probability }
}

/// One random graph instance, owned by a single trial.
#[derive(Clone, Debug)]
pub struct GraphInstance {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl GraphInstance {
    /// Creates an empty instance with the adjacency table sized up front.
    ///
    /// Each per-vertex list reserves room for `vertex_count - 1` outgoing
    /// records, the maximum a complete graph needs, so generation never
    /// regrows a buffer.
    pub(crate) fn with_vertex_count(vertex_count: usize) -> Result<Self> {
        let mut adjacency: Vec<Vec<Edge>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| SimulationError::AllocationFailure {
                buffer: "adjacency table",
                capacity: vertex_count,
            })?;
        let per_vertex = vertex_count.saturating_sub(1);
        for _ in 0..vertex_count {
            let mut list = Vec::new();
            list.try_reserve_exact(per_vertex).map_err(|_| {
                SimulationError::AllocationFailure {
                    buffer: "adjacency list",
                    capacity: per_vertex,
                }
            })?;
            adjacency.push(list);
        }
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Records the logical undirected edge `(u, v)` as two directed records.
    pub(crate) fn push_undirected(&mut self, u: usize, v: usize, weight: f64) {
        debug_assert!(u < self.adjacency.len() && v < self.adjacency.len());
        self.adjacency[u].push(Edge::new(u, v, weight));
        self.adjacency[v].push(Edge::new(v, u, weight));
        self.edge_count += 1;
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the outgoing edge records of vertex `u`.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }

    /// Flattens every directed record into one buffer sized in a single
    /// reservation.
    ///
    /// The result holds `2 * edge_count()` records because each logical
    /// edge appears once per endpoint.
    ///
    /// # Errors
    /// Returns [`SimulationError::AllocationFailure`] when the buffer
    /// cannot be reserved.
    pub fn collect_edges(&self) -> Result<Vec<Edge>> {
        let capacity = self.edge_count * 2;
        let mut edges = Vec::new();
        edges
            .try_reserve_exact(capacity)
            .map_err(|_| SimulationError::AllocationFailure {
                buffer: "edge list",
                capacity,
            })?;
        for list in &self.adjacency {
            edges.extend_from_slice(list);
        }
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_vertex_count() {
        let err = GraphConfig::new(0, WeightModel::Uniform).expect_err("zero vertices");
        assert_eq!(err, SimulationError::InvalidVertexCount { got: 0 });
    }

    #[test]
    fn rejects_out_of_range_edge_probability() {
        for bad in [0.0, -0.25, 1.5, f64::NAN] {
            let result = GraphConfig::new(4, WeightModel::Uniform)
                .expect("valid base configuration")
                .with_edge_probability(bad);
            assert!(matches!(
                result,
                Err(SimulationError::InvalidEdgeProbability { .. })
            ));
        }
    }

    #[test]
    fn push_undirected_mirrors_records() {
        let mut graph = GraphInstance::with_vertex_count(3).expect("instance must allocate");
        graph.push_undirected(0, 2, 0.5);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0), &[Edge::new(0, 2, 0.5)]);
        assert_eq!(graph.neighbors(2), &[Edge::new(2, 0, 0.5)]);
        assert!(graph.neighbors(1).is_empty());

        let flat = graph.collect_edges().expect("edge list must allocate");
        assert_eq!(flat.len(), 2);
    }
}
