//! Core engine for empirical minimum-spanning-tree weight estimation on
//! random graphs.
//!
//! One run executes a configured number of trials. Each trial generates a
//! random instance (uniform weights, or Euclidean distances between
//! random points in a unit hypercube), verifies connectivity with a
//! depth-first search, and computes the MST weight with Kruskal's
//! algorithm over a merge-sorted edge list and a union-find structure.
//! Aggregation across trials, including the treatment of disconnected
//! instances, happens in [`Simulation::run`].

mod builder;
mod connectivity;
mod error;
mod generate;
mod graph;
mod mst;
mod simulation;
mod sort;

pub use crate::{
    builder::SimulationBuilder,
    connectivity::{ConnectivityReport, DfsForest, check_connectivity},
    error::{Result, SimulationError, SimulationErrorCode},
    generate::{WeightModel, default_seed, generate},
    graph::{Edge, GraphConfig, GraphInstance},
    mst::{MstReport, compute_mst},
    simulation::{DisconnectedPolicy, Simulation, SimulationSummary, TrialOutcome},
    sort::sort_by_weight,
};
