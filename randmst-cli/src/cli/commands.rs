//! Command implementations and argument parsing for the randmst CLI.

use std::io::{self, Write};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use randmst_core::{
    DisconnectedPolicy, Simulation, SimulationBuilder, SimulationError, SimulationSummary,
    TrialOutcome, WeightModel,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randmst",
    about = "Estimate the expected MST weight of random graphs over repeated trials."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run repeated trials and report aggregate statistics.
    Run(RunCommand),
    /// Run a single instance and report per-phase detail.
    Inspect(InspectCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of vertices per instance.
    #[arg(long)]
    pub vertices: usize,

    /// Number of trials to average over.
    #[arg(long, default_value_t = 1)]
    pub trials: usize,

    /// Weight model selector: 0 draws uniform weights, 2 and above place
    /// random points in a hypercube of that dimension.
    #[arg(long, default_value_t = 0)]
    pub dimension: usize,

    /// Probability that any given vertex pair receives an edge.
    #[arg(long, default_value_t = 1.0)]
    pub edge_probability: f64,

    /// How disconnected trials enter the average.
    #[arg(long, value_enum, default_value = "exclude")]
    pub policy: PolicyArg,

    /// Fixed generator seed; omit to derive one from the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Number of vertices in the instance.
    #[arg(long)]
    pub vertices: usize,

    /// Weight model selector, as for `run`.
    #[arg(long, default_value_t = 0)]
    pub dimension: usize,

    /// Probability that any given vertex pair receives an edge.
    #[arg(long, default_value_t = 1.0)]
    pub edge_probability: f64,

    /// Fixed generator seed; omit to derive one from the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Disconnected-trial aggregation policies selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Exclude disconnected trials from the average's denominator.
    #[default]
    Exclude,
    /// Count disconnected trials as zero-weight contributions.
    Zero,
}

impl From<PolicyArg> for DisconnectedPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Exclude => Self::Exclude,
            PolicyArg::Zero => Self::CountZero,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core configuration or execution failed.
    #[error(transparent)]
    Core(#[from] SimulationError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Aggregate output of the `run` command.
    Run {
        /// Vertex count echoed from the configuration.
        vertices: usize,
        /// Dimension selector echoed from the configuration.
        dimension: usize,
        /// Aggregated trial results.
        summary: SimulationSummary,
    },
    /// Detailed output of the `inspect` command.
    Inspect {
        /// Vertex count echoed from the configuration.
        vertices: usize,
        /// Dimension selector echoed from the configuration.
        dimension: usize,
        /// The single trial's outcome.
        outcome: TrialOutcome,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration is rejected or execution fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_trials(run)
        }
        Command::Inspect(inspect) => {
            Span::current().record("command", field::display("inspect"));
            run_inspect(inspect)
        }
    }
}

fn build_simulation(
    vertices: usize,
    trials: usize,
    dimension: usize,
    edge_probability: f64,
    policy: DisconnectedPolicy,
    seed: Option<u64>,
) -> Result<Simulation, CliError> {
    let weight_model = WeightModel::from_dimension(dimension)?;
    let mut builder = SimulationBuilder::new()
        .with_vertex_count(vertices)
        .with_trial_count(trials)
        .with_weight_model(weight_model)
        .with_edge_probability(edge_probability)
        .with_policy(policy);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    Ok(builder.build()?)
}

#[instrument(
    name = "cli.run_trials",
    err,
    skip(command),
    fields(vertices = command.vertices, trials = command.trials, dimension = command.dimension),
)]
pub(super) fn run_trials(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let simulation = build_simulation(
        command.vertices,
        command.trials,
        command.dimension,
        command.edge_probability,
        command.policy.into(),
        command.seed,
    )?;
    let summary = simulation.run()?;
    info!(
        average_weight = summary.average_mst_weight(),
        disconnected = summary.disconnected_trials(),
        "trial run completed"
    );
    Ok(ExecutionSummary::Run {
        vertices: command.vertices,
        dimension: command.dimension,
        summary,
    })
}

#[instrument(
    name = "cli.run_inspect",
    err,
    skip(command),
    fields(vertices = command.vertices, dimension = command.dimension),
)]
pub(super) fn run_inspect(command: InspectCommand) -> Result<ExecutionSummary, CliError> {
    let simulation = build_simulation(
        command.vertices,
        1,
        command.dimension,
        command.edge_probability,
        DisconnectedPolicy::default(),
        command.seed,
    )?;
    let outcome = simulation.run_once()?;
    info!(
        connected = outcome.is_connected(),
        edges = outcome.edge_count(),
        "inspection completed"
    );
    Ok(ExecutionSummary::Inspect {
        vertices: command.vertices,
        dimension: command.dimension,
        outcome,
    })
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run {
            vertices,
            dimension,
            summary,
        } => {
            writeln!(
                writer,
                "{:.6}  {} {} {}",
                summary.average_mst_weight(),
                vertices,
                summary.trials_run(),
                dimension
            )?;
            writeln!(
                writer,
                "edges per trial (mean): {:.1}",
                summary.average_edge_count()
            )?;
            if summary.disconnected_trials() > 0 {
                writeln!(
                    writer,
                    "disconnected trials: {} (policy: {:?})",
                    summary.disconnected_trials(),
                    summary.policy()
                )?;
            }
            writeln!(writer, "seed: {}", summary.seed())?;
        }
        ExecutionSummary::Inspect {
            vertices,
            dimension,
            outcome,
        } => {
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "dimension selector: {dimension}")?;
            writeln!(writer, "edges: {}", outcome.edge_count())?;
            let connectivity = outcome.connectivity();
            writeln!(
                writer,
                "depth-first search took {:.3} ms and produced a forest of weight {:.6}",
                millis(connectivity.duration()),
                connectivity.tree_weight()
            )?;
            match outcome.mst() {
                Some(report) => {
                    writeln!(
                        writer,
                        "sorting the edges took {:.3} ms",
                        millis(report.sort_duration())
                    )?;
                    writeln!(
                        writer,
                        "kruskal took {:.3} ms and produced an MST of weight {:.6}",
                        millis(report.kruskal_duration()),
                        report.total_weight()
                    )?;
                }
                None => {
                    writeln!(
                        writer,
                        "WARNING: this graph is disconnected ({} components); skipping the MST",
                        connectivity.tree_count()
                    )?;
                }
            }
        }
    }
    Ok(())
}
