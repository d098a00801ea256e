//! Command-line interface orchestration for the randmst tool.
//!
//! Offers a `run` command that averages MST weight over repeated random
//! trials and an `inspect` command that reports per-phase detail for a
//! single instance.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, InspectCommand, PolicyArg, RunCommand,
    render_summary, run_cli,
};

#[cfg(test)]
mod tests;
