//! Unit tests for the CLI commands and rendering helpers.

use super::commands::{run_inspect, run_trials};
use super::{Cli, CliError, Command, ExecutionSummary, PolicyArg, render_summary, run_cli};

use clap::Parser;
use randmst_core::{SimulationError, SimulationErrorCode};
use rstest::rstest;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).expect("arguments must parse")
}

#[test]
fn run_arguments_parse_with_defaults() {
    let cli = parse(&["randmst", "run", "--vertices", "64"]);
    let Command::Run(run) = cli.command else {
        panic!("expected the run command");
    };
    assert_eq!(run.vertices, 64);
    assert_eq!(run.trials, 1);
    assert_eq!(run.dimension, 0);
    assert_eq!(run.edge_probability, 1.0);
    assert_eq!(run.policy, PolicyArg::Exclude);
    assert_eq!(run.seed, None);
}

#[test]
fn inspect_arguments_parse() {
    let cli = parse(&[
        "randmst", "inspect", "--vertices", "16", "--dimension", "3", "--seed", "7",
    ]);
    let Command::Inspect(inspect) = cli.command else {
        panic!("expected the inspect command");
    };
    assert_eq!(inspect.vertices, 16);
    assert_eq!(inspect.dimension, 3);
    assert_eq!(inspect.seed, Some(7));
}

#[rstest]
#[case::zero_vertices(&["randmst", "run", "--vertices", "0"])]
#[case::line_dimension(&["randmst", "run", "--vertices", "8", "--dimension", "1"])]
#[case::zero_trials(&["randmst", "run", "--vertices", "8", "--trials", "0"])]
#[case::bad_probability(&["randmst", "run", "--vertices", "8", "--edge-probability", "2.0"])]
fn invalid_configurations_surface_stable_codes(#[case] args: &[&str]) {
    let err = run_cli(parse(args)).expect_err("configuration must be rejected");
    let CliError::Core(core) = err;
    assert_eq!(core.code(), SimulationErrorCode::InvalidConfiguration);
}

#[test]
fn line_dimension_is_rejected_before_any_trial() {
    let err = run_cli(parse(&[
        "randmst", "run", "--vertices", "8", "--dimension", "1",
    ]))
    .expect_err("dimension 1 must be rejected");
    let CliError::Core(core) = err;
    assert_eq!(core, SimulationError::UnsupportedDimension { got: 1 });
}

#[test]
fn run_command_aggregates_trials() {
    let cli = parse(&[
        "randmst", "run", "--vertices", "12", "--trials", "4", "--seed", "9",
    ]);
    let Command::Run(run) = cli.command else {
        panic!("expected the run command");
    };
    let summary = run_trials(run).expect("run must succeed");

    let ExecutionSummary::Run {
        vertices,
        dimension,
        summary,
    } = summary
    else {
        panic!("expected a run summary");
    };
    assert_eq!(vertices, 12);
    assert_eq!(dimension, 0);
    assert_eq!(summary.trials_run(), 4);
    assert!(summary.average_mst_weight() > 0.0);
}

#[test]
fn inspect_command_reports_one_connected_instance() {
    let cli = parse(&["randmst", "inspect", "--vertices", "10", "--seed", "3"]);
    let Command::Inspect(inspect) = cli.command else {
        panic!("expected the inspect command");
    };
    let summary = run_inspect(inspect).expect("inspect must succeed");

    let ExecutionSummary::Inspect { outcome, .. } = summary else {
        panic!("expected an inspect summary");
    };
    assert!(outcome.is_connected());
    assert_eq!(outcome.edge_count(), 10 * 9 / 2);
    assert_eq!(
        outcome.mst().expect("connected instances yield an MST").edges_accepted(),
        9
    );
}

#[test]
fn rendered_run_summary_leads_with_the_average() {
    let cli = parse(&[
        "randmst", "run", "--vertices", "8", "--trials", "2", "--seed", "5",
    ]);
    let summary = run_cli(cli).expect("run must succeed");

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("rendering must succeed");
    let text = String::from_utf8(buffer).expect("output is UTF-8");

    let first_line = text.lines().next().expect("output has a first line");
    assert!(first_line.ends_with("8 2 0"), "unexpected line: {first_line}");
    assert!(text.contains("seed: 5"));
    assert!(!text.contains("disconnected trials"));
}

#[test]
fn rendered_inspect_summary_warns_on_disconnection() {
    // Three vertices at the smallest accepted probability virtually never
    // form a connected triangle with this seed.
    let cli = parse(&[
        "randmst",
        "inspect",
        "--vertices",
        "3",
        "--edge-probability",
        "0.001",
        "--seed",
        "2",
    ]);
    let summary = run_cli(cli).expect("inspect must succeed");

    let ExecutionSummary::Inspect { ref outcome, .. } = summary else {
        panic!("expected an inspect summary");
    };
    assert!(!outcome.is_connected(), "fixture seed must stay disconnected");

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("rendering must succeed");
    let text = String::from_utf8(buffer).expect("output is UTF-8");
    assert!(text.contains("WARNING: this graph is disconnected"));
}
