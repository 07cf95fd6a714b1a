//! CLI entry point for the bucket solver.
//!
//! Usage:
//!   bucket-solver solve --x <n> --y <n> --target <n> [options]
//!   bucket-solver solve <request.json> [options]
//!   bucket-solver solve --stdin [options]
//!
//! Options:
//!   --max-states <n>    Stop after expanding this many states
//!   --timeout-ms <n>    Stop after this many milliseconds
//!   --pretty            Pretty-print the JSON output
//!
//! Log verbosity is controlled by `RUST_LOG` (default: warn).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bucket_solver::{handle, Path, RequestError, SearchOutcome, SolveRequest, SolverConfig};

#[derive(Parser)]
#[command(name = "bucket-solver")]
#[command(about = "Shortest-sequence solver for the two-bucket water puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest sequence of moves measuring the target volume
    Solve(SolveArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Path to a request JSON file ({"bucketX", "bucketY", "amountWantedZ"})
    #[arg(value_name = "FILE", conflicts_with_all = ["stdin", "x"])]
    file: Option<PathBuf>,

    /// Read the request JSON from stdin
    #[arg(long, conflicts_with = "x")]
    stdin: bool,

    /// Capacity of bucket X
    #[arg(long, requires_all = ["y", "target"], allow_negative_numbers = true)]
    x: Option<i64>,

    /// Capacity of bucket Y
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    y: Option<i64>,

    /// Volume wanted in either bucket
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    target: Option<i64>,

    /// Stop after expanding this many states
    #[arg(long)]
    max_states: Option<usize>,

    /// Stop after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Output format for a solve attempt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<SearchOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    states_explored: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => run_solve(&args),
    }
}

fn run_solve(args: &SolveArgs) -> ExitCode {
    let config = SolverConfig {
        max_states: args.max_states,
        timeout: args.timeout_ms.map(Duration::from_millis),
    };

    let output = match read_request(args).and_then(|request| handle(&request, &config)) {
        Ok(result) => SolveOutput {
            solved: true,
            outcome: Some(result.outcome),
            states_explored: Some(result.states_explored),
            time_elapsed_ms: Some(result.time_elapsed_ms),
            solution: Some(result.path),
            error: None,
        },
        Err(err) => {
            let code = err.exit_code();
            print_output(&error_output(&err), args.pretty);
            return ExitCode::from(code as u8);
        }
    };

    print_output(&output, args.pretty);
    ExitCode::SUCCESS
}

fn read_request(args: &SolveArgs) -> Result<SolveRequest, RequestError> {
    if let (Some(x), Some(y), Some(target)) = (args.x, args.y, args.target) {
        return Ok(SolveRequest::new(x, y, target));
    }

    let json = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else {
        return Err(RequestError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "provide --x/--y/--target, a request file, or --stdin",
        )));
    };

    SolveRequest::from_json(&json)
}

fn error_output(err: &RequestError) -> SolveOutput {
    let (outcome, states_explored) = match err {
        RequestError::NoSolution {
            outcome,
            states_explored,
        } => (Some(*outcome), Some(*states_explored)),
        _ => (None, None),
    };

    SolveOutput {
        solved: false,
        outcome,
        states_explored,
        time_elapsed_ms: None,
        solution: None,
        error: Some(err.to_string()),
    }
}

fn print_output(output: &SolveOutput, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!("failed to serialize output: {err}"),
    }
}
