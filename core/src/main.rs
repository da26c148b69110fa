use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use secret_core::{solve_str, Secret};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Recover a polynomial's constant term from radix-encoded points"
)]
struct Cli {
    /// JSON documents to solve. `-` or no argument reads standard input.
    inputs: Vec<PathBuf>,
    /// Log debug details to stderr unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(text);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn run(path: &Path) -> anyhow::Result<Secret> {
    let text = read_input(path)?;
    let secret = solve_str(&text)
        .with_context(|| format!("failed to solve {}", path.display()))?;
    info!(input = %path.display(), %secret, "recovered constant term");
    Ok(secret)
}

/// Solve each input in turn, writing one result line per success. Results
/// are prefixed with their path when there is more than one input. Returns
/// the number of inputs that failed.
fn solve_all<W: Write>(inputs: &[PathBuf], out: &mut W) -> io::Result<usize> {
    let labelled = inputs.len() > 1;
    let mut failures = 0;
    for path in inputs {
        match run(path) {
            Ok(secret) if labelled => {
                writeln!(out, "{}: {secret}", path.display())?
            }
            Ok(secret) => writeln!(out, "{secret}")?,
            Err(err) => {
                error!(input = %path.display(), "{err:#}");
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn exit_code(failures: usize) -> u8 {
    if failures == 0 {
        0
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = if cli.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.inputs
    };

    match solve_all(&inputs, &mut io::stdout().lock()) {
        Ok(failures) => ExitCode::from(exit_code(failures)),
        Err(err) => {
            error!(?err, "failed to write results");
            ExitCode::FAILURE
        }
    }
}
