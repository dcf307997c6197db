use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sequence_ops::demo::{self, DemoOptions};
use sequence_ops::observability::{PipelineObserver, StdErrObserver, TracingObserver};
use tracing_subscriber::EnvFilter;

/// Decide who gets into the bar: filter by age, let every other person through, number the
/// queue, and report the group's average age.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Roster file (.json or .csv). Uses the built-in group when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Minimum age to be admitted
    #[arg(long, default_value_t = 21)]
    min_age: i64,

    /// Let in every N-th admitted person
    #[arg(long, default_value_t = 2, value_name = "N")]
    keep_every: usize,

    /// Log each pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,

    /// With --verbose, print stages as plain lines instead of tracing events
    #[arg(long, requires = "verbose")]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose && !cli.plain {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let roster = match &cli.input {
        Some(path) => demo::load_roster(path)
            .with_context(|| format!("Unable to load roster: {}", path.display()))?,
        None => demo::default_roster(),
    };
    tracing::debug!(people = roster.len(), "roster loaded");

    let options = DemoOptions {
        min_age: cli.min_age,
        keep_every: cli.keep_every,
    };
    let observer: &dyn PipelineObserver = if cli.plain {
        &StdErrObserver
    } else {
        &TracingObserver
    };
    let report = demo::run(&roster, &options, Some(observer))
        .context("Unable to run pipeline")?;

    println!("{}", demo::render_line(&roster));
    println!("{}", demo::render_line(&report.admitted));
    println!("{}", demo::render_line(&report.queue));
    println!("{}", demo::render_line(&report.names));
    println!("total age: {}", report.total_age);
    match report.average_age {
        Some(avg) => println!("average age: {avg}"),
        None => println!("average age: n/a"),
    }

    Ok(())
}
