use anyhow::Context;
use clap::Parser;
use stackstate::io::writer;
use stackstate::{JsonFileReader, StateCalculator};
use std::io::stdout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stackstate")]
#[command(about = "Compute final component health states from a topology and an event chain")]
struct Args {
    /// Path to the initial-state JSON file
    state: PathBuf,

    /// Path to the events JSON file
    events: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let reader = JsonFileReader::new(&args.state, &args.events);
    let graph = reader
        .read_initial_state()
        .with_context(|| format!("reading initial state from {}", args.state.display()))?;
    let events = reader
        .read_events()
        .with_context(|| format!("reading events from {}", args.events.display()))?;

    let graph = StateCalculator::new().process_events(graph, events);

    writer::write(&graph, stdout().lock())?;
    Ok(())
}
