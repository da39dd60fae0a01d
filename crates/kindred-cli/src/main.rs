//! Kindred CLI - Command-line interface for exploring family relationships.

use clap::Parser;
use kindred_cli::commands;
use kindred_cli::{Cli, CliError, Config, Formatter};
use kindred_engine::CyclePolicy;
use kindred_store::MemoryStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so table and JSON output stay clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> kindred_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            // First run writes the defaults so there is a file to edit
            let path = Config::path()?;
            let config = Config::load_from(&path)?;
            if !path.exists() {
                if let Err(e) = config.save_to(&path) {
                    tracing::debug!("Could not write default config: {}", e);
                }
            }
            config
        }
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let family = cli
        .family
        .or(config.settings.family)
        .ok_or_else(|| CliError::InvalidInput("No family file given; pass --family <file.json>".into()))?;
    let store = MemoryStore::load(&family)?;
    tracing::debug!(path = %family.display(), people = store.len(), "Loaded family");

    let mut engine = config.engine;
    if cli.prune_cycles {
        engine.cycle_policy = CyclePolicy::Prune;
    }

    let output = commands::execute(cli.command, &store, &engine, &formatter)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
