//! findmake
//!
//! Resolves the Makefile an editor should run for the file being edited, from the
//! `TM_MAKE_FILE`, `TM_PROJECT_DIRECTORY` and `TM_DIRECTORY` variables.

mod cli;
mod commands;
mod config;
mod constants;
mod env;
mod locator;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{candidates::run_candidates, find::run_find};
use config::load_config;
use env::{Layered, ProcessEnv};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Find { context } => {
            let env = Layered::new(context.to_env(&config), ProcessEnv);
            let path = run_find(&env, &config)?;
            println!("{}", path.display());
        }

        Commands::Candidates { context } => {
            let env = Layered::new(context.to_env(&config), ProcessEnv);
            run_candidates(&env, &config)?;
        }
    }

    Ok(())
}

// Logs go to stderr so the printed path stays clean for scripts.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
