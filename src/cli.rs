use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::FinderConfig;
use crate::env::MapEnv;

/// Your CLI entrypoint definition
#[derive(Parser)]
#[command(
    name = "findmake",
    version,
    about = "Find the Makefile that belongs to the directory you are editing.",
    long_about = None
)]
pub struct Cli {
    /// Path to a findmake.toml overriding variable names or the Makefile name
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log every candidate that gets probed (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of the first Makefile that exists
    Find {
        #[command(flatten)]
        context: ContextArgs,
    },
    /// List every candidate in priority order and mark the winner
    Candidates {
        #[command(flatten)]
        context: ContextArgs,
    },
}

/// Values that take precedence over the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct ContextArgs {
    /// Explicit Makefile path (defaults to $TM_MAKE_FILE; an empty value counts as unset)
    #[arg(long, value_name = "path")]
    pub makefile: Option<PathBuf>,

    /// Ignore $TM_MAKE_FILE and search only the project root and the walk
    #[arg(long, conflicts_with = "makefile")]
    pub no_makefile: bool,

    /// Project root (defaults to $TM_PROJECT_DIRECTORY)
    #[arg(long, value_name = "dir")]
    pub project_dir: Option<PathBuf>,

    /// Directory to start the upward walk from (defaults to $TM_DIRECTORY)
    #[arg(long, value_name = "dir")]
    pub directory: Option<PathBuf>,
}

impl ContextArgs {
    /// Re-key the flags under the configured variable names so they can sit in
    /// front of the process environment.
    pub fn to_env(&self, config: &FinderConfig) -> MapEnv {
        let env = [
            (&config.override_var, &self.makefile),
            (&config.project_dir_var, &self.project_dir),
            (&config.current_dir_var, &self.directory),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|value| (key, value)))
        .fold(MapEnv::new(), |env, (key, value)| {
            env.with(key.as_str(), value.as_os_str())
        });

        if self.no_makefile {
            env.clear(config.override_var.as_str())
        } else {
            env
        }
    }
}
