use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::{config::FinderConfig, env::EnvLookup, locator::find_makefile};

pub fn run_find(env: &impl EnvLookup, config: &FinderConfig) -> Result<PathBuf> {
    match find_makefile(env, config) {
        Some(path) => {
            info!(path = %path.display(), "found Makefile");
            Ok(path)
        }
        None => anyhow::bail!(
            "🛑 No {} found.\n\
             → Checked ${}, ${}/{} and every directory from ${} up to the project root.\n\
             → Run `findmake candidates` to see each path that was tried.",
            config.makefile_name,
            config.override_var,
            config.project_dir_var,
            config.makefile_name,
            config.current_dir_var
        ),
    }
}
