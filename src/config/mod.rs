use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{CURRENT_DIR_VAR, MAKEFILE_NAME, OVERRIDE_VAR, PROJECT_DIR_VAR};

/// Which variables to read and which file name to look for.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    pub override_var: String,
    pub project_dir_var: String,
    pub current_dir_var: String,
    pub makefile_name: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            override_var: OVERRIDE_VAR.to_string(),
            project_dir_var: PROJECT_DIR_VAR.to_string(),
            current_dir_var: CURRENT_DIR_VAR.to_string(),
            makefile_name: MAKEFILE_NAME.to_string(),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FinderConfig> {
    let Some(path) = path else {
        return Ok(FinderConfig::default());
    };

    let toml_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: FinderConfig = toml::from_str(&toml_str).with_context(|| {
        format!(
            "🛑 Invalid config found at {}\n\
                 → Known keys: override_var, project_dir_var, current_dir_var, makefile_name\n\
                 → Every value must be a quoted string.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config in {}", path.display()))?;

    Ok(config)
}

fn validate_config(config: &FinderConfig) -> Result<()> {
    for (key, value) in [
        ("override_var", &config.override_var),
        ("project_dir_var", &config.project_dir_var),
        ("current_dir_var", &config.current_dir_var),
    ] {
        if value.trim().is_empty() {
            anyhow::bail!("'{}' must name an environment variable", key);
        }
    }

    let name = config.makefile_name.as_str();
    if name.is_empty() || name == "." || name == ".." || name.contains(std::path::is_separator) {
        anyhow::bail!(
            "🛑 makefile_name must be a bare file name, got '{}'\n\
             → Use something like \"Makefile\" or \"GNUmakefile\".",
            name
        );
    }

    Ok(())
}
