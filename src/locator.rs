//! Makefile lookup for an editor context.
//!
//! Candidates are tried in priority order:
//!
//! 1. the explicit override path,
//! 2. `<project root>/Makefile`,
//! 3. `<dir>/Makefile` for each directory from the current one up to (but not
//!    including) the project root.
//!
//! The first candidate that is a regular file wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::FinderConfig;
use crate::env::EnvLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Override,
    ProjectRoot,
    Walk,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Origin::Override => "override",
            Origin::ProjectRoot => "project-root",
            Origin::Walk => "walk",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub origin: Origin,
}

impl Candidate {
    fn new(path: PathBuf, origin: Origin) -> Self {
        Self { path, origin }
    }
}

/// Build the ordered candidate list. Unset values contribute nothing, and
/// duplicates are kept since the earliest entry always wins anyway.
pub fn candidates(env: &impl EnvLookup, config: &FinderConfig) -> Vec<Candidate> {
    let name = config.makefile_name.as_str();
    let project_root = env.get(&config.project_dir_var).map(PathBuf::from);

    let mut list: Vec<Candidate> = [
        env.get(&config.override_var)
            .map(|path| Candidate::new(PathBuf::from(path), Origin::Override)),
        project_root
            .as_ref()
            .map(|root| Candidate::new(root.join(name), Origin::ProjectRoot)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut dir = env.get(&config.current_dir_var).map(PathBuf::from);
    while let Some(current) = dir {
        if !should_visit(&current, project_root.as_deref()) {
            break;
        }
        list.push(Candidate::new(current.join(name), Origin::Walk));
        dir = current.parent().map(Path::to_path_buf);
    }

    list
}

// Stop at the project root, at the filesystem root, or on a relative path.
fn should_visit(dir: &Path, project_root: Option<&Path>) -> bool {
    if project_root == Some(dir) {
        return false;
    }
    dir.has_root() && dir.parent().is_some()
}

/// Return the first candidate accepted by `probe`. Nothing after the hit is probed.
pub fn first_match<'a, F>(candidates: &'a [Candidate], mut probe: F) -> Option<&'a Candidate>
where
    F: FnMut(&Path) -> bool,
{
    candidates.iter().find(|candidate| {
        let hit = probe(candidate.path.as_path());
        debug!(
            path = %candidate.path.display(),
            origin = %candidate.origin,
            hit,
            "probed Makefile candidate"
        );
        hit
    })
}

pub fn find_makefile_with<F>(env: &impl EnvLookup, config: &FinderConfig, probe: F) -> Option<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    let list = candidates(env, config);
    debug!(count = list.len(), "built Makefile candidate list");
    first_match(&list, probe).map(|candidate| candidate.path.clone())
}

/// Find the Makefile for the context in `env`, checking the real filesystem.
pub fn find_makefile(env: &impl EnvLookup, config: &FinderConfig) -> Option<PathBuf> {
    find_makefile_with(env, config, is_regular_file)
}

pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}
