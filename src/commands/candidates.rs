use anyhow::Result;

use crate::{
    config::FinderConfig,
    env::EnvLookup,
    locator::{Candidate, candidates, first_match, is_regular_file},
};

pub fn run_candidates(env: &impl EnvLookup, config: &FinderConfig) -> Result<()> {
    let list = candidates(env, config);
    print!("{}", render_candidates(&list, is_regular_file));
    Ok(())
}

/// One line per candidate: a marker, the origin and the path. The winning
/// entry is marked with `*`.
fn render_candidates<F>(list: &[Candidate], probe: F) -> String
where
    F: FnMut(&std::path::Path) -> bool,
{
    if list.is_empty() {
        return "(no candidates: none of the variables are set)\n".to_string();
    }

    let winner = first_match(list, probe);

    let mut out = String::new();
    for candidate in list {
        let marker = if winner.is_some_and(|hit| std::ptr::eq(hit, candidate)) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} {:12} {}\n",
            marker,
            candidate.origin.to_string(),
            candidate.path.display()
        ));
    }
    out
}
