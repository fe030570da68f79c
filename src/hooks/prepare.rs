use std::path::Path;

use crate::error::HookError;
use crate::eval::Outcome;
use crate::files;
use crate::message;
use crate::vcs::Vcs;

/// Put the staged diff summary into the message file, above git's comments.
///
/// Amends, merges and `-m` commits leave the file untouched.
pub fn insert_diff(
    vcs: &dyn Vcs,
    path: &Path,
    commit_source: &str,
    commit_hash: &str,
) -> Result<Outcome, HookError> {
    if !message::should_insert_diff(commit_source, commit_hash) {
        log::debug!("skipping diff insertion for source {commit_source:?} sha {commit_hash:?}");
        return Ok(Outcome::success());
    }
    let diff = vcs.diff_summary()?;
    let content = files::read_text(path)?;
    files::backup(path)?;
    match message::insert_diff(&content, &diff) {
        Some(updated) => {
            files::write_text(path, &updated)?;
            log::info!("inserted staged diff into {}", path.display());
        }
        None => log::debug!("no diff inserted into {}", path.display()),
    }
    Ok(Outcome::success())
}
