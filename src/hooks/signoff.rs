use std::path::Path;

use crate::error::HookError;
use crate::eval::Outcome;
use crate::files;
use crate::message;
use crate::vcs::Vcs;

/// Clean the editor template out of the message file and sign it off as
/// the current committer.
pub fn footer_signoff(
    vcs: &dyn Vcs,
    path: &Path,
    commit_source: &str,
) -> Result<Outcome, HookError> {
    let identity = vcs.committer_identity()?;
    let original = files::read_text(path)?;
    files::backup(path)?;

    let mut content = original.clone();
    if let Some(stripped) = message::strip_template_help(&content) {
        content = stripped;
    }
    if let Some(signed) = message::add_trailer(&content, &message::signed_off_by(&identity)) {
        content = signed;
    }
    if let Some(padded) = message::add_blank_line_if_needed(&content, commit_source) {
        content = padded;
    }

    if content != original {
        files::write_text(path, &content)?;
        log::info!("signed off {} as {identity}", path.display());
    }
    Ok(Outcome::success())
}
