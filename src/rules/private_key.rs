//! Best-effort private key detection: exact marker substrings, nothing more.

use std::path::Path;

use crate::error::HookError;
use crate::eval::Outcome;
use crate::files;

/// First marker found in `content`, if any.
pub fn find_marker<'m, S: AsRef<str>>(content: &[u8], markers: &'m [S]) -> Option<&'m str> {
    markers
        .iter()
        .map(AsRef::as_ref)
        .filter(|m| !m.is_empty())
        .find(|m| content.windows(m.len()).any(|w| w == m.as_bytes()))
}

/// Scan every path and list each one holding key material.
///
/// Unreadable files abort the scan with an error rather than being skipped.
pub fn has_private_key<P, S>(paths: &[P], markers: &[S]) -> Result<Outcome, HookError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut outcome = Outcome::success();
    for path in paths {
        let path = path.as_ref();
        let content = files::read_bytes(path)?;
        if find_marker(&content, markers).is_some() {
            outcome = outcome.combine(Outcome::failure(format!(
                "Private key found: {}\n",
                path.display()
            )));
        }
    }
    Ok(outcome)
}
