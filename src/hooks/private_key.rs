use std::path::PathBuf;

use crate::error::HookError;
use crate::eval::Outcome;
use crate::rules;

/// Scan the staged files handed over by the hook runner; silent when clean.
pub fn run<S: AsRef<str>>(paths: &[PathBuf], markers: &[S]) -> Result<Outcome, HookError> {
    log::debug!("scanning {} file(s) for private keys", paths.len());
    rules::private_key::has_private_key(paths, markers)
}
