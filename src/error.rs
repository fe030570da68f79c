use std::convert::Infallible;
use std::path::PathBuf;

use thiserror::Error;

/// A status token that is neither a known name nor 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid Status")]
pub struct InvalidStatus(pub String);

impl From<Infallible> for InvalidStatus {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Fatal errors raised at the collaborator boundary.
///
/// A failing predicate is never an error: it is an `Outcome` with
/// `Status::Failure`. Everything here aborts the hook with a non-zero exit.
#[derive(Debug, Error)]
pub enum HookError {
    /// git could not be run, or the command it ran failed.
    #[error("git unavailable: {0}")]
    VcsUnavailable(String),

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),

    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl HookError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HookError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
