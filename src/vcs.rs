//! Version-control accessor. Hooks depend on the [`Vcs`] trait so they can be
//! exercised without a real repository.

use std::path::PathBuf;
use std::process::Command;

use crate::error::HookError;

pub trait Vcs {
    /// Short name of the checked-out branch.
    fn branch_name(&self) -> Result<String, HookError>;

    /// Staged changes as `git diff --cached --name-status` lines.
    fn diff_summary(&self) -> Result<String, HookError>;

    /// Committer as `Name <email>`.
    fn committer_identity(&self) -> Result<String, HookError>;
}

/// [`Vcs`] backed by the `git` binary. Each call runs one subprocess, no retry.
#[derive(Debug, Default, Clone)]
pub struct Git {
    workdir: Option<PathBuf>,
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `workdir` instead of the current directory.
    #[cfg(test)]
    pub(crate) fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, HookError> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        log::debug!("running git {}", args.join(" "));
        let output = cmd
            .output()
            .map_err(|e| HookError::VcsUnavailable(format!("failed to run git: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HookError::VcsUnavailable(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for Git {
    /// `symbolic-ref` also names an unborn branch; a detached HEAD falls
    /// back to `rev-parse`, which prints `HEAD`.
    fn branch_name(&self) -> Result<String, HookError> {
        match self.run(&["symbolic-ref", "--short", "HEAD"]) {
            Ok(name) => Ok(name),
            Err(e) => {
                log::debug!("symbolic-ref failed, trying rev-parse: {e}");
                self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
            }
        }
    }

    fn diff_summary(&self) -> Result<String, HookError> {
        self.run(&["diff", "--cached", "--name-status", "-r"])
    }

    fn committer_identity(&self) -> Result<String, HookError> {
        let ident = self.run(&["var", "GIT_COMMITTER_IDENT"])?;
        identity_from_ident(&ident).ok_or_else(|| {
            HookError::VcsUnavailable(format!("unexpected GIT_COMMITTER_IDENT: {ident}"))
        })
    }
}

/// `Name <email> 1700000000 +0000` -> `Name <email>`.
pub fn identity_from_ident(ident: &str) -> Option<String> {
    let (who, _) = ident.split_once('>')?;
    Some(format!("{}>", who.trim()))
}
