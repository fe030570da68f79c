use std::path::Path;

use crate::eval::Outcome;

pub const CONFIG_FILE: &str = ".pre-commit-config.yaml";
pub const NOT_INSTALLED: &str =
    "pre-commit configuration detected, but `pre-commit install` was never run\n";

/// Fail when `dir` carries no pre-commit configuration.
pub fn check_installed(dir: &Path) -> Outcome {
    let config = dir.join(CONFIG_FILE);
    log::debug!("looking for {}", config.display());
    if config.is_file() {
        Outcome::success()
    } else {
        Outcome::failure(NOT_INSTALLED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "repos: []\n").unwrap();
        assert!(check_installed(dir.path()).is_success());
    }

    #[test]
    fn missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(check_installed(dir.path()), Outcome::failure(NOT_INSTALLED));
    }
}
