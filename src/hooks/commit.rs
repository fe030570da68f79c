use std::path::Path;

use crate::error::HookError;
use crate::eval::{Outcome, Params, RuleSet};
use crate::files;
use crate::rules::commit;

use super::Confirmed;

pub const FORMAT_OK: &str = "Commit message is validated [OK]\n";
pub const TYPE_OK: &str = "Commit message type is validated [OK]\n";
pub const MIN_OK: &str = "Commit minimum length for message is validated [OK]\n";
pub const MAX_OK: &str = "Commit maximum length for message is validated [OK]\n";

fn read_message(path: &Path) -> Result<String, HookError> {
    let message = files::read_text(path)?;
    log::debug!(
        "read {} bytes of commit message from {}",
        message.len(),
        path.display()
    );
    Ok(message.trim().to_string())
}

pub fn check_format(message: &str) -> Outcome {
    super::verdict(
        commit::format_ruleset().evaluate(message, &Params::default()),
        "",
        FORMAT_OK,
    )
}

pub fn check_type(message: &str) -> Outcome {
    super::verdict(
        commit::type_ruleset().evaluate(message, &Params::default()),
        "",
        TYPE_OK,
    )
}

/// Minimum then maximum bound; each passing bound reports its own line.
pub fn subject_length_ruleset() -> RuleSet {
    RuleSet::new()
        .with(Confirmed::new(commit::FIRST_LINE_MIN, MIN_OK))
        .with(Confirmed::new(commit::FIRST_LINE_MAX, MAX_OK))
}

/// Both bounds are always checked.
pub fn check_subject_length(message: &str, params: &Params) -> Outcome {
    subject_length_ruleset().evaluate(message, params)
}

pub fn run_format(path: &Path) -> Result<Outcome, HookError> {
    Ok(check_format(&read_message(path)?))
}

pub fn run_type(path: &Path) -> Result<Outcome, HookError> {
    Ok(check_type(&read_message(path)?))
}

pub fn run_subject_length(path: &Path, params: &Params) -> Result<Outcome, HookError> {
    Ok(check_subject_length(&read_message(path)?, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Status;
    use crate::rules::policy::COMMIT_FORMAT_HELP;

    #[test]
    fn format_ok() {
        assert_eq!(check_format("feat: #42 add a thing"), Outcome::pass(FORMAT_OK));
        assert_eq!(check_format("Merge branch 'dev'"), Outcome::pass(FORMAT_OK));
    }

    #[test]
    fn format_rejected_with_help() {
        let out = check_format("random text");
        assert_eq!(out, Outcome::failure(COMMIT_FORMAT_HELP));
    }

    #[test]
    fn type_checks() {
        assert_eq!(check_type("fix: off by one"), Outcome::pass(TYPE_OK));
        let out = check_type("off by one");
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.contains("must start with a type"));
    }

    #[test]
    fn short_subject_fails_min_but_reports_max() {
        let out = check_subject_length("feat", &Params::lengths(10, 50));
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.contains("insufficient number of 10 characters allowed (4)"));
        assert!(out.message.contains(MAX_OK));
        assert!(!out.message.contains(MIN_OK));
    }

    #[test]
    fn long_subject_fails_max_only() {
        let message = format!("{}\n\nbody", "a".repeat(60));
        let out = check_subject_length(&message, &Params::lengths(10, 50));
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.starts_with(MIN_OK));
        assert!(out.message.contains("exceeds 50 characters (60)"));
    }

    #[test]
    fn subject_within_bounds() {
        let out = check_subject_length("feat: #1 sensible subject", &Params::lengths(10, 50));
        assert_eq!(out, Outcome::pass(format!("{MIN_OK}{MAX_OK}")));
    }

    #[test]
    fn subject_length_ruleset_order() {
        assert_eq!(
            subject_length_ruleset().names(),
            vec!["first_line_min_length", "first_line_max_length"]
        );
    }

    #[test]
    fn empty_subject_against_zero_maximum() {
        let out = subject_length_ruleset().evaluate("", &Params::lengths(10, 0));
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.contains("insufficient"));
        assert!(out.message.ends_with(MAX_OK));
        assert!(!out.message.contains("exceeds"));
    }

    #[test]
    fn reads_and_trims_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "\n\nfeat: #7 trimmed\n\n").unwrap();
        assert!(run_format(&path).unwrap().is_success());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run_type(Path::new("/nonexistent/COMMIT_EDITMSG")).unwrap_err();
        assert!(matches!(err, HookError::FileAccess { .. }));
    }
}
