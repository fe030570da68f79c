//! Filename predicates. The subject is a path as passed by the pre-commit
//! framework; only its stem and parent directory name are inspected.

use std::path::Path;

use crate::eval::{Outcome, Params, Rule, RuleSet};
use crate::rules::policy::{SNAKE_CASE_RE, TEST_DIRECTORY_RE};

/// File stem (`src/x.py` -> `x`).
pub fn stem(subject: &str) -> &str {
    Path::new(subject)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
}

/// Stem with everything outside `[a-z0-9]` removed.
pub fn reference_name(subject: &str) -> String {
    stem(subject)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn too_short(subject: &str, params: &Params) -> Outcome {
    if reference_name(subject).chars().count() < params.min_len {
        Outcome::failure(format!(
            "Name too short (min_len={}): {subject}\n",
            params.min_len
        ))
    } else {
        Outcome::success()
    }
}

pub fn too_long(subject: &str, params: &Params) -> Outcome {
    if reference_name(subject).chars().count() > params.max_len {
        Outcome::failure(format!(
            "Name too long (max_len={}): {subject}\n",
            params.max_len
        ))
    } else {
        Outcome::success()
    }
}

pub fn is_snake_case(subject: &str, _: &Params) -> Outcome {
    if SNAKE_CASE_RE.is_match(stem(subject)) {
        Outcome::success()
    } else {
        Outcome::failure(format!("Filename is not in snake_case: {subject}\n"))
    }
}

pub fn misplaced_test_file(subject: &str, _: &Params) -> Outcome {
    let path = Path::new(subject);
    let in_test_dir = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .is_some_and(|dir| TEST_DIRECTORY_RE.is_match(dir));
    let name = stem(subject);
    if !in_test_dir || name.ends_with("_test") {
        return Outcome::success();
    }
    let suggestion = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("tests/{name}_test.{ext}"),
        None => format!("tests/{name}_test"),
    };
    Outcome::failure(format!(
        "Test file likely misplaced or misnamed, expected '{suggestion}': {subject}\n"
    ))
}

pub fn ruleset() -> RuleSet {
    RuleSet::new()
        .with(Rule::new("too_short", too_short))
        .with(Rule::new("too_long", too_long))
        .with(Rule::new("is_snake_case", is_snake_case))
        .with(Rule::new("misplaced_test_file", misplaced_test_file))
}
