//! Commit-message predicates.
//!
//! The subject is the full commit message. Length predicates only look at the
//! first line.

use crate::eval::{Outcome, Params, Rule, RuleSet};
use crate::rules::policy::{
    COMMIT_FORMAT_HELP, COMMIT_TYPE_RE, COMMITFORMAT_RE, SUBJECT_MAX_CEILING, SUBJECT_MIN_CEILING,
};

/// First line of a message, without the line break.
pub fn first_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default().trim_end_matches('\r')
}

/// Effective minimum: the requested value, never above the ceiling.
pub fn effective_min(requested: usize) -> usize {
    requested.min(SUBJECT_MIN_CEILING)
}

/// Effective maximum: the requested value, never above the ceiling.
pub fn effective_max(requested: usize) -> usize {
    requested.min(SUBJECT_MAX_CEILING)
}

pub fn type_prefix_valid(subject: &str, _: &Params) -> Outcome {
    if COMMIT_TYPE_RE.is_match(subject.trim()) {
        Outcome::success()
    } else {
        Outcome::failure("Error: Commit message must start with a type (e.g., feat:, fix:)\n")
    }
}

pub fn conventional_format_valid(subject: &str, _: &Params) -> Outcome {
    if COMMITFORMAT_RE.is_match(subject.trim()) {
        Outcome::success()
    } else {
        Outcome::failure(COMMIT_FORMAT_HELP)
    }
}

pub fn first_line_min_length(subject: &str, params: &Params) -> Outcome {
    let min = effective_min(params.min_len);
    let actual = first_line(subject).chars().count();
    if actual >= min {
        Outcome::success()
    } else {
        Outcome::failure(format!(
            "Error: Commit subject line has an insufficient number of {min} characters allowed ({actual}).\n"
        ))
    }
}

pub fn first_line_max_length(subject: &str, params: &Params) -> Outcome {
    let max = effective_max(params.max_len);
    let actual = first_line(subject).chars().count();
    if actual <= max {
        Outcome::success()
    } else {
        Outcome::failure(format!(
            "Error: Commit subject line exceeds {max} characters ({actual}).\n"
        ))
    }
}

pub fn type_ruleset() -> RuleSet {
    RuleSet::new().with(Rule::new("type_prefix_valid", type_prefix_valid))
}

pub fn format_ruleset() -> RuleSet {
    RuleSet::new().with(Rule::new(
        "conventional_format_valid",
        conventional_format_valid,
    ))
}

/// Subject-line bounds. The commit-msg hook pairs each with its own OK line.
pub const FIRST_LINE_MIN: Rule = Rule::new("first_line_min_length", first_line_min_length);
pub const FIRST_LINE_MAX: Rule = Rule::new("first_line_max_length", first_line_max_length);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Predicate, Status};

    fn subject_params() -> Params {
        Params::lengths(10, 50)
    }

    #[test]
    fn first_line_stops_at_newline() {
        assert_eq!(first_line("feat: x\n\nbody"), "feat: x");
        assert_eq!(first_line("feat: x\r\nbody"), "feat: x");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn clamps() {
        assert_eq!(effective_min(4), 4);
        assert_eq!(effective_min(15), 10);
        assert_eq!(effective_max(5), 5);
        assert_eq!(effective_max(72), 50);
    }

    #[test]
    fn type_prefix_accepts_known_types() {
        for msg in [
            "fix: fixed a fake file",
            "feat: fake feature",
            "chore: fake feature",
            "docs: fake feature",
            "style: fake feature",
            "refactor: fake feature",
            "test: fake feature",
            "perf: fake feature",
            "ci: fake feature",
            "build: fake feature",
            "revert: fake feature",
            "feat(ui): scoped",
            "fix!: breaking",
            "  feat: leading whitespace",
        ] {
            assert!(type_prefix_valid(msg, &Params::default()).is_success(), "{msg}");
        }
    }

    #[test]
    fn type_prefix_rejects_unknown_or_wrong_case() {
        let long = "a".repeat(51);
        for msg in ["added: bcd.txt", "Feat: upper", "feat missing colon", "", long.as_str()] {
            let out = type_prefix_valid(msg, &Params::default());
            assert_eq!(out.status, Status::Failure, "{msg}");
            assert!(out.message.contains("must start with a type"));
        }
    }

    #[test]
    fn conventional_format_accepts_examples() {
        for msg in [
            "feature: #1234 feature example comment",
            "feat(docs): #1234 feature example comment",
            "fix(ui): #4321 bugfix example comment",
            "fix!: #4321 chore example comment with possible breaking change",
            "bugfix!: #4321 chore example comment",
            "refactor(chore)!: #4321 breaking",
            "chore(fix)!: #4321 drop support\n\nBREAKING CHANGE: gone",
            "FEAT: #1 case does not matter",
            "Merge branch 'main' into 1-topic",
            "Bumping version 1.2.3",
            "Revert \"feat: #1 x\"",
            "feat: #12 trailing newline is trimmed\n",
        ] {
            assert!(
                conventional_format_valid(msg, &Params::default()).is_success(),
                "{msg}"
            );
        }
    }

    #[test]
    fn conventional_format_rejects_missing_issue() {
        for msg in ["feat: no issue", "commited this.", "feat #1 no colon", ""] {
            let out = conventional_format_valid(msg, &Params::default());
            assert_eq!(out.status, Status::Failure, "{msg}");
            assert_eq!(out.message, COMMIT_FORMAT_HELP);
        }
    }

    #[test]
    fn min_length_reports_effective_bound() {
        let out = first_line_min_length("feat", &subject_params());
        assert_eq!(out.status, Status::Failure);
        assert!(
            out.message
                .contains("insufficient number of 10 characters allowed (4)")
        );
        assert!(first_line_min_length(&"b".repeat(10), &subject_params()).is_success());
    }

    #[test]
    fn min_length_never_above_ceiling() {
        let out = first_line_min_length(&"c".repeat(12), &Params::lengths(15, 50));
        assert!(out.is_success());
        assert!(first_line_min_length("feat", &Params::lengths(4, 50)).is_success());
    }

    #[test]
    fn max_length() {
        assert!(first_line_max_length(&"a".repeat(50), &subject_params()).is_success());
        let out = first_line_max_length(&"feat".repeat(15), &subject_params());
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.contains("exceeds 50 characters (60)"));
        let out = first_line_max_length(&"a".repeat(60), &Params::lengths(10, 72));
        assert!(out.message.contains("exceeds 50 characters"));
        assert!(!first_line_max_length("feat!!", &Params::lengths(4, 5)).is_success());
    }

    #[test]
    fn max_length_ignores_body() {
        let msg = format!("feat: short\n\n{}", "x".repeat(200));
        assert!(first_line_max_length(&msg, &subject_params()).is_success());
    }

    #[test]
    fn bound_rules_are_named() {
        assert_eq!(FIRST_LINE_MIN.name(), "first_line_min_length");
        assert_eq!(FIRST_LINE_MAX.name(), "first_line_max_length");
        assert!(!FIRST_LINE_MIN.check("feat", &subject_params()).is_success());
        assert!(FIRST_LINE_MAX.check("feat", &subject_params()).is_success());
    }
}
