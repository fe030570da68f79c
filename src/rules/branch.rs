//! Branch-name predicates.
//!
//! Every enabled predicate runs, so a protected branch that also breaks the
//! naming syntax reports both problems.

use crate::eval::{Outcome, Params, Rule, RuleSet};
use crate::rules::policy::{
    BRANCH_SYNTAX_HELP, BRANCHNAME_CHARSET_RE, BRANCHNAME_MAX_LEN, BRANCHNAME_MIN_LEN,
    BRANCHNAME_REFUSED_RE, BRANCHNAME_RE, PROTECTED_DEV, PROTECTED_MAIN, PROTECTED_TAGS,
};

/// Between 3 and 255 characters, all word characters, `/`, `#` or `-`.
pub fn length_valid(subject: &str, _: &Params) -> Outcome {
    let count = subject.chars().count();
    if (BRANCHNAME_MIN_LEN..=BRANCHNAME_MAX_LEN).contains(&count)
        && BRANCHNAME_CHARSET_RE.is_match(subject)
    {
        Outcome::success()
    } else {
        Outcome::failure(format!(
            " - Length is invalid, must be {BRANCHNAME_MIN_LEN}-{BRANCHNAME_MAX_LEN} chars ({count})\n"
        ))
    }
}

fn protected(subject: &str, enabled: bool, names: &[&str]) -> Outcome {
    if enabled && names.contains(&subject) {
        Outcome::failure(format!(" - Branch '{subject}' is protected\n"))
    } else {
        Outcome::success()
    }
}

pub fn is_protected_main(subject: &str, params: &Params) -> Outcome {
    protected(subject, params.protected_main, PROTECTED_MAIN)
}

pub fn is_protected_dev(subject: &str, params: &Params) -> Outcome {
    protected(subject, params.protected_dev, PROTECTED_DEV)
}

pub fn is_protected_tags(subject: &str, params: &Params) -> Outcome {
    protected(subject, params.protected_tags, PROTECTED_TAGS)
}

pub fn is_refused(subject: &str, _: &Params) -> Outcome {
    if BRANCHNAME_REFUSED_RE.is_match(subject) {
        Outcome::failure(" - Can not be WIP (Work in Progress)\n")
    } else {
        Outcome::success()
    }
}

pub fn matches_syntax(subject: &str, _: &Params) -> Outcome {
    if BRANCHNAME_RE.is_match(subject) {
        Outcome::success()
    } else {
        Outcome::failure(BRANCH_SYNTAX_HELP)
    }
}

/// Branch rules in reporting order.
pub fn ruleset() -> RuleSet {
    RuleSet::new()
        .with(Rule::new("length_valid", length_valid))
        .with(Rule::new("is_protected_main", is_protected_main))
        .with(Rule::new("is_protected_dev", is_protected_dev))
        .with(Rule::new("is_protected_tags", is_protected_tags))
        .with(Rule::new("is_refused", is_refused))
        .with(Rule::new("matches_syntax", matches_syntax))
}
