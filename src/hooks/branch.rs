use crate::error::HookError;
use crate::eval::{Outcome, Params};
use crate::rules;
use crate::vcs::Vcs;

pub const REJECTED: &str =
    "Your commit was rejected due to branching name incompatible with rules.\n";
pub const OK: &str = "Branching name rules. [OK]\n";

/// Evaluate the branch rule set against an already known branch name.
pub fn validate_branchname(branch: &str, params: &Params) -> Outcome {
    super::verdict(rules::branch::ruleset().evaluate(branch, params), REJECTED, OK)
}

/// Validate `branch`, or the checked-out branch when none is given.
/// Returns the name that was checked alongside the outcome.
pub fn run(
    vcs: &dyn Vcs,
    branch: Option<&str>,
    params: &Params,
) -> Result<(String, Outcome), HookError> {
    let branch = match branch {
        Some(name) => name.to_string(),
        None => vcs.branch_name()?,
    };
    log::debug!("validating branch name {branch:?}");
    let outcome = validate_branchname(&branch, params);
    Ok((branch, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Status;
    use crate::hooks::fake::FakeVcs;
    use crate::rules::policy::BRANCH_SYNTAX_HELP;

    #[test]
    fn wip_reports_refusal_and_syntax() {
        let out = validate_branchname("WIP", &Params::default());
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.starts_with(REJECTED));
        assert!(out.message.contains("Can not be WIP"));
        assert!(out.message.contains(BRANCH_SYNTAX_HELP));
        let refused = out.message.find("Can not be WIP").unwrap();
        let syntax = out.message.find(":: Permitted syntaxes").unwrap();
        assert!(refused < syntax);
    }

    #[test]
    fn issue_branch_passes() {
        let out = validate_branchname("123-jesus-loves-you", &Params::default());
        assert_eq!(out, Outcome::pass(OK));
    }

    #[test]
    fn protected_main_reports_protection_and_syntax() {
        let out = validate_branchname("main", &Params::default());
        assert_eq!(out.status, Status::Failure);
        assert!(out.message.contains("Branch 'main' is protected"));
        assert!(out.message.contains(":: Permitted syntaxes"));
    }

    #[test]
    fn unprotected_main_still_fails_syntax() {
        let params = Params {
            protected_main: false,
            ..Params::default()
        };
        let out = validate_branchname("main", &params);
        assert_eq!(out.status, Status::Failure);
        assert!(!out.message.contains("protected"));
        assert!(out.message.contains(":: Permitted syntaxes"));
    }

    #[test]
    fn reads_current_branch() {
        let vcs = FakeVcs {
            branch: Some("feat/issue#42".into()),
            ..FakeVcs::default()
        };
        let (branch, out) = run(&vcs, None, &Params::default()).unwrap();
        assert_eq!(branch, "feat/issue#42");
        assert!(out.is_success());
    }

    #[test]
    fn explicit_branch_skips_vcs() {
        let vcs = FakeVcs::default();
        let (branch, out) = run(&vcs, Some("fix/epoch#1627890123"), &Params::default()).unwrap();
        assert_eq!(branch, "fix/epoch#1627890123");
        assert!(out.is_success());
    }

    #[test]
    fn vcs_failure_propagates() {
        let err = run(&FakeVcs::default(), None, &Params::default()).unwrap_err();
        assert!(matches!(err, HookError::VcsUnavailable(_)));
    }
}
