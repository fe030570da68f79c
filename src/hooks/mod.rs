//! Hook drivers: fetch the subject through a collaborator, evaluate the rule
//! set, and shape the outcome into what the user sees.
//!
//! Collaborator failures propagate untouched as [`HookError`](crate::error::HookError).

/// Branch-name policy (pre-commit).
pub mod branch;
/// Commit-message format, type and subject-length checks (commit-msg).
pub mod commit;
/// Filename lint (pre-commit).
pub mod filename;
/// `.pre-commit-config.yaml` presence check (pre-commit).
pub mod pre_commit;
/// Staged-diff insertion into the message file (prepare-commit-msg).
pub mod prepare;
/// Encouragement line (post-commit).
pub mod effort;
/// Private key scan (pre-commit).
pub mod private_key;
/// Template cleanup and `Signed-off-by` trailer (prepare-commit-msg).
pub mod signoff;

use crate::eval::{Outcome, Params, Predicate};

/// Prefix a failure with `header`, or replace a success with `ok`.
fn verdict(outcome: Outcome, header: &str, ok: &str) -> Outcome {
    if outcome.is_success() {
        Outcome::pass(ok)
    } else {
        Outcome::failure(format!("{header}{}", outcome.message))
    }
}

/// Append `ok` to a passing outcome; leave a failure as is.
fn with_ok(outcome: Outcome, ok: &str) -> Outcome {
    if outcome.is_success() {
        Outcome::pass(format!("{}{ok}", outcome.message))
    } else {
        outcome
    }
}

/// A predicate whose pass reports `ok` instead of staying silent.
struct Confirmed<P> {
    inner: P,
    ok: &'static str,
}

impl<P: Predicate> Confirmed<P> {
    fn new(inner: P, ok: &'static str) -> Self {
        Self { inner, ok }
    }
}

impl<P: Predicate> Predicate for Confirmed<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn check(&self, subject: &str, params: &Params) -> Outcome {
        with_ok(self.inner.check(subject, params), self.ok)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_replaces_success() {
        let out = verdict(Outcome::success(), "Rejected.\n", "[OK]\n");
        assert_eq!(out, Outcome::pass("[OK]\n"));
    }

    #[test]
    fn verdict_prefixes_failure() {
        let out = verdict(Outcome::failure(" - bad\n"), "Rejected.\n", "[OK]\n");
        assert_eq!(out, Outcome::failure("Rejected.\n - bad\n"));
    }

    #[test]
    fn confirmed_keeps_name_and_failure() {
        use crate::eval::Rule;

        fn short(subject: &str, _: &Params) -> Outcome {
            if subject.len() < 3 {
                Outcome::success()
            } else {
                Outcome::failure("too long\n")
            }
        }
        let confirmed = Confirmed::new(Rule::new("short", short), "short [OK]\n");
        assert_eq!(confirmed.name(), "short");
        let params = Params::default();
        assert_eq!(confirmed.check("ab", &params), Outcome::pass("short [OK]\n"));
        assert_eq!(confirmed.check("abcd", &params), Outcome::failure("too long\n"));
    }

    #[test]
    fn with_ok_only_on_success() {
        assert_eq!(with_ok(Outcome::success(), "ok\n"), Outcome::pass("ok\n"));
        assert_eq!(
            with_ok(Outcome::failure("bad\n"), "ok\n"),
            Outcome::failure("bad\n")
        );
    }
}
