//! hookguard: client-side git hooks that enforce repository policy.
//!
//! Every check is a named predicate returning an [`eval::Outcome`]. Predicates
//! are grouped into [`eval::RuleSet`]s and folded with OR semantics: the first
//! failure makes the whole set fail, and every violation message is kept in
//! evaluation order.
//!
//! # Architecture
//!
//! - **[`eval`]**: status/outcome algebra, `Predicate` trait, rule sets and the evaluator.
//! - **[`rules`]**: branch, commit-message, filename and private-key predicates.
//! - **[`hooks`]**: one driver per git hook, wiring collaborators to the evaluator.
//! - **[`vcs`]** / **[`files`]**: git and filesystem collaborators.
//! - **[`message`]**: pure commit-message rewrites.
//! - **[`config`]**: embedded defaults + user overlay merge.
//! - **[`logging`]**: stderr logger setup and the optional outcome record.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Error taxonomy for collaborator failures.
pub mod error;
/// Evaluation engine: status algebra, predicates, rule sets.
pub mod eval;
/// Filesystem accessor.
pub mod files;
/// Hook drivers.
pub mod hooks;
/// Logger setup and outcome recording.
pub mod logging;
/// Commit-message rewrites.
pub mod message;
/// Text and JSON rendering of hook outcomes.
pub mod report;
/// Predicates and policy constants.
pub mod rules;
/// Version-control accessor.
pub mod vcs;

use eval::{Outcome, Params};

/// Evaluate the branch rule set with default protection settings.
///
/// This is the main entry point for tests and simple usage.
pub fn validate_branchname(branch: &str) -> Outcome {
    hooks::branch::validate_branchname(branch, &Params::default())
}
