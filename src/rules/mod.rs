//! Concrete predicates and the rule sets built from them.

/// Branch-name predicates.
pub mod branch;
/// Commit-message predicates.
pub mod commit;
/// Filename predicates.
pub mod filename;
/// Policy constants: regexes, protected names, key markers, help texts.
pub mod policy;
/// Private key marker scan.
pub mod private_key;
