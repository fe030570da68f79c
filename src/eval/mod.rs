//! Rule evaluation: predicates, rule sets and outcome aggregation.
//!
//! Nothing in here performs I/O or reads process-wide state. A rule set is
//! evaluated against a subject string that a collaborator already fetched.

pub mod outcome;
pub mod params;
pub mod status;

pub use outcome::Outcome;
pub use params::Params;
pub use status::Status;

/// One named policy check.
///
/// Implementations must be pure: the same subject and params always yield
/// the same outcome.
pub trait Predicate: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, subject: &str, params: &Params) -> Outcome;
}

/// A predicate backed by a plain function.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    check: fn(&str, &Params) -> Outcome,
}

impl Rule {
    pub const fn new(name: &'static str, check: fn(&str, &Params) -> Outcome) -> Self {
        Self { name, check }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

impl Predicate for Rule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, subject: &str, params: &Params) -> Outcome {
        (self.check)(subject, params)
    }
}

/// Ordered list of predicates. Order fixes the order of violation messages.
#[derive(Default)]
pub struct RuleSet {
    predicates: Vec<Box<dyn Predicate>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RuleSet::push`].
    pub fn with(mut self, predicate: impl Predicate + 'static) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: impl Predicate + 'static) {
        self.predicates.push(Box::new(predicate));
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Predicate names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    pub fn evaluate(&self, subject: &str, params: &Params) -> Outcome {
        evaluate(self, subject, params)
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Run every predicate in order and fold the outcomes, seeded with success.
///
/// There is no short-circuit: a failing predicate never stops the ones
/// after it, so every violation is reported in one pass.
pub fn evaluate(ruleset: &RuleSet, subject: &str, params: &Params) -> Outcome {
    ruleset
        .predicates
        .iter()
        .map(|p| p.check(subject, params))
        .fold(Outcome::success(), Outcome::combine)
}
