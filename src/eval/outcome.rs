use std::ops::BitOr;

use serde::Serialize;

use super::Status;

/// Result of one predicate, or of a whole rule set folded together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Outcome {
    pub status: Status,
    /// Violation text, one finding per line. May be non-empty on success.
    pub message: String,
}

impl Outcome {
    /// The fold seed: `Success` with an empty message.
    pub fn success() -> Self {
        Self::default()
    }

    /// A passing outcome that still carries informational text.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
        }
    }

    /// Statuses OR together; messages concatenate in argument order.
    pub fn combine(mut self, other: Outcome) -> Outcome {
        self.status = self.status.combine(other.status);
        self.message.push_str(&other.message);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl BitOr for Outcome {
    type Output = Outcome;

    fn bitor(self, rhs: Outcome) -> Outcome {
        self.combine(rhs)
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Outcome::success(), Outcome::combine)
    }
}
