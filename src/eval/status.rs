use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::Serialize;

pub use crate::error::InvalidStatus;

/// Binary result of a check. `Success` is the identity of [`Status::combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success = 0,
    Failure = 1,
}

impl Status {
    /// Logical OR over the two-element domain.
    pub fn combine(self, other: Status) -> Status {
        match (self, other) {
            (Status::Success, Status::Success) => Status::Success,
            _ => Status::Failure,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

/// Parse a textual status token: `success`/`failure` in any case, or `0`/`1`.
pub fn parse(token: &str) -> Result<Status, InvalidStatus> {
    let normalized = token.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "success" | "0" => Ok(Status::Success),
        "failure" | "1" => Ok(Status::Failure),
        _ => Err(InvalidStatus(token.to_string())),
    }
}

/// Combine two status-like values, either typed or raw 0/1 codes, in any order.
///
/// ```
/// use hookguard::eval::{status, Status};
///
/// assert_eq!(status::combine(Status::Success, 1i32), Ok(Status::Failure));
/// assert_eq!(status::combine(0i32, Status::Success), Ok(Status::Success));
/// assert!(status::combine(2i32, Status::Success).is_err());
/// ```
pub fn combine<A, B>(a: A, b: B) -> Result<Status, InvalidStatus>
where
    A: TryInto<Status>,
    A::Error: Into<InvalidStatus>,
    B: TryInto<Status>,
    B::Error: Into<InvalidStatus>,
{
    let a = a.try_into().map_err(Into::into)?;
    let b = b.try_into().map_err(Into::into)?;
    Ok(a.combine(b))
}

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Status {
    type Error = InvalidStatus;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl TryFrom<i64> for Status {
    type Error = InvalidStatus;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Success),
            1 => Ok(Status::Failure),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

impl TryFrom<i32> for Status {
    type Error = InvalidStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Status::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for Status {
    type Error = InvalidStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Status::try_from(i64::from(value))
    }
}

impl From<bool> for Status {
    /// `true` means the check failed.
    fn from(failed: bool) -> Self {
        if failed { Status::Failure } else { Status::Success }
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        self.combine(rhs)
    }
}

impl BitOrAssign for Status {
    fn bitor_assign(&mut self, rhs: Status) {
        *self = self.combine(rhs);
    }
}
