//! The stored timestamp value.
//!
//! A point in time expressed as whole seconds since the Unix epoch. The
//! text form is the plain base-10 integer, which is also the HTTP wire
//! format in both directions.

use crate::error::{ParseResult, ParseTimestampError};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, signed 64-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnixTimestamp(pub i64);

impl UnixTimestamp {
    /// The epoch instant. Value held before the first write.
    pub const EPOCH: Self = Self(0);

    /// Current wall-clock time, truncated to whole seconds.
    ///
    /// A clock set before 1970 reads as the epoch.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Self(secs)
    }

    /// Seconds since the epoch.
    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0
    }
}

impl From<i64> for UnixTimestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<UnixTimestamp> for i64 {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnixTimestamp {
    type Err = ParseTimestampError;

    /// Strict base-10 parse: optional sign, ASCII digits, nothing else.
    fn from_str(s: &str) -> ParseResult<Self> {
        s.parse::<i64>().map(Self).map_err(|e| match e.kind() {
            IntErrorKind::Empty => ParseTimestampError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseTimestampError::OutOfRange(s.to_string())
            }
            _ => ParseTimestampError::InvalidDigit(s.to_string()),
        })
    }
}
