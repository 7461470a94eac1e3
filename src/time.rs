use core::fmt;

use chrono::{DateTime, Utc};

use crate::Ordered;

/// Point-in-time wrapper implementing [`Ordered`].
///
/// Comparison delegates to [`DateTime`], i.e. two values are equal
/// when they denote the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde1", serde(transparent))]
pub struct Time(pub DateTime<Utc>);

impl Ordered for Time {
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(value: DateTime<Utc>) -> Self {
        Time(value)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(value: Time) -> Self {
        value.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
