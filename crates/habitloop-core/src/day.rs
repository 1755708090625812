//! Calendar-day identifiers.
//!
//! A `DayKey` names a calendar day (`YYYY-MM-DD`) independent of
//! time-of-day. Day boundaries are detected by comparing keys, never by
//! comparing instants, so a rollover at 23:59 and one at 00:01 land on
//! different keys regardless of how little wall-clock time separates them.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date-only identifier used to detect day boundaries.
///
/// Serializes as the plain `YYYY-MM-DD` string, which is also the persisted
/// form of the `lastResetDate` blob and the `date` field of history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// The calendar day containing `now` (local wall-clock time).
    pub fn of(now: NaiveDateTime) -> Self {
        DayKey(now.date())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day.
    pub fn next(&self) -> Self {
        DayKey(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(DayKey)
    }
}
