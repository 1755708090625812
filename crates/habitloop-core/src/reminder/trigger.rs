//! Reminder trigger computation.

use chrono::{Duration, NaiveDateTime};

use crate::error::ValidationError;

/// Compute the next trigger instant for a daily reminder.
///
/// The candidate is today's date at `hour:minute` with seconds zeroed. A
/// candidate at or before `now` advances by exactly one calendar day, so
/// the returned instant is always strictly in the future relative to `now`
/// at computation time.
pub fn compute_next_trigger(
    hour: u32,
    minute: u32,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ValidationError> {
    let time = chrono::NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(ValidationError::InvalidTimeOfDay { hour, minute })?;

    let candidate = now.date().and_time(time);
    if candidate <= now {
        Ok(candidate + Duration::days(1))
    } else {
        Ok(candidate)
    }
}
