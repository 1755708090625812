use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::DayKey;

/// Every state change in the system produces an Event.
/// The CLI prints them as JSON; a GUI shell would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A day boundary was crossed and the habit collection rolled over.
    RolloverCompleted {
        /// The day that ended.
        date: DayKey,
        /// Names snapshotted into history (empty if nothing was completed).
        completed: Vec<String>,
        at: DateTime<Utc>,
    },
    HabitAdded {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    HabitRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    HabitRenamed {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    HabitToggled {
        id: String,
        completed: bool,
        streak: u32,
        at: DateTime<Utc>,
    },
    GoalAdded {
        id: String,
        name: String,
        target: u32,
        at: DateTime<Utc>,
    },
    GoalRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    GoalProgress {
        id: String,
        completed: u32,
        target: u32,
        at: DateTime<Utc>,
    },
    ReminderScheduled {
        trigger: NaiveDateTime,
        message: String,
        at: DateTime<Utc>,
    },
    /// Permission was denied; the reminder is saved but not scheduled.
    ReminderDenied {
        at: DateTime<Utc>,
    },
    ReminderCancelled {
        at: DateTime<Utc>,
    },
}
