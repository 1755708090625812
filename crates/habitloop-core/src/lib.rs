//! # Habitloop Core Library
//!
//! This library provides the core business logic for the Habitloop habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Rollover Engine**: A pure day-boundary transition that snapshots
//!   completed habits into history and advances or resets streaks; the
//!   caller invokes it on every screen focus and persists the result
//! - **Reminder Scheduler**: A state machine that computes the next trigger
//!   instant and drives the external notification collaborator through
//!   permission checks and a single schedule call
//! - **Storage**: SQLite-backed key→JSON blob store and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`rollover`]: The day-boundary transition
//! - [`ReminderScheduler`]: Scheduling state machine over a
//!   [`NotificationGateway`]
//! - [`Store`]: Blob persistence with warn-and-default fallback
//! - [`Config`]: Application configuration management

pub mod day;
pub mod error;
pub mod events;
pub mod goal;
pub mod habit;
pub mod history;
pub mod reminder;
pub mod storage;

pub use day::DayKey;
pub use error::{CoreError, ReminderError, StorageError, ValidationError};
pub use events::Event;
pub use goal::{Goal, GoalList};
pub use habit::{rollover, Habit, HabitList, Rollover};
pub use history::{HistoryEntry, HistoryLog};
pub use reminder::{
    compute_next_trigger, NotificationGateway, PermissionStatus, ReminderConfig,
    ReminderScheduler, ReminderState, REMINDER_TITLE,
};
pub use storage::{Config, Store};
