//! Reminder scheduling state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PermissionCheck -> (Denied | Granted) -> Scheduled
//! ```
//!
//! Every `schedule()` call restarts from `Idle` and first issues an
//! unconditional cancel of anything previously scheduled -- at most one
//! reminder is active at a time, last write wins. Denied is terminal for
//! the attempt: nothing is scheduled and the prior reminder stays
//! cancelled (no rollback).
//!
//! Notification delivery itself is an external collaborator behind
//! [`NotificationGateway`]; the scheduler only decides what to ask of it
//! and in what order.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ReminderError;

/// Notification title used for every scheduled reminder.
pub const REMINDER_TITLE: &str = "Habit Reminder";

/// Permission state reported by the notification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not been asked yet.
    Undetermined,
}

/// The external notification collaborator.
///
/// Implementations are expected to be cheap to call; the scheduler makes at
/// most one permission request and one schedule call per attempt.
pub trait NotificationGateway {
    /// Current permission state, without prompting the user.
    fn permission_status(&self) -> PermissionStatus;

    /// Prompt the user for permission. Called at most once per attempt,
    /// and only when the status is undetermined.
    fn request_permission(&mut self)
        -> Result<PermissionStatus, Box<dyn std::error::Error + Send + Sync>>;

    /// Drop every scheduled notification. Always called before scheduling.
    fn cancel_all_scheduled(&mut self);

    /// Schedule a single notification at an absolute local instant.
    fn schedule_at(
        &mut self,
        trigger: NaiveDateTime,
        title: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Where the last scheduling attempt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    Idle,
    PermissionCheck,
    Denied,
    Granted,
    Scheduled,
}

/// User-chosen reminder settings.
///
/// Persisted independently of scheduling success: a reminder can be saved
/// but unscheduled when permission was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Wall-clock time of day the reminder should fire, seconds zeroed.
    pub trigger_time: NaiveTime,
    pub message: String,
}

/// Drives the notification collaborator through one scheduling attempt at
/// a time.
#[derive(Debug)]
pub struct ReminderScheduler<G> {
    gateway: G,
    state: ReminderState,
}

impl<G: NotificationGateway> ReminderScheduler<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ReminderState::Idle,
        }
    }

    pub fn state(&self) -> ReminderState {
        self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Run one scheduling attempt for the computed absolute `trigger`.
    ///
    /// Cancels any previously scheduled reminder unconditionally, then
    /// checks permission, requesting it once if the user has never been
    /// asked. A denial terminates the attempt with nothing scheduled; the
    /// cancel is not rolled back.
    pub fn schedule(
        &mut self,
        trigger: NaiveDateTime,
        message: &str,
    ) -> Result<(), ReminderError> {
        self.state = ReminderState::Idle;
        self.gateway.cancel_all_scheduled();

        self.state = ReminderState::PermissionCheck;
        let mut status = self.gateway.permission_status();
        if status == PermissionStatus::Undetermined {
            status = self
                .gateway
                .request_permission()
                .map_err(ReminderError::Gateway)?;
        }

        if status != PermissionStatus::Granted {
            self.state = ReminderState::Denied;
            return Err(ReminderError::PermissionDenied);
        }
        self.state = ReminderState::Granted;

        self.gateway
            .schedule_at(trigger, REMINDER_TITLE, message)
            .map_err(ReminderError::Gateway)?;
        self.state = ReminderState::Scheduled;
        Ok(())
    }
}
