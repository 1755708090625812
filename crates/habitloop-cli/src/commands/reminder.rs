use clap::Subcommand;
use chrono::{Timelike, Utc};

use habitloop_core::storage::{Config, Store};
use habitloop_core::{
    compute_next_trigger, DayKey, Event, NotificationGateway, ReminderConfig, ReminderError,
    ReminderScheduler,
};

use super::{now_local, print_event};
use crate::gateway::KvGateway;

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Save the daily reminder and schedule its next trigger
    Set {
        /// Hour of day (0-23)
        #[arg(long)]
        hour: u32,
        /// Minute (0-59)
        #[arg(long)]
        minute: u32,
        /// Notification body; defaults to the configured message
        #[arg(long)]
        message: Option<String>,
    },
    /// Show the saved reminder and any pending notification
    Status,
    /// Cancel the scheduled reminder and forget the saved settings
    Cancel,
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = Store::open()?;

    match action {
        ReminderAction::Set {
            hour,
            minute,
            message,
        } => {
            let now = now_local();
            let trigger = compute_next_trigger(hour, minute, now)?;
            let reminder = ReminderConfig {
                trigger_time: trigger.time(),
                message: message.unwrap_or_else(|| config.notifications.default_message.clone()),
            };

            // Saving comes first and sticks even if scheduling fails below:
            // a reminder can be saved but unscheduled when permission is
            // denied.
            if let Err(e) = store.save_reminder(&reminder, DayKey::of(now)) {
                eprintln!("Warning: failed to save reminder: {e}");
            }

            let mut scheduler = ReminderScheduler::new(KvGateway::new(&store, &config));
            match scheduler.schedule(trigger, &reminder.message) {
                Ok(()) => {
                    print_event(&Event::ReminderScheduled {
                        trigger,
                        message: reminder.message,
                        at: Utc::now(),
                    });
                }
                Err(ReminderError::PermissionDenied) => {
                    print_event(&Event::ReminderDenied { at: Utc::now() });
                    eprintln!(
                        "reminder saved but not scheduled: notifications are disabled \
                         (enable with `habitloop config set-notifications on`)"
                    );
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        ReminderAction::Status => {
            let saved = store.load_reminder().map(|r| {
                serde_json::json!({
                    "hour": r.trigger_time.hour(),
                    "minute": r.trigger_time.minute(),
                    "message": r.message,
                })
            });
            let status = serde_json::json!({
                "saved": saved,
                "pending": KvGateway::pending(&store),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        ReminderAction::Cancel => {
            let mut gateway = KvGateway::new(&store, &config);
            gateway.cancel_all_scheduled();
            store.clear_reminder()?;
            print_event(&Event::ReminderCancelled { at: Utc::now() });
        }
    }
    Ok(())
}
