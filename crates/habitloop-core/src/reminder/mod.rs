mod scheduler;
mod trigger;

pub use scheduler::{
    NotificationGateway, PermissionStatus, ReminderConfig, ReminderScheduler, ReminderState,
    REMINDER_TITLE,
};
pub use trigger::compute_next_trigger;
