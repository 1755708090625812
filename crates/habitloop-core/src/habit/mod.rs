mod list;
mod rollover;

pub use list::{Habit, HabitList};
pub use rollover::{rollover, Rollover};
