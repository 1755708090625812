pub mod config;
pub mod goal;
pub mod habit;
pub mod history;
pub mod reminder;

use chrono::{NaiveDateTime, Utc};

use habitloop_core::storage::{Config, Store};
use habitloop_core::{rollover, Event, HabitList};

/// Local wall-clock time, the `now` every core operation receives.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Screen-focus semantics: run the rollover, persist whatever changed,
/// and return the current habit collection.
///
/// Persistence failures are warned and dropped -- losing one write is
/// non-fatal, and the next rollover recomputes from whatever state
/// survived.
pub fn rollover_and_load(store: &Store, config: &Config, now: NaiveDateTime) -> HabitList {
    let habits = store.load_habits_or_seed(config);
    let last_reset = store.load_last_reset();
    let out = rollover(&habits, last_reset, now);

    let crossed_boundary = Some(out.new_reset) != last_reset;
    if let Some(entry) = &out.history_entry {
        let history = store.load_history().with_prepended(entry.clone());
        if let Err(e) = store.save_history(&history) {
            eprintln!("Warning: failed to save history: {e}");
        }
    }
    if crossed_boundary {
        if let Err(e) = store.save_habits(&out.habits) {
            eprintln!("Warning: failed to save habits: {e}");
        }
        if let Err(e) = store.save_last_reset(out.new_reset) {
            eprintln!("Warning: failed to save reset marker: {e}");
        }
        if let Some(entry) = out.history_entry {
            print_event(&Event::RolloverCompleted {
                date: entry.date,
                completed: entry.completed,
                at: Utc::now(),
            });
        }
    }
    out.habits
}

/// Print an event as one JSON line.
pub fn print_event(event: &Event) {
    match serde_json::to_string(event) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Warning: failed to encode event: {e}"),
    }
}
