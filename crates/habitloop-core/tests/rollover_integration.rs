//! Store-backed rollover lifecycle tests.
//!
//! These exercise the full daily cycle the way the CLI drives it: load
//! state from the blob store, run the rollover, persist the outcome, and
//! come back the next day.

use chrono::NaiveDateTime;

use habitloop_core::storage::{Config, Store};
use habitloop_core::{rollover, DayKey, HistoryLog};

fn at(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

/// Run the screen-focus sequence: rollover, then persist everything the
/// engine returned. Mirrors the CLI's helper.
fn focus(store: &Store, config: &Config, now: NaiveDateTime) {
    let habits = store.load_habits_or_seed(config);
    let out = rollover(&habits, store.load_last_reset(), now);
    if let Some(entry) = out.history_entry {
        let history = store.load_history().with_prepended(entry);
        store.save_history(&history).unwrap();
    }
    store.save_habits(&out.habits).unwrap();
    store.save_last_reset(out.new_reset).unwrap();
}

#[test]
fn full_daily_cycle() {
    let store = Store::open_memory().unwrap();
    let config = Config::default();

    // Day 1, first launch: seeding plus marker initialization, no history.
    focus(&store, &config, at("2024-01-01T08:00:00"));
    assert_eq!(store.load_last_reset(), Some("2024-01-01".parse().unwrap()));
    assert!(store.load_history().is_empty());

    // User completes two habits during day 1.
    let habits = store.load_habits_or_seed(&config);
    let water = habits.as_slice()[0].id.clone();
    let read = habits.as_slice()[6].id.clone();
    let habits = habits.with_toggled(&water).with_toggled(&read);
    store.save_habits(&habits).unwrap();

    // Day 2 focus: snapshot lands in history dated day 1, streaks advance.
    focus(&store, &config, at("2024-01-02T07:30:00"));

    let history = store.load_history();
    assert_eq!(history.len(), 1);
    let entry = &history.entries()[0];
    assert_eq!(entry.date, "2024-01-01".parse::<DayKey>().unwrap());
    assert_eq!(entry.completed, vec!["Drink 1.5L of water", "Read"]);

    let rolled = store.load_habits_or_seed(&config);
    assert_eq!(rolled.get(&water).unwrap().streak, 1);
    assert!(!rolled.get(&water).unwrap().completed);
    assert_eq!(rolled.as_slice()[1].streak, 0);

    // Repeated focus the same day changes nothing.
    focus(&store, &config, at("2024-01-02T12:00:00"));
    assert_eq!(store.load_history().len(), 1);
    assert_eq!(store.load_habits_or_seed(&config), rolled);
}

#[test]
fn uncompleted_day_resets_streaks_without_history() {
    let store = Store::open_memory().unwrap();
    let config = Config::default();

    focus(&store, &config, at("2024-01-01T08:00:00"));
    let habits = store.load_habits_or_seed(&config);
    let id = habits.as_slice()[0].id.clone();
    store
        .save_habits(&habits.with_toggled(&id))
        .unwrap();

    focus(&store, &config, at("2024-01-02T08:00:00"));
    assert_eq!(
        store.load_habits_or_seed(&config).get(&id).unwrap().streak,
        1
    );

    // Nothing completed on day 2: streak back to zero, no new entry.
    focus(&store, &config, at("2024-01-03T08:00:00"));
    assert_eq!(
        store.load_habits_or_seed(&config).get(&id).unwrap().streak,
        0
    );
    assert_eq!(store.load_history().len(), 1);
}

#[test]
fn history_stays_newest_first_across_days() {
    let store = Store::open_memory().unwrap();
    let config = Config::default();

    focus(&store, &config, at("2024-01-01T08:00:00"));
    for day in 2..=4 {
        let habits = store.load_habits_or_seed(&config);
        let id = habits.as_slice()[0].id.clone();
        store.save_habits(&habits.with_toggled(&id)).unwrap();
        focus(&store, &config, at(&format!("2024-01-{day:02}T08:00:00")));
    }

    let history = store.load_history();
    let dates: Vec<String> = history.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
}

#[test]
fn history_blob_survives_reload_as_raw_json() {
    let store = Store::open_memory().unwrap();
    let config = Config::default();

    focus(&store, &config, at("2024-01-01T08:00:00"));
    let habits = store.load_habits_or_seed(&config);
    let id = habits.as_slice()[0].id.clone();
    store.save_habits(&habits.with_toggled(&id)).unwrap();
    focus(&store, &config, at("2024-01-02T08:00:00"));

    // The persisted blob is a plain JSON array under the original key.
    let raw = store.kv_get("habitHistory").unwrap().unwrap();
    let parsed: HistoryLog = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, store.load_history());
    assert!(raw.contains("\"date\":\"2024-01-01\""));
}
