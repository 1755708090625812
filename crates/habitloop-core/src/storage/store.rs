//! SQLite-backed key→JSON blob store.
//!
//! Every persisted collection is one JSON blob under a fixed key, replaced
//! wholesale on write. Each key is logically owned by exactly one
//! component; no component reads a key it does not own. Reads that fail or
//! decode garbage fall back to "no prior state" with a warning -- losing a
//! write is accepted, crashing over one is not.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use std::path::Path;

use super::config::Config;
use crate::day::DayKey;
use crate::error::{CoreError, StorageError};
use crate::goal::GoalList;
use crate::habit::{Habit, HabitList};
use crate::history::HistoryLog;
use crate::reminder::ReminderConfig;

const KEY_HABITS: &str = "habits";
const KEY_HISTORY: &str = "habitHistory";
const KEY_LAST_RESET: &str = "lastResetDate";
const KEY_GOALS: &str = "goals";
const KEY_REMINDER_TIME: &str = "reminderTime";
const KEY_REMINDER_MESSAGE: &str = "reminderMessage";

/// Persisted form of `reminderTime`: a local ISO-8601 instant whose
/// time-of-day component is the trigger time.
const REMINDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Key→JSON blob store over SQLite.
///
/// The key strings are the wire contract inherited from the original
/// blob store; renaming one silently orphans existing user data.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `~/.config/habitloop/habitloop.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = super::data_dir()
            .map_err(|e| CoreError::Custom(e.to_string()))?
            .join("habitloop.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    // ── Raw blob access ──────────────────────────────────────────────

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the kv store, replacing any prior value.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key from the kv store. Missing keys are a no-op.
    pub fn kv_delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Typed accessors ──────────────────────────────────────────────

    /// Load the habit collection, seeding it from config on first run.
    ///
    /// A missing key, a failed read, or a blob that no longer decodes all
    /// count as "no prior state": the seed list is materialized and
    /// persisted (best effort).
    pub fn load_habits_or_seed(&self, config: &Config) -> HabitList {
        match self.load_json(KEY_HABITS) {
            Some(habits) => habits,
            None => {
                let seeded = HabitList::new(
                    config.seed.habits.iter().map(|name| Habit::new(name.clone())).collect(),
                );
                if let Err(e) = self.save_habits(&seeded) {
                    eprintln!("Warning: failed to persist seed habits: {e}");
                }
                seeded
            }
        }
    }

    pub fn save_habits(&self, habits: &HabitList) -> Result<(), StorageError> {
        self.save_json(KEY_HABITS, habits)
    }

    /// Load the history log, falling back to an empty log.
    pub fn load_history(&self) -> HistoryLog {
        self.load_json(KEY_HISTORY).unwrap_or_default()
    }

    pub fn save_history(&self, history: &HistoryLog) -> Result<(), StorageError> {
        self.save_json(KEY_HISTORY, history)
    }

    /// Load the rollover reset marker. `None` means "never set".
    pub fn load_last_reset(&self) -> Option<DayKey> {
        let raw = self.read_key(KEY_LAST_RESET)?;
        match raw.parse() {
            Ok(day) => Some(day),
            Err(e) => {
                eprintln!("Warning: discarding malformed {KEY_LAST_RESET}: {e}");
                None
            }
        }
    }

    pub fn save_last_reset(&self, day: DayKey) -> Result<(), StorageError> {
        self.kv_set(KEY_LAST_RESET, &day.to_string())
    }

    /// Load the goal collection, falling back to an empty list.
    pub fn load_goals(&self) -> GoalList {
        self.load_json(KEY_GOALS).unwrap_or_default()
    }

    pub fn save_goals(&self, goals: &GoalList) -> Result<(), StorageError> {
        self.save_json(KEY_GOALS, goals)
    }

    /// Load the saved reminder settings, if any.
    ///
    /// Only the time-of-day component of the stored instant is meaningful.
    pub fn load_reminder(&self) -> Option<ReminderConfig> {
        let raw = self.read_key(KEY_REMINDER_TIME)?;
        let instant = match NaiveDateTime::parse_from_str(&raw, REMINDER_TIME_FORMAT) {
            Ok(instant) => instant,
            Err(e) => {
                eprintln!("Warning: discarding malformed {KEY_REMINDER_TIME}: {e}");
                return None;
            }
        };
        let message = self.read_key(KEY_REMINDER_MESSAGE).unwrap_or_default();
        Some(ReminderConfig {
            trigger_time: instant.time(),
            message,
        })
    }

    /// Persist reminder settings.
    ///
    /// Written before any scheduling attempt, so a reminder can be saved
    /// but unscheduled when permission is later denied.
    pub fn save_reminder(
        &self,
        reminder: &ReminderConfig,
        today: DayKey,
    ) -> Result<(), StorageError> {
        let instant = today.date().and_time(reminder.trigger_time);
        self.kv_set(
            KEY_REMINDER_TIME,
            &instant.format(REMINDER_TIME_FORMAT).to_string(),
        )?;
        self.kv_set(KEY_REMINDER_MESSAGE, &reminder.message)
    }

    /// Remove the saved reminder settings.
    pub fn clear_reminder(&self) -> Result<(), StorageError> {
        self.kv_delete(KEY_REMINDER_TIME)?;
        self.kv_delete(KEY_REMINDER_MESSAGE)
    }

    // ── Helpers ──────────────────────────────────────────────────────

    /// Read a key, warning and returning `None` on storage failure.
    fn read_key(&self, key: &str) -> Option<String> {
        match self.kv_get(key) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Warning: failed to read {key}: {e}");
                None
            }
        }
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_key(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Warning: discarding malformed {key}: {e}");
                None
            }
        }
    }

    fn save_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        self.kv_set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store_roundtrip() {
        let store = Store::open_memory().unwrap();
        assert!(store.kv_get("test").unwrap().is_none());
        store.kv_set("test", "hello").unwrap();
        assert_eq!(store.kv_get("test").unwrap().unwrap(), "hello");
        store.kv_set("test", "replaced").unwrap();
        assert_eq!(store.kv_get("test").unwrap().unwrap(), "replaced");
        store.kv_delete("test").unwrap();
        assert!(store.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn first_run_seeds_and_persists() {
        let store = Store::open_memory().unwrap();
        let config = Config::default();

        let habits = store.load_habits_or_seed(&config);
        assert_eq!(habits.len(), 8);
        assert_eq!(habits.as_slice()[0].name, "Drink 1.5L of water");

        // Second load reads the persisted list, not a fresh seed.
        let again = store.load_habits_or_seed(&config);
        assert_eq!(again, habits);
    }

    #[test]
    fn malformed_habits_blob_reseeds() {
        let store = Store::open_memory().unwrap();
        store.kv_set(KEY_HABITS, "{not json").unwrap();
        let habits = store.load_habits_or_seed(&Config::default());
        assert_eq!(habits.len(), 8);
    }

    #[test]
    fn last_reset_roundtrip() {
        let store = Store::open_memory().unwrap();
        assert!(store.load_last_reset().is_none());

        let day: DayKey = "2024-01-02".parse().unwrap();
        store.save_last_reset(day).unwrap();
        assert_eq!(store.load_last_reset(), Some(day));
        assert_eq!(
            store.kv_get(KEY_LAST_RESET).unwrap().unwrap(),
            "2024-01-02"
        );
    }

    #[test]
    fn malformed_last_reset_is_never_set() {
        let store = Store::open_memory().unwrap();
        store.kv_set(KEY_LAST_RESET, "yesterday-ish").unwrap();
        assert!(store.load_last_reset().is_none());
    }

    #[test]
    fn reminder_roundtrip_keeps_time_of_day() {
        let store = Store::open_memory().unwrap();
        let reminder = ReminderConfig {
            trigger_time: chrono::NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            message: "Track your habits!".into(),
        };
        let today: DayKey = "2024-01-02".parse().unwrap();
        store.save_reminder(&reminder, today).unwrap();

        assert_eq!(
            store.kv_get(KEY_REMINDER_TIME).unwrap().unwrap(),
            "2024-01-02T07:30:00"
        );
        let loaded = store.load_reminder().unwrap();
        assert_eq!(loaded, reminder);

        store.clear_reminder().unwrap();
        assert!(store.load_reminder().is_none());
    }

    #[test]
    fn goals_and_history_default_to_empty() {
        let store = Store::open_memory().unwrap();
        assert!(store.load_goals().is_empty());
        assert!(store.load_history().is_empty());
    }
}
