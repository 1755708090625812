//! Day-boundary rollover engine.
//!
//! The rollover is a pure transition over the habit collection: it does no
//! I/O and cannot fail. The caller supplies `now` and the stored reset
//! marker, and is responsible for persisting the returned values and for
//! prepending the history entry to the history log.
//!
//! The reset marker is the sole gate: rollover executes at most once per
//! calendar day, however often the caller invokes it. The UI layer runs it
//! on every screen focus, so rapid repeated invocation must be a no-op.

use chrono::NaiveDateTime;

use super::list::HabitList;
use crate::day::DayKey;
use crate::history::HistoryEntry;

/// Outcome of a rollover invocation.
#[derive(Debug, Clone)]
pub struct Rollover {
    /// The habit collection after the transition (unchanged on a no-op).
    pub habits: HabitList,
    /// Snapshot of the day that just ended, if any habit was completed.
    /// The caller prepends this to the history log.
    pub history_entry: Option<HistoryEntry>,
    /// The new reset marker; always the calendar day of `now`.
    pub new_reset: DayKey,
}

/// Run the day-boundary transition.
///
/// If the stored marker already names today's calendar day, the habits are
/// returned unchanged and no history entry is produced. A marker that was
/// never set is treated the same way: the first run of a fresh install
/// initializes the marker without fabricating history for a day that never
/// ran.
///
/// Otherwise every habit's streak advances (if completed) or resets to
/// zero, completion flags clear, and the completed habit names are
/// snapshotted into a history entry dated with the day that just ended --
/// the stored marker, not today.
pub fn rollover(habits: &HabitList, last_reset: Option<DayKey>, now: NaiveDateTime) -> Rollover {
    let today = DayKey::of(now);

    let ended = match last_reset {
        Some(day) if day != today => day,
        _ => {
            return Rollover {
                habits: habits.clone(),
                history_entry: None,
                new_reset: today,
            };
        }
    };

    let completed_names: Vec<String> = habits
        .iter()
        .filter(|h| h.completed)
        .map(|h| h.name.clone())
        .collect();

    let history_entry = if completed_names.is_empty() {
        None
    } else {
        Some(HistoryEntry::new(ended, completed_names))
    };

    let rolled = HabitList::new(
        habits
            .iter()
            .map(|h| {
                let mut next = h.clone();
                next.streak = if h.completed { h.streak + 1 } else { 0 };
                next.completed = false;
                next
            })
            .collect(),
    );

    Rollover {
        habits: rolled,
        history_entry,
        new_reset: today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::Habit;

    fn habit(name: &str, completed: bool, streak: u32) -> Habit {
        let mut h = Habit::new(name);
        h.completed = completed;
        h.streak = streak;
        h
    }

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn day_boundary_advances_and_resets_streaks() {
        let habits = HabitList::new(vec![
            habit("Exercise", true, 2),
            habit("Read", false, 5),
        ]);

        let out = rollover(&habits, Some(day("2024-01-01")), at("2024-01-02T08:00:00"));

        let rolled = out.habits.as_slice();
        assert!(!rolled[0].completed);
        assert_eq!(rolled[0].streak, 3);
        assert!(!rolled[1].completed);
        assert_eq!(rolled[1].streak, 0);

        let entry = out.history_entry.expect("one habit was completed");
        assert_eq!(entry.date, day("2024-01-01"));
        assert_eq!(entry.completed, vec!["Exercise".to_string()]);

        assert_eq!(out.new_reset, day("2024-01-02"));
    }

    #[test]
    fn same_day_is_noop() {
        let habits = HabitList::new(vec![habit("Exercise", true, 2)]);
        let out = rollover(&habits, Some(day("2024-01-02")), at("2024-01-02T20:00:00"));

        assert_eq!(out.habits, habits);
        assert!(out.history_entry.is_none());
        assert_eq!(out.new_reset, day("2024-01-02"));
    }

    #[test]
    fn repeated_invocation_is_idempotent() {
        let habits = HabitList::new(vec![habit("Exercise", true, 2)]);
        let now = at("2024-01-02T08:00:00");

        let first = rollover(&habits, Some(day("2024-01-01")), now);
        let second = rollover(&first.habits, Some(first.new_reset), now);

        assert_eq!(second.habits, first.habits);
        assert!(second.history_entry.is_none());
        assert_eq!(second.new_reset, first.new_reset);
    }

    #[test]
    fn never_set_marker_initializes_without_history() {
        let habits = HabitList::new(vec![habit("Exercise", true, 4)]);
        let out = rollover(&habits, None, at("2024-01-02T08:00:00"));

        assert_eq!(out.habits, habits);
        assert!(out.history_entry.is_none());
        assert_eq!(out.new_reset, day("2024-01-02"));
    }

    #[test]
    fn no_entry_when_nothing_completed() {
        let habits = HabitList::new(vec![habit("Exercise", false, 3)]);
        let out = rollover(&habits, Some(day("2024-01-01")), at("2024-01-02T08:00:00"));

        assert!(out.history_entry.is_none());
        assert_eq!(out.habits.as_slice()[0].streak, 0);
    }

    #[test]
    fn entry_is_dated_with_the_day_that_ended_across_gaps() {
        // App closed for a week; the snapshot still belongs to the stored
        // marker day, not to yesterday and not to today.
        let habits = HabitList::new(vec![habit("Read", true, 1)]);
        let out = rollover(&habits, Some(day("2024-01-01")), at("2024-01-08T09:30:00"));

        assert_eq!(out.history_entry.unwrap().date, day("2024-01-01"));
        assert_eq!(out.new_reset, day("2024-01-08"));
    }

    #[test]
    fn entry_preserves_list_order() {
        let habits = HabitList::new(vec![
            habit("Water", true, 0),
            habit("Exercise", false, 0),
            habit("Read", true, 7),
        ]);
        let out = rollover(&habits, Some(day("2024-03-04")), at("2024-03-05T07:00:00"));

        assert_eq!(
            out.history_entry.unwrap().completed,
            vec!["Water".to_string(), "Read".to_string()]
        );
    }
}
