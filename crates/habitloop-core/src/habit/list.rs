//! Habit records and the habit collection.
//!
//! `HabitList` is copy-on-write: every mutating operation returns a new
//! list value and leaves the receiver untouched. The caller persists the
//! whole collection as one blob, so the value it holds is always exactly
//! what was (or will be) written.

use serde::{Deserialize, Serialize};

/// A single daily habit.
///
/// `completed` is toggled by the user during the day; `completed` and
/// `streak` are rewritten exclusively by the rollover engine at the day
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub completed: bool,
    /// Consecutive days this habit was completed at rollover time.
    pub streak: u32,
}

impl Habit {
    /// Create a fresh habit: not completed, streak zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            completed: false,
            streak: 0,
        }
    }
}

/// Ordered collection of habits with copy-on-write mutation.
///
/// Serializes as a plain JSON array, the persisted form of the `habits` blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitList(Vec<Habit>);

impl HabitList {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self(habits)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.0.iter().find(|h| h.id == id)
    }

    pub fn as_slice(&self) -> &[Habit] {
        &self.0
    }

    /// New list with a fresh habit appended.
    pub fn with_added(&self, name: impl Into<String>) -> Self {
        let mut habits = self.0.clone();
        habits.push(Habit::new(name));
        Self(habits)
    }

    /// New list without the habit `id`. Removing an unknown id is a no-op.
    pub fn without(&self, id: &str) -> Self {
        Self(self.0.iter().filter(|h| h.id != id).cloned().collect())
    }

    /// New list with `completed` flipped on the habit `id`.
    pub fn with_toggled(&self, id: &str) -> Self {
        self.with_updated(id, |h| h.completed = !h.completed)
    }

    /// New list with the habit `id` renamed.
    pub fn with_renamed(&self, id: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        self.with_updated(id, move |h| h.name = name.clone())
    }

    /// New list with `f` applied to the habit `id`. Unknown ids leave the
    /// list unchanged (still a fresh value).
    pub fn with_updated(&self, id: &str, f: impl Fn(&mut Habit)) -> Self {
        Self(
            self.0
                .iter()
                .map(|h| {
                    if h.id == id {
                        let mut updated = h.clone();
                        f(&mut updated);
                        updated
                    } else {
                        h.clone()
                    }
                })
                .collect(),
        )
    }
}

impl From<Vec<Habit>> for HabitList {
    fn from(habits: Vec<Habit>) -> Self {
        Self(habits)
    }
}

impl<'a> IntoIterator for &'a HabitList {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
