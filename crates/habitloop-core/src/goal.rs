//! Longer-term numeric goals.
//!
//! Goals carry no temporal logic; they are a plain keyed collection with
//! bounded progress. Progress updates clamp into `[0, target]` on every
//! write, so a stored goal can never report more than its target or less
//! than zero.

use serde::{Deserialize, Serialize};

use crate::day::DayKey;

/// A numeric goal with a fixed target and optional deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    /// Total amount to reach; always positive.
    pub target: u32,
    /// Progress so far; held within `[0, target]`.
    pub completed: u32,
    pub deadline: Option<DayKey>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: u32, deadline: Option<DayKey>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            target: target.max(1),
            completed: 0,
            deadline,
        }
    }

    /// 0.0 .. 1.0 fraction of the target reached.
    pub fn progress(&self) -> f64 {
        f64::from(self.completed) / f64::from(self.target)
    }
}

/// Ordered collection of goals with copy-on-write mutation.
///
/// Serializes as a plain JSON array, the persisted form of the `goals` blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalList(Vec<Goal>);

impl GoalList {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self(goals)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Goal> {
        self.0.iter().find(|g| g.id == id)
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.0
    }

    /// New list with a fresh goal appended.
    pub fn with_added(
        &self,
        name: impl Into<String>,
        target: u32,
        deadline: Option<DayKey>,
    ) -> Self {
        let mut goals = self.0.clone();
        goals.push(Goal::new(name, target, deadline));
        Self(goals)
    }

    /// New list without the goal `id`. Removing an unknown id is a no-op.
    pub fn without(&self, id: &str) -> Self {
        Self(self.0.iter().filter(|g| g.id != id).cloned().collect())
    }

    /// New list with `amount` applied to the goal `id`, clamped into
    /// `[0, target]`. Negative amounts correct progress downward.
    pub fn with_progress(&self, id: &str, amount: i64) -> Self {
        Self(
            self.0
                .iter()
                .map(|g| {
                    if g.id == id {
                        let mut updated = g.clone();
                        let next = i64::from(g.completed) + amount;
                        updated.completed = next.clamp(0, i64::from(g.target)) as u32;
                        updated
                    } else {
                        g.clone()
                    }
                })
                .collect(),
        )
    }
}

impl From<Vec<Goal>> for GoalList {
    fn from(goals: Vec<Goal>) -> Self {
        Self(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_at_target() {
        let list = GoalList::default().with_added("Push-ups", 3000, None);
        let id = list.as_slice()[0].id.clone();

        let over = list.with_progress(&id, 5000);
        assert_eq!(over.get(&id).unwrap().completed, 3000);
    }

    #[test]
    fn progress_never_goes_negative() {
        let list = GoalList::default().with_added("Reading", 100, None);
        let id = list.as_slice()[0].id.clone();

        let up = list.with_progress(&id, 40);
        assert_eq!(up.get(&id).unwrap().completed, 40);

        let corrected = up.with_progress(&id, -75);
        assert_eq!(corrected.get(&id).unwrap().completed, 0);
    }

    #[test]
    fn progress_accumulates() {
        let list = GoalList::default().with_added("Reading", 100, None);
        let id = list.as_slice()[0].id.clone();

        let twice = list.with_progress(&id, 30).with_progress(&id, 25);
        assert_eq!(twice.get(&id).unwrap().completed, 55);
    }

    #[test]
    fn zero_target_is_raised_to_one() {
        let goal = Goal::new("Empty", 0, None);
        assert_eq!(goal.target, 1);
    }

    #[test]
    fn progress_fraction() {
        let list = GoalList::default().with_added("Reading", 100, None);
        let id = list.as_slice()[0].id.clone();
        let list = list.with_progress(&id, 40);
        assert!((list.get(&id).unwrap().progress() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn deadline_survives_serde() {
        let deadline = "2024-06-30".parse().ok();
        let list = GoalList::default().with_added("Push-ups", 3000, deadline);
        let json = serde_json::to_string(&list).unwrap();
        let back: GoalList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.as_slice()[0].deadline, deadline);
    }
}
