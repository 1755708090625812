use clap::Subcommand;
use chrono::Utc;

use habitloop_core::storage::Store;
use habitloop_core::{DayKey, Event};

use super::print_event;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Print goals as JSON
    List,
    /// Add a new goal
    Add {
        /// Goal name
        name: String,
        /// Total amount to reach
        #[arg(long)]
        target: u32,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<DayKey>,
    },
    /// Remove a goal
    Rm {
        /// Goal id
        id: String,
    },
    /// Apply progress to a goal (negative corrects downward)
    Progress {
        /// Goal id
        id: String,
        /// Amount to add; clamped into [0, target]
        amount: i64,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let goals = store.load_goals();

    match action {
        GoalAction::List => {
            println!("{}", serde_json::to_string_pretty(&goals)?);
        }
        GoalAction::Add {
            name,
            target,
            deadline,
        } => {
            let updated = goals.with_added(name, target, deadline);
            store.save_goals(&updated)?;
            let added = &updated.as_slice()[updated.len() - 1];
            print_event(&Event::GoalAdded {
                id: added.id.clone(),
                name: added.name.clone(),
                target: added.target,
                at: Utc::now(),
            });
        }
        GoalAction::Rm { id } => {
            if goals.get(&id).is_none() {
                eprintln!("unknown goal: {id}");
                std::process::exit(1);
            }
            store.save_goals(&goals.without(&id))?;
            print_event(&Event::GoalRemoved { id, at: Utc::now() });
        }
        GoalAction::Progress { id, amount } => {
            if goals.get(&id).is_none() {
                eprintln!("unknown goal: {id}");
                std::process::exit(1);
            }
            let updated = goals.with_progress(&id, amount);
            store.save_goals(&updated)?;
            if let Some(goal) = updated.get(&id) {
                print_event(&Event::GoalProgress {
                    id,
                    completed: goal.completed,
                    target: goal.target,
                    at: Utc::now(),
                });
            }
        }
    }
    Ok(())
}
