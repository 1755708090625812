use clap::Subcommand;
use chrono::Utc;

use habitloop_core::storage::{Config, Store};
use habitloop_core::Event;

use super::{now_local, print_event, rollover_and_load};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Print today's habits as JSON
    List,
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
    },
    /// Remove a habit
    Rm {
        /// Habit id
        id: String,
    },
    /// Flip a habit's completion for today
    Toggle {
        /// Habit id
        id: String,
    },
    /// Rename a habit
    Rename {
        /// Habit id
        id: String,
        /// New name
        name: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = Store::open()?;
    let habits = rollover_and_load(&store, &config, now_local());

    match action {
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Add { name } => {
            let updated = habits.with_added(name);
            store.save_habits(&updated)?;
            let added = &updated.as_slice()[updated.len() - 1];
            print_event(&Event::HabitAdded {
                id: added.id.clone(),
                name: added.name.clone(),
                at: Utc::now(),
            });
        }
        HabitAction::Rm { id } => {
            if habits.get(&id).is_none() {
                eprintln!("unknown habit: {id}");
                std::process::exit(1);
            }
            store.save_habits(&habits.without(&id))?;
            print_event(&Event::HabitRemoved { id, at: Utc::now() });
        }
        HabitAction::Toggle { id } => {
            if habits.get(&id).is_none() {
                eprintln!("unknown habit: {id}");
                std::process::exit(1);
            }
            let updated = habits.with_toggled(&id);
            store.save_habits(&updated)?;
            let habit = updated.get(&id).map(|h| (h.completed, h.streak));
            if let Some((completed, streak)) = habit {
                print_event(&Event::HabitToggled {
                    id,
                    completed,
                    streak,
                    at: Utc::now(),
                });
            }
        }
        HabitAction::Rename { id, name } => {
            if habits.get(&id).is_none() {
                eprintln!("unknown habit: {id}");
                std::process::exit(1);
            }
            store.save_habits(&habits.with_renamed(&id, name.clone()))?;
            print_event(&Event::HabitRenamed {
                id,
                name,
                at: Utc::now(),
            });
        }
    }
    Ok(())
}
