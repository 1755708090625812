use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod gateway;

#[derive(Parser)]
#[command(name = "habitloop", version, about = "Habitloop CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily habits (runs the day rollover first)
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Longer-term goals
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Completed-habit history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// Daily reminder notification
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::History { action } => commands::history::run(action),
        Commands::Reminder { action } => commands::reminder::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "habitloop", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
