use clap::Subcommand;

use habitloop_core::storage::Store;
use habitloop_core::HistoryLog;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Print history entries as JSON, newest first
    List {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let history = store.load_history();

    match action {
        HistoryAction::List { limit } => {
            let shown: Vec<_> = match limit {
                Some(n) => history.iter().take(n).cloned().collect(),
                None => history.iter().cloned().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&HistoryLog::new(shown))?);
        }
    }
    Ok(())
}
