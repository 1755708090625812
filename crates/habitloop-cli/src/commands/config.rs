use clap::Subcommand;

use habitloop_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the full config as TOML
    Show,
    /// Enable or disable notification scheduling
    SetNotifications {
        /// "on" or "off"
        state: String,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetNotifications { state } => {
            let enabled = match state.as_str() {
                "on" | "true" => true,
                "off" | "false" => false,
                other => {
                    eprintln!("expected on|off, got: {other}");
                    std::process::exit(1);
                }
            };
            let mut config = Config::load_or_default();
            config.notifications.enabled = enabled;
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
