//! Configuration management commands.

use clap::Subcommand;
use timegarden_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Change session defaults and notification preferences
    Set {
        /// Default work minutes per cycle
        #[arg(long)]
        active: Option<u64>,
        /// Default break minutes between cycles
        #[arg(long = "break")]
        break_minutes: Option<u64>,
        /// Default number of cycles
        #[arg(long)]
        cycles: Option<u32>,
        /// Enable or disable notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> CliResult {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            active,
            break_minutes,
            cycles,
            notifications,
        } => {
            if let Some(active) = active {
                config.session.active_minutes = active;
            }
            if let Some(break_minutes) = break_minutes {
                config.session.break_minutes = break_minutes;
            }
            if let Some(cycles) = cycles {
                config.session.cycles = cycles;
            }
            if let Some(enabled) = notifications {
                config.notifications.enabled = enabled;
            }
            config.save()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
