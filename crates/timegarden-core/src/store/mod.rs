mod config;
mod currency;
mod projects;

pub use config::{Config, NotificationsConfig, SessionDefaults};
pub use currency::CurrencyLedger;
pub use projects::{Project, ProjectStatus, ProjectStore};

use std::path::PathBuf;

/// Returns `~/.config/timegarden[-dev]/` based on TIMEGARDEN_ENV.
///
/// Set TIMEGARDEN_ENV=dev to use a separate development data directory.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TIMEGARDEN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timegarden-dev")
    } else {
        base_dir.join("timegarden")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
