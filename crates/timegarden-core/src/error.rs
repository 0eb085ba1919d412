//! Error types for timegarden-core.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected timer session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// `active_minutes` must be strictly positive.
    #[error("active minutes must be greater than zero")]
    InvalidActiveMinutes,

    /// `cycles` must be strictly positive.
    #[error("cycle count must be greater than zero")]
    InvalidCycles,

    /// The subject project does not exist in the store.
    #[error("unknown project: {0}")]
    UnknownProject(String),

    /// Only active projects can be timed.
    #[error("project '{0}' is not active")]
    ProjectNotActive(String),
}

/// Project store and currency ledger errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// All project slots are occupied by active projects.
    #[error("all {max} project slots are in use; upgrade slots or finish a project")]
    SlotsFull { max: usize },

    /// Lookup by id failed.
    #[error("unknown project: {0}")]
    UnknownProject(String),

    /// The balance does not cover the requested purchase.
    #[error("cannot afford upgrade: costs {cost}, balance is {balance}")]
    CannotAfford { cost: u64, balance: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration load/save errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access configuration at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
