//! # Timegarden Core Library
//!
//! Core business logic for Timegarden, a single-user productivity
//! gamification tool: projects accrue timed work through a Pomodoro-style
//! session engine, and completed sessions pay out a virtual currency.
//! The CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Session Engine**: a wall-clock-based state machine that requires the
//!   caller to invoke `tick()` once per second; elapsed time is always
//!   computed against the stage's start timestamp, never accumulated from
//!   per-tick deltas, so sampler jitter cannot drift the clock
//! - **Stores**: JSON-persisted project ledger and currency balance,
//!   TOML-based configuration
//! - **Notifications**: a sink trait the engine announces stage transitions
//!   through
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: the timer session state machine
//! - [`ProjectStore`]: project list, status transitions, accrued seconds
//! - [`CurrencyLedger`]: the reward balance
//! - [`Config`]: application configuration management

pub mod duration;
pub mod error;
pub mod events;
pub mod notify;
pub mod store;
pub mod timer;

pub use duration::{duration_to_seconds, extract_field, seconds_to_duration, DurationField};
pub use error::{ConfigError, SessionError, StoreError};
pub use events::SessionEvent;
pub use notify::{MemorySink, NotificationSink, StdoutSink};
pub use store::{Config, CurrencyLedger, Project, ProjectStore, ProjectStatus};
pub use timer::{
    Clock, SessionContext, SessionEngine, SessionSnapshot, Stage, StageKind, StagePlan,
    StopReason, SystemClock,
};
