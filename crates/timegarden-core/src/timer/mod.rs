mod clock;
mod engine;
mod plan;

pub use clock::{Clock, SystemClock};
pub use engine::{SessionContext, SessionEngine, SessionSnapshot, StopReason};
pub use plan::{Stage, StageKind, StagePlan};
