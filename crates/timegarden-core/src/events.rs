//! Session events emitted by the timer engine.
//!
//! The CLI prints these as JSON; a GUI layer would render them instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::StageKind;

/// Every observable transition of a timer session produces an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A work or break stage began (including stage 0 at session start).
    StageStarted {
        stage_index: usize,
        kind: StageKind,
        cycle: u32,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The stage plan ran to exhaustion; the reward was credited.
    SessionCompleted {
        project_id: String,
        reward: u64,
        at: DateTime<Utc>,
    },
    /// The session ended early, either on request or because the subject
    /// project stopped being active. No reward is paid.
    SessionCanceled {
        project_id: String,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization() {
        let event = SessionEvent::StageStarted {
            stage_index: 0,
            kind: StageKind::Work,
            cycle: 1,
            duration_secs: 1500,
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"stage_started\""));
        let _decoded: SessionEvent = serde_json::from_str(&json).unwrap();
    }
}
