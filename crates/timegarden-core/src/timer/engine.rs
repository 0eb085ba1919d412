//! Timer session engine.
//!
//! A wall-clock-based state machine. It owns no thread: the caller invokes
//! `tick()` once per second (the sampler), and the engine recomputes elapsed
//! time from the current stage's start timestamp on every call. Because
//! elapsed time is never accumulated from per-tick deltas, sampler jitter
//! cannot drift the session clock.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running(stage_index) -> Idle
//! ```
//!
//! There is no paused state. A session ends by running its stage plan to
//! exhaustion (the reward is credited), by an explicit stop, or by external
//! invalidation when the subject project stops being active mid-session.

use chrono::Utc;

use super::clock::{Clock, SystemClock};
use super::plan::{StageKind, StagePlan};
use crate::duration::seconds_to_duration;
use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::notify::NotificationSink;
use crate::store::{CurrencyLedger, ProjectStatus, ProjectStore};
use serde::Serialize;

/// Why a session stopped.
///
/// `Completed` is reserved for the engine's own natural-completion path;
/// external callers only ever pass `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Canceled,
    Completed,
}

/// Mutable collaborators a session operates on.
///
/// Borrowed per call rather than owned, so the caller keeps ownership of its
/// stores between ticks and the engine stays independently testable.
pub struct SessionContext<'a> {
    pub projects: &'a mut ProjectStore,
    pub currency: &'a mut CurrencyLedger,
    pub notifier: &'a mut dyn NotificationSink,
}

/// Live state of one running session. Exists only while running; every
/// terminal transition destroys it. Never serialized or persisted.
#[derive(Debug)]
struct TimerSession {
    project_id: String,
    plan: StagePlan,
    stage_index: usize,
    /// Wall-clock anchor for the current stage; reset only when a new stage
    /// begins.
    stage_started_epoch_ms: u64,
    /// The subject project's total seconds as of the last completed work
    /// stage boundary. The value written to the store during a work stage is
    /// always `accumulated_seconds + elapsed`.
    accumulated_seconds: u64,
    reward: u64,
    remaining_display: String,
}

/// The timer session state machine.
#[derive(Debug)]
pub struct SessionEngine<C = SystemClock> {
    clock: C,
    session: Option<TimerSession>,
}

impl SessionEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            session: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Remaining time in the current stage as `HH:MM:SS`, if running.
    pub fn remaining_display(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.remaining_display.as_str())
    }

    pub fn stage_kind(&self) -> Option<StageKind> {
        let session = self.session.as_ref()?;
        session.plan.get(session.stage_index).map(|s| s.kind)
    }

    /// 1-based cycle number, or 0 while idle.
    pub fn current_cycle(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.plan.cycle_of(s.stage_index))
            .unwrap_or(0)
    }

    pub fn total_cycles(&self) -> u32 {
        self.session.as_ref().map(|s| s.plan.cycles()).unwrap_or(0)
    }

    pub fn subject_project_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.project_id.as_str())
    }

    /// Reward paid out if the session completes naturally; 0 while idle.
    pub fn pending_reward(&self) -> u64 {
        self.session.as_ref().map(|s| s.reward).unwrap_or(0)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_running: self.is_running(),
            remaining: self.remaining_display().map(String::from),
            stage_kind: self.stage_kind(),
            current_cycle: self.current_cycle(),
            total_cycles: self.total_cycles(),
            project_id: self.subject_project_id().map(String::from),
            pending_reward: self.pending_reward(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a session of `cycles` work stages with breaks between them.
    ///
    /// Rejects non-positive `active_minutes` or `cycles` without touching
    /// state. An in-flight session is fully canceled first, so at most one
    /// session is ever live.
    pub fn start_session(
        &mut self,
        active_minutes: u64,
        break_minutes: u64,
        cycles: u32,
        project_id: &str,
        ctx: &mut SessionContext<'_>,
    ) -> Result<SessionEvent, SessionError> {
        if active_minutes == 0 {
            return Err(SessionError::InvalidActiveMinutes);
        }
        if cycles == 0 {
            return Err(SessionError::InvalidCycles);
        }
        let project = ctx
            .projects
            .get(project_id)
            .ok_or_else(|| SessionError::UnknownProject(project_id.to_string()))?;
        if project.status != ProjectStatus::Active {
            return Err(SessionError::ProjectNotActive(project.name.clone()));
        }
        let accumulated_seconds = project.total_seconds_spent;

        if self.session.is_some() {
            self.stop_session(StopReason::Canceled, ctx);
        }

        // A single cycle has no break stage at all; force the minutes to 0
        // so the plan never carries a phantom break duration.
        let break_minutes = if cycles == 1 { 0 } else { break_minutes };
        let plan = StagePlan::build(active_minutes, break_minutes, cycles);
        let reward = plan.work_minutes();
        let first = plan.stages()[0];

        self.session = Some(TimerSession {
            project_id: project_id.to_string(),
            plan,
            stage_index: 0,
            stage_started_epoch_ms: self.clock.now_ms(),
            accumulated_seconds,
            reward,
            remaining_display: seconds_to_duration(first.duration_secs()),
        });
        ctx.notifier.notify(first.kind.announcement());
        Ok(SessionEvent::StageStarted {
            stage_index: 0,
            kind: first.kind,
            cycle: 1,
            duration_secs: first.duration_secs(),
            at: Utc::now(),
        })
    }

    /// Advance the session against the wall clock. Call once per second.
    ///
    /// Returns an event at stage boundaries and terminal transitions, `None`
    /// otherwise. A no-op while idle.
    pub fn tick(&mut self, ctx: &mut SessionContext<'_>) -> Option<SessionEvent> {
        let mut session = self.session.take()?;

        // Invalidation check first: the subject project may have been
        // abandoned or completed from elsewhere since the last tick.
        let still_active = ctx
            .projects
            .get(&session.project_id)
            .map(|p| p.status == ProjectStatus::Active)
            .unwrap_or(false);
        if !still_active {
            self.session = Some(session);
            ctx.notifier.notify("Timer Canceled");
            return self.stop_session(StopReason::Canceled, ctx);
        }

        // The plan is non-empty whenever a session exists (cycles >= 1);
        // restore the session on the impossible miss rather than losing it.
        let stage = match session.plan.get(session.stage_index) {
            Some(stage) => *stage,
            None => {
                self.session = Some(session);
                return None;
            }
        };
        let now = self.clock.now_ms();
        let elapsed = round_ms_to_secs(now.abs_diff(session.stage_started_epoch_ms));
        let stage_secs = stage.duration_secs();
        let remaining = stage_secs as i64 - elapsed as i64;
        session.remaining_display = seconds_to_duration(remaining.max(0) as u64);

        if remaining >= 0 {
            if stage.kind == StageKind::Work {
                ctx.projects
                    .record_total_seconds(&session.project_id, session.accumulated_seconds + elapsed);
            }
            self.session = Some(session);
            return None;
        }

        // Stage exhausted. A work stage folds its exact duration into the
        // base and writes it through, so the recorded total at the boundary
        // is independent of tick rounding.
        if stage.kind == StageKind::Work {
            session.accumulated_seconds += stage_secs;
            ctx.projects
                .record_total_seconds(&session.project_id, session.accumulated_seconds);
        }

        let next = session.stage_index + 1;
        if next >= session.plan.len() {
            self.session = Some(session);
            return self.stop_session(StopReason::Completed, ctx);
        }

        session.stage_index = next;
        session.stage_started_epoch_ms = now;
        // Bounds checked against plan length above.
        let next_stage = session.plan.stages()[next];
        session.remaining_display = seconds_to_duration(next_stage.duration_secs());
        let event = SessionEvent::StageStarted {
            stage_index: next,
            kind: next_stage.kind,
            cycle: session.plan.cycle_of(next),
            duration_secs: next_stage.duration_secs(),
            at: Utc::now(),
        };
        ctx.notifier.notify(next_stage.kind.announcement());
        self.session = Some(session);
        Some(event)
    }

    /// Tear the session down. Synchronous and total: no later tick can
    /// observe or mutate anything from the stopped session.
    ///
    /// Safe to call while idle; returns `None` and changes nothing.
    pub fn stop_session(
        &mut self,
        reason: StopReason,
        ctx: &mut SessionContext<'_>,
    ) -> Option<SessionEvent> {
        let session = self.session.take()?;
        match reason {
            StopReason::Completed => {
                ctx.currency.credit(session.reward);
                ctx.notifier.notify("Timer Completed!");
                Some(SessionEvent::SessionCompleted {
                    project_id: session.project_id,
                    reward: session.reward,
                    at: Utc::now(),
                })
            }
            StopReason::Canceled => Some(SessionEvent::SessionCanceled {
                project_id: session.project_id,
                at: Utc::now(),
            }),
        }
    }
}

/// Read-only view of the engine's observable state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub is_running: bool,
    pub remaining: Option<String>,
    pub stage_kind: Option<StageKind>,
    pub current_cycle: u32,
    pub total_cycles: u32,
    pub project_id: Option<String>,
    pub pending_reward: u64,
}

/// Whole seconds from a millisecond difference, rounding to nearest.
///
/// Rounding rather than truncating tolerates the sampler firing slightly
/// early or late at the cost of at most half a second of display jitter.
fn round_ms_to_secs(ms: u64) -> u64 {
    (ms + 500) / 1000
}
