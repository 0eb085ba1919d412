//! Timer session commands.
//!
//! `run` drives the 1-second sampler loop in-process until the session
//! reaches a terminal state; sessions are ephemeral and do not survive the
//! process (an interrupted run simply loses the in-progress session).

use std::time::Duration;

use clap::Subcommand;
use timegarden_core::{
    Config, CurrencyLedger, MemorySink, NotificationSink, ProjectStore, SessionContext,
    SessionEngine, StagePlan, StdoutSink,
};

use super::{resolve_project_id, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a work/break session to completion, printing events as JSON
    Run {
        /// Project id or name to accrue work time into
        project: String,
        /// Work minutes per cycle
        #[arg(long)]
        active: Option<u64>,
        /// Break minutes between cycles
        #[arg(long = "break")]
        break_minutes: Option<u64>,
        /// Number of work cycles
        #[arg(long)]
        cycles: Option<u32>,
    },
    /// Print the stage plan and reward for given parameters without starting
    Preview {
        /// Work minutes per cycle
        #[arg(long)]
        active: Option<u64>,
        /// Break minutes between cycles
        #[arg(long = "break")]
        break_minutes: Option<u64>,
        /// Number of work cycles
        #[arg(long)]
        cycles: Option<u32>,
    },
}

pub fn run(action: TimerAction) -> CliResult {
    let config = Config::load()?;

    match action {
        TimerAction::Run {
            project,
            active,
            break_minutes,
            cycles,
        } => {
            let mut store = ProjectStore::load()?;
            let mut ledger = CurrencyLedger::load()?;
            let id = resolve_project_id(&store, &project)
                .ok_or_else(|| format!("no project matching '{project}'"))?;

            let active = active.unwrap_or(config.session.active_minutes);
            let break_minutes = break_minutes.unwrap_or(config.session.break_minutes);
            let cycles = cycles.unwrap_or(config.session.cycles);

            let mut notifier: Box<dyn NotificationSink> = if config.notifications.enabled {
                Box::new(StdoutSink)
            } else {
                Box::new(MemorySink::default())
            };

            let mut engine = SessionEngine::new();
            let event = {
                let mut ctx = SessionContext {
                    projects: &mut store,
                    currency: &mut ledger,
                    notifier: notifier.as_mut(),
                };
                engine.start_session(active, break_minutes, cycles, &id, &mut ctx)?
            };
            println!("{}", serde_json::to_string_pretty(&event)?);

            while engine.is_running() {
                std::thread::sleep(Duration::from_secs(1));
                let event = {
                    let mut ctx = SessionContext {
                        projects: &mut store,
                        currency: &mut ledger,
                        notifier: notifier.as_mut(),
                    };
                    engine.tick(&mut ctx)
                };
                // Recorded work seconds stay durable even if the process
                // dies mid-stage.
                store.save()?;
                if let Some(event) = event {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }

            ledger.save()?;
            store.save()?;
        }
        TimerAction::Preview {
            active,
            break_minutes,
            cycles,
        } => {
            let active = active.unwrap_or(config.session.active_minutes);
            let break_minutes = break_minutes.unwrap_or(config.session.break_minutes);
            let cycles = cycles.unwrap_or(config.session.cycles);
            let break_minutes = if cycles == 1 { 0 } else { break_minutes };

            let plan = StagePlan::build(active, break_minutes, cycles);
            let preview = serde_json::json!({
                "stages": plan.stages(),
                "cycles": plan.cycles(),
                "reward": plan.work_minutes(),
            });
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
    }
    Ok(())
}
